mod logging;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, eyre};

use fieldui::{DemoOptions, FieldDemo, StoryCatalog};

use crate::logging::{LogConfig, init_logging};

#[derive(Debug, Parser)]
#[command(
    name = "fieldui-demo",
    version,
    about = "Showcase the fieldui input widget in the terminal"
)]
struct Cli {
    /// Story catalog (.json, .yaml or .toml); defaults to the built-in catalog
    #[arg(short = 's', long = "stories", value_name = "PATH")]
    stories: Option<PathBuf>,

    /// Only show the named stories, in the given order
    #[arg(long = "story", value_name = "NAME", action = ArgAction::Append)]
    story: Vec<String>,

    /// Print the catalog's stories and exit
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Page title (defaults to the catalog title)
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Start in dark mode
    #[arg(long = "dark")]
    dark: bool,

    /// Hide the key binding help line
    #[arg(long = "no-help")]
    no_help: bool,

    /// Redraw interval in milliseconds (drives the loading spinner)
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 120)]
    tick_ms: u64,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_file.clone()))?;

    let catalog = match &cli.stories {
        Some(path) => StoryCatalog::load(path),
        None => StoryCatalog::builtin(),
    }
    .map_err(|err| eyre!("{err:#}"))?;
    let catalog = catalog
        .select(&cli.story)
        .map_err(|err| eyre!("{err:#}"))?;

    if cli.list {
        let mut stdout = io::stdout().lock();
        for story in &catalog.stories {
            writeln!(
                stdout,
                "{}\t{}",
                story.name,
                story.description.as_deref().unwrap_or("")
            )?;
        }
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        return Err(eyre!(
            "the demo page needs an interactive terminal; use --list to print stories"
        ));
    }

    let options = DemoOptions::default()
        .with_dark_mode(cli.dark)
        .with_help(!cli.no_help)
        .with_tick_rate(Duration::from_millis(cli.tick_ms.max(16)));
    let mut demo = FieldDemo::new(catalog).with_options(options);
    if let Some(title) = cli.title {
        demo = demo.with_title(title);
    }
    tracing::info!("starting demo page");
    demo.run().map_err(|err| eyre!("{err:#}"))
}
