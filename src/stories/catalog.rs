use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::domain::FieldProps;
use crate::io::{DocumentFormat, parse_document_str};

macro_rules! builtin_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/stories/input_field.stories.json"
        ))
    };
}

const DEFAULT_TITLE: &str = "Forms/InputField";

/// A named field configuration from a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub name: String,
    pub description: Option<String>,
    pub props: FieldProps,
}

/// The documentation catalog: every story the demo page can show.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryCatalog {
    pub title: String,
    pub stories: Vec<Story>,
}

#[derive(Deserialize)]
struct RawCatalog {
    title: Option<String>,
    #[serde(default)]
    defaults: Map<String, Value>,
    stories: Vec<RawStory>,
}

#[derive(Deserialize)]
struct RawStory {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    args: Value,
}

impl StoryCatalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::parse_str(builtin_source!(), DocumentFormat::Json)
            .context("built-in story catalog is invalid")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read story catalog {}", path.display()))?;
        let catalog = Self::parse_str(&contents, format)
            .with_context(|| format!("invalid story catalog {}", path.display()))?;
        info!(
            path = %path.display(),
            %format,
            stories = catalog.stories.len(),
            "loaded story catalog"
        );
        Ok(catalog)
    }

    pub fn parse_str(contents: &str, format: DocumentFormat) -> Result<Self> {
        let value = parse_document_str(contents, format)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawCatalog =
            serde_json::from_value(value).context("catalog does not match the story layout")?;
        if raw.stories.is_empty() {
            bail!("catalog declares no stories");
        }

        let mut seen = HashSet::new();
        let mut stories = Vec::with_capacity(raw.stories.len());
        for story in raw.stories {
            if !seen.insert(story.name.to_lowercase()) {
                bail!("duplicate story name '{}'", story.name);
            }
            let props = merge_args(&raw.defaults, story.args)
                .and_then(|merged| {
                    serde_json::from_value::<FieldProps>(Value::Object(merged))
                        .context("args do not describe an input field")
                })
                .with_context(|| format!("story '{}'", story.name))?;
            stories.push(Story {
                name: story.name,
                description: story.description,
                props,
            });
        }

        Ok(Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            stories,
        })
    }

    pub fn find(&self, name: &str) -> Option<&Story> {
        self.stories
            .iter()
            .find(|story| story.name.eq_ignore_ascii_case(name))
    }

    /// Keep only the named stories, in the order given.
    pub fn select(&self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self.clone());
        }
        let stories = names
            .iter()
            .map(|name| {
                self.find(name)
                    .cloned()
                    .with_context(|| format!("unknown story '{name}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            title: self.title.clone(),
            stories,
        })
    }
}

fn merge_args(defaults: &Map<String, Value>, args: Value) -> Result<Map<String, Value>> {
    let mut merged = defaults.clone();
    match args {
        Value::Null => {}
        Value::Object(map) => merged.extend(map),
        other => bail!("args must be an object, found {other}"),
    }
    Ok(merged)
}
