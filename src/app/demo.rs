use anyhow::Result;

use crate::stories::StoryCatalog;

use super::{options::DemoOptions, runtime::DemoApp};

/// Entry point for running the demo page in the current terminal.
#[derive(Debug)]
pub struct FieldDemo {
    catalog: StoryCatalog,
    title: Option<String>,
    options: DemoOptions,
}

impl FieldDemo {
    pub fn new(catalog: StoryCatalog) -> Self {
        Self {
            catalog,
            title: None,
            options: DemoOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: DemoOptions) -> Self {
        self.options = options;
        self
    }

    pub fn into_app(self) -> DemoApp {
        let FieldDemo {
            catalog,
            title,
            mut options,
        } = self;
        if let Some(title) = title {
            options.title = Some(title);
        }
        DemoApp::new(catalog, options)
    }

    pub fn run(self) -> Result<()> {
        self.into_app().run()
    }
}
