use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Supported formats for story catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            #[cfg(feature = "toml")]
            "toml" => Ok(DocumentFormat::Toml),
            other => bail!(
                "unsupported catalog extension '{other}' for {}",
                path.display()
            ),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => write!(f, "yaml"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_extension_is_recognised() {
        let format = DocumentFormat::from_path(Path::new("stories/field.JSON")).unwrap();
        assert_eq!(format, DocumentFormat::Json);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = DocumentFormat::from_path(Path::new("stories.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported catalog extension"));
    }

    #[test]
    fn bad_json_reports_context() {
        let err = parse_document_str("{", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("failed to parse JSON document"));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_converts_to_json_value() {
        let value = parse_document_str("title = \"Forms\"", DocumentFormat::Toml).unwrap();
        assert_eq!(value["title"], "Forms");
    }
}
