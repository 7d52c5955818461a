use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Background/border treatment of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Variant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

impl Variant {
    pub fn parse(raw: &str) -> Result<Self, UnknownOption> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "filled" => Ok(Variant::Filled),
            "outlined" => Ok(Variant::Outlined),
            "ghost" => Ok(Variant::Ghost),
            _ => Err(UnknownOption::new("variant", raw)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Filled => "filled",
            Variant::Outlined => "outlined",
            Variant::Ghost => "ghost",
        }
    }
}

impl From<String> for Variant {
    fn from(raw: String) -> Self {
        Variant::parse(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default variant");
            Variant::default()
        })
    }
}

/// Padding, font weight and icon spacing of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn parse(raw: &str) -> Result<Self, UnknownOption> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => Ok(Size::Sm),
            "md" | "medium" => Ok(Size::Md),
            "lg" | "large" => Ok(Size::Lg),
            _ => Err(UnknownOption::new("size", raw)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

impl From<String> for Size {
    fn from(raw: String) -> Self {
        Size::parse(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default size");
            Size::default()
        })
    }
}

/// The `type` attribute of the underlying control.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
    Other(String),
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Other(raw) => raw.as_str(),
        }
    }

    pub fn is_password(&self) -> bool {
        matches!(self, InputType::Password)
    }
}

impl From<String> for InputType {
    fn from(raw: String) -> Self {
        InputType::from(raw.as_str())
    }
}

impl From<&str> for InputType {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "text" => InputType::Text,
            "password" => InputType::Password,
            "email" => InputType::Email,
            "number" => InputType::Number,
            "search" => InputType::Search,
            "tel" => InputType::Tel,
            "url" => InputType::Url,
            _ => InputType::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An option string that names no known variant or size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub option: &'static str,
    pub value: String,
}

impl UnknownOption {
    fn new(option: &'static str, value: &str) -> Self {
        Self {
            option,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported {} '{}'", self.option, self.value)
    }
}

impl std::error::Error for UnknownOption {}

/// Caller-supplied configuration of an input field.
///
/// Deserializes from camelCase keys so story catalogs can declare fields
/// directly. Keys without a dedicated field land in [`FieldProps::attrs`] and
/// are passed through to the control node untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    pub invalid: bool,
    pub variant: Variant,
    pub size: Size,
    pub clearable: bool,
    pub show_password_toggle: bool,
    pub loading: bool,
    pub disabled: bool,
    pub required: bool,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub max_length: Option<usize>,
    #[serde(flatten)]
    pub attrs: IndexMap<String, Value>,
}

impl FieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn with_password_toggle(mut self, show: bool) -> Self {
        self.show_password_toggle = show;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_type(mut self, input_type: impl Into<InputType>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Value the field starts with: the controlled value wins over the default.
    pub fn initial_value(&self) -> String {
        self.value
            .clone()
            .or_else(|| self.default_value.clone())
            .unwrap_or_default()
    }

    pub(crate) fn error_text(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .filter(|message| !message.is_empty())
    }

    pub(crate) fn helper(&self) -> Option<&str> {
        self.helper_text.as_deref().filter(|text| !text.is_empty())
    }
}
