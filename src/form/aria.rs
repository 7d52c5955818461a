use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::FieldProps;

use super::flags::FieldFlags;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Allocate a process-unique control identifier.
pub fn generate_id() -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("fieldui-input-{n}")
}

pub fn helper_id(id: &str) -> String {
    format!("{id}-helper")
}

pub fn error_id(id: &str) -> String {
    format!("{id}-error")
}

/// Accessibility attributes attached to the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaAttributes {
    pub invalid: bool,
    pub required: bool,
    pub described_by: Option<String>,
}

impl AriaAttributes {
    pub fn derive(id: &str, props: &FieldProps, flags: &FieldFlags) -> Self {
        let described_by = if flags.has_error {
            Some(error_id(id))
        } else if props.helper().is_some() {
            Some(helper_id(id))
        } else {
            None
        };
        Self {
            invalid: flags.has_error,
            required: props.required,
            described_by,
        }
    }

    /// Attributes as `(name, value)` pairs, omitting the ones that are unset.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if self.invalid {
            pairs.push(("aria-invalid", "true".to_string()));
        }
        if self.required {
            pairs.push(("aria-required", "true".to_string()));
        }
        if let Some(target) = &self.described_by {
            pairs.push(("aria-describedby", target.clone()));
        }
        pairs
    }
}
