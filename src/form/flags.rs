use crate::domain::{FieldProps, InputType};

use super::state::FieldState;

/// Message shown when a field is flagged invalid without error text.
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid value";

/// Booleans derived from props and state on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFlags {
    pub has_error: bool,
    pub is_password: bool,
    pub show_spinner: bool,
    pub show_toggle: bool,
    pub show_clear: bool,
    pub interactive: bool,
}

impl FieldFlags {
    pub fn derive(props: &FieldProps, state: &FieldState) -> Self {
        let is_password = props.input_type.is_password();
        let loading = props.loading;
        Self {
            has_error: props.invalid || props.error_text().is_some(),
            is_password,
            show_spinner: loading,
            show_toggle: !loading && props.show_password_toggle && is_password,
            show_clear: !loading && props.clearable && !state.is_empty(),
            interactive: !props.disabled && !loading,
        }
    }
}

/// Type attribute the control renders with; a revealed password becomes text.
pub fn effective_type(props: &FieldProps, state: &FieldState) -> InputType {
    if props.input_type.is_password() && state.password_visible {
        InputType::Text
    } else {
        props.input_type.clone()
    }
}

/// Error text to display, if the field is in error state.
pub fn error_display(props: &FieldProps) -> Option<String> {
    match props.error_text() {
        Some(message) => Some(message.to_string()),
        None if props.invalid => Some(DEFAULT_ERROR_MESSAGE.to_string()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_props() -> FieldProps {
        FieldProps::new()
            .with_type("password")
            .with_clearable(true)
            .with_password_toggle(true)
    }

    #[test]
    fn icon_flags_cover_clearable_and_toggle_combinations() {
        let filled = FieldState::new("secret");
        let cases = [
            (false, false, false, false),
            (true, false, false, true),
            (false, true, true, false),
            (true, true, true, true),
        ];
        for (clearable, toggle, expect_toggle, expect_clear) in cases {
            let props = FieldProps::new()
                .with_type("password")
                .with_clearable(clearable)
                .with_password_toggle(toggle);
            let flags = FieldFlags::derive(&props, &filled);
            assert_eq!(flags.show_toggle, expect_toggle, "clearable={clearable} toggle={toggle}");
            assert_eq!(flags.show_clear, expect_clear, "clearable={clearable} toggle={toggle}");
        }
    }

    #[test]
    fn toggle_requires_password_type() {
        let props = FieldProps::new().with_password_toggle(true);
        let flags = FieldFlags::derive(&props, &FieldState::new("x"));
        assert!(!flags.show_toggle);
    }

    #[test]
    fn clear_hidden_for_empty_value() {
        let flags = FieldFlags::derive(&password_props(), &FieldState::default());
        assert!(!flags.show_clear);
        assert!(flags.show_toggle);
    }

    #[test]
    fn loading_suppresses_both_controls() {
        let props = password_props().with_loading(true);
        let flags = FieldFlags::derive(&props, &FieldState::new("secret"));
        assert!(flags.show_spinner);
        assert!(!flags.show_toggle);
        assert!(!flags.show_clear);
        assert!(!flags.interactive);
    }

    #[test]
    fn disabled_keeps_icons() {
        let props = password_props().with_disabled(true);
        let flags = FieldFlags::derive(&props, &FieldState::new("secret"));
        assert!(flags.show_toggle && flags.show_clear);
        assert!(!flags.interactive);
    }

    #[test]
    fn invalid_without_text_uses_generic_message() {
        let props = FieldProps::new().with_invalid(true);
        assert_eq!(error_display(&props).as_deref(), Some(DEFAULT_ERROR_MESSAGE));
        let empty = FieldProps::new().with_error_message("");
        assert!(!FieldFlags::derive(&empty, &FieldState::default()).has_error);
        assert_eq!(error_display(&empty), None);
    }
}
