use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::{FieldProps, InputType, Size, Variant};

use super::aria::{AriaAttributes, error_id, helper_id};
use super::flags::{FieldFlags, effective_type, error_display};
use super::state::FieldState;

/// Framework-neutral description of what a field renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree {
    pub label: Option<LabelNode>,
    pub control: ControlNode,
    pub message: Option<MessageNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNode {
    pub text: String,
    pub required: bool,
    pub html_for: String,
}

impl LabelNode {
    /// Caption with the required marker appended.
    pub fn caption(&self) -> String {
        if self.required {
            format!("{} *", self.text)
        } else {
            self.text.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlNode {
    pub id: String,
    pub name: Option<String>,
    pub input_type: InputType,
    pub value: String,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub variant: Variant,
    pub size: Size,
    pub has_error: bool,
    pub aria: AriaAttributes,
    pub trailing: TrailingSlot,
    pub attrs: IndexMap<String, Value>,
}

impl ControlNode {
    pub fn is_masked(&self) -> bool {
        self.input_type.is_password()
    }
}

/// Content of the trailing icon area; the variants are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingSlot {
    Empty,
    Spinner,
    Icons {
        toggle: Option<ToggleIcon>,
        clear: Option<ClearIcon>,
    },
}

impl TrailingSlot {
    pub fn toggle(&self) -> Option<ToggleIcon> {
        match self {
            TrailingSlot::Icons { toggle, .. } => *toggle,
            _ => None,
        }
    }

    pub fn clear(&self) -> Option<ClearIcon> {
        match self {
            TrailingSlot::Icons { clear, .. } => *clear,
            _ => None,
        }
    }

    /// Number of icon slots occupied at the trailing edge.
    pub fn width_in_slots(&self) -> usize {
        match self {
            TrailingSlot::Empty => 0,
            TrailingSlot::Spinner => 1,
            TrailingSlot::Icons { toggle, clear } => {
                usize::from(toggle.is_some()) + usize::from(clear.is_some())
            }
        }
    }
}

/// Offsets count icon slots from the trailing edge of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleIcon {
    pub visible: bool,
    pub disabled: bool,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearIcon {
    pub disabled: bool,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    Error { id: String, text: String },
    Helper { id: String, text: String },
}

impl MessageNode {
    pub fn text(&self) -> &str {
        match self {
            MessageNode::Error { text, .. } | MessageNode::Helper { text, .. } => text,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            MessageNode::Error { id, .. } | MessageNode::Helper { id, .. } => id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MessageNode::Error { .. })
    }
}

pub(crate) fn build_tree(id: &str, props: &FieldProps, state: &FieldState) -> RenderTree {
    let flags = FieldFlags::derive(props, state);
    let disabled = props.disabled || props.loading;

    let label = props.label.as_ref().map(|text| LabelNode {
        text: text.clone(),
        required: props.required,
        html_for: id.to_string(),
    });

    let message = match error_display(props) {
        Some(text) => Some(MessageNode::Error {
            id: error_id(id),
            text,
        }),
        None => props.helper().map(|text| MessageNode::Helper {
            id: helper_id(id),
            text: text.to_string(),
        }),
    };

    RenderTree {
        label,
        control: ControlNode {
            id: id.to_string(),
            name: props.name.clone(),
            input_type: effective_type(props, state),
            value: state.current_value.clone(),
            placeholder: props.placeholder.clone(),
            disabled,
            variant: props.variant,
            size: props.size,
            has_error: flags.has_error,
            aria: AriaAttributes::derive(id, props, &flags),
            trailing: trailing_slot(&flags, props.disabled, state.password_visible),
            attrs: props.attrs.clone(),
        },
        message,
    }
}

fn trailing_slot(flags: &FieldFlags, disabled: bool, password_visible: bool) -> TrailingSlot {
    if flags.show_spinner {
        return TrailingSlot::Spinner;
    }
    if !flags.show_toggle && !flags.show_clear {
        return TrailingSlot::Empty;
    }
    let clear = flags.show_clear.then_some(ClearIcon {
        disabled,
        offset: 0,
    });
    let toggle = flags.show_toggle.then_some(ToggleIcon {
        visible: password_visible,
        disabled,
        offset: usize::from(clear.is_some()),
    });
    TrailingSlot::Icons { toggle, clear }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sits_inside_clear() {
        let props = FieldProps::new()
            .with_type("password")
            .with_clearable(true)
            .with_password_toggle(true);
        let tree = build_tree("pw", &props, &FieldState::new("secret"));
        let trailing = tree.control.trailing;
        assert_eq!(trailing.clear().map(|icon| icon.offset), Some(0));
        assert_eq!(trailing.toggle().map(|icon| icon.offset), Some(1));
        assert_eq!(trailing.width_in_slots(), 2);
    }

    #[test]
    fn lone_toggle_takes_the_edge() {
        let props = FieldProps::new()
            .with_type("password")
            .with_clearable(true)
            .with_password_toggle(true);
        let tree = build_tree("pw", &props, &FieldState::default());
        assert_eq!(tree.control.trailing.toggle().map(|icon| icon.offset), Some(0));
        assert_eq!(tree.control.trailing.clear(), None);
    }

    #[test]
    fn spinner_replaces_icons_while_loading() {
        let props = FieldProps::new()
            .with_clearable(true)
            .with_loading(true);
        let tree = build_tree("q", &props, &FieldState::new("abc"));
        assert_eq!(tree.control.trailing, TrailingSlot::Spinner);
        assert!(tree.control.disabled);
    }

    #[test]
    fn label_caption_marks_required() {
        let props = FieldProps::new().with_label("Name").with_required(true);
        let tree = build_tree("name", &props, &FieldState::default());
        let label = tree.label.expect("label");
        assert_eq!(label.caption(), "Name *");
        assert_eq!(label.html_for, "name");
        assert!(tree.control.aria.required);
    }
}
