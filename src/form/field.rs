use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::domain::{FieldProps, InputType};

use super::aria::generate_id;
use super::events::{ChangeEvent, ChangeHandler, ClearHandler};
use super::flags::{FieldFlags, effective_type};
use super::render::{RenderTree, build_tree};
use super::state::FieldState;

/// Trailing icon a user can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIcon {
    Clear,
    Toggle,
}

/// A labelled text input: props from the caller, two pieces of local state,
/// and the caller's change/clear callbacks.
pub struct InputField {
    id: String,
    props: FieldProps,
    state: FieldState,
    on_change: Option<ChangeHandler>,
    on_clear: Option<ClearHandler>,
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .finish()
    }
}

impl InputField {
    pub fn new(props: FieldProps) -> Self {
        let id = props.id.clone().unwrap_or_else(generate_id);
        let state = FieldState::new(props.initial_value());
        Self {
            id,
            props,
            state,
            on_change: None,
            on_clear: None,
        }
    }

    pub fn on_change(mut self, handler: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_clear(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_clear = Some(Box::new(handler));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn value(&self) -> &str {
        &self.state.current_value
    }

    pub fn password_visible(&self) -> bool {
        self.state.password_visible
    }

    pub fn flags(&self) -> FieldFlags {
        FieldFlags::derive(&self.props, &self.state)
    }

    pub fn effective_type(&self) -> InputType {
        effective_type(&self.props, &self.state)
    }

    pub fn render(&self) -> RenderTree {
        build_tree(&self.id, &self.props, &self.state)
    }

    /// Replace the props. A controlled value that differs from the current
    /// text overwrites it; the control identifier never changes.
    pub fn update_props(&mut self, props: FieldProps) {
        if let Some(value) = props.value.as_ref()
            && *value != self.state.current_value
        {
            self.state.set_value(value.clone());
        }
        self.props = props;
    }

    pub fn handle_change(&mut self, event: ChangeEvent) {
        self.state.set_value(event.value.clone());
        debug!(id = %self.id, len = event.value.chars().count(), "value changed");
        if let Some(handler) = self.on_change.as_mut() {
            handler(&event);
        }
    }

    pub fn clear(&mut self) {
        self.state.clear();
        debug!(id = %self.id, "value cleared");
        if let Some(handler) = self.on_clear.as_mut() {
            handler();
        }
        if let Some(handler) = self.on_change.as_mut() {
            handler(&ChangeEvent::cleared());
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.state.toggle_visibility();
        debug!(
            id = %self.id,
            visible = self.state.password_visible,
            "password visibility toggled"
        );
    }

    /// Press the clear button: only works while it is rendered and enabled.
    pub fn activate_clear(&mut self) -> bool {
        if self.props.disabled || !self.flags().show_clear {
            return false;
        }
        self.clear();
        true
    }

    /// Press the visibility button: only works while it is rendered and enabled.
    pub fn activate_toggle(&mut self) -> bool {
        if self.props.disabled || !self.flags().show_toggle {
            return false;
        }
        self.toggle_visibility();
        true
    }

    pub fn activate(&mut self, icon: FieldIcon) -> bool {
        match icon {
            FieldIcon::Clear => self.activate_clear(),
            FieldIcon::Toggle => self.activate_toggle(),
        }
    }

    /// Apply a key press as a text edit. Returns whether the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !self.flags().interactive {
            return false;
        }
        let mut next = self.state.current_value.clone();
        match key.code {
            KeyCode::Char(ch) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return false;
                }
                if let Some(limit) = self.props.max_length
                    && next.chars().count() >= limit
                {
                    return false;
                }
                next.push(ch);
            }
            KeyCode::Backspace => {
                if next.pop().is_none() {
                    return false;
                }
            }
            _ => return false,
        }
        self.handle_change(ChangeEvent::input(next));
        true
    }
}
