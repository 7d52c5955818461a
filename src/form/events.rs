/// What produced a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Typed or deleted text.
    Input,
    /// Synthesized by the clear control.
    Clear,
}

/// Change notification handed to the caller's change callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
    pub source: ChangeSource,
}

impl ChangeEvent {
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ChangeSource::Input,
        }
    }

    pub fn cleared() -> Self {
        Self {
            value: String::new(),
            source: ChangeSource::Clear,
        }
    }
}

pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent)>;
pub type ClearHandler = Box<dyn FnMut()>;
