use crate::presentation::ThemeMode;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Type into the focused field.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str, chars: usize) {
        self.message = format!("Editing {label} ({chars} chars)");
    }

    pub fn cleared(&mut self, label: &str) {
        self.message = format!("Cleared {label}");
    }

    pub fn visibility(&mut self, label: &str, visible: bool) {
        let state = if visible { "shown" } else { "hidden" };
        self.message = format!("{label}: password {state}");
    }

    pub fn unavailable(&mut self, label: &str, action: &str) {
        self.message = format!("{label}: {action} unavailable");
    }

    pub fn theme(&mut self, mode: ThemeMode) {
        self.message = format!("Switched to {} mode", mode.label());
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
