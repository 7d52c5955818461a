/// The two pieces of local state an input field owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub current_value: String,
    pub password_visible: bool,
}

impl FieldState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current_value: initial.into(),
            password_visible: false,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.current_value = value.into();
    }

    pub fn clear(&mut self) {
        self.current_value.clear();
    }

    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn is_empty(&self) -> bool {
        self.current_value.is_empty()
    }
}
