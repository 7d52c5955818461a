/// Page-level commands a key binding can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FieldStep(i32),
    ToggleTheme,
    ClearField,
    TogglePassword,
    ResetStatus,
}
