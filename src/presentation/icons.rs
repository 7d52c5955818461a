pub const CLEAR: &str = "×";
pub const PASSWORD_HIDDEN: &str = "◉";
pub const PASSWORD_SHOWN: &str = "○";
pub const MASK: char = '•';

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

pub fn toggle_glyph(password_visible: bool) -> &'static str {
    if password_visible {
        PASSWORD_SHOWN
    } else {
        PASSWORD_HIDDEN
    }
}
