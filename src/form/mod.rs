mod aria;
mod events;
mod field;
mod flags;
mod render;
mod state;

pub use aria::{AriaAttributes, error_id, generate_id, helper_id};
pub use events::{ChangeEvent, ChangeHandler, ChangeSource, ClearHandler};
pub use field::{FieldIcon, InputField};
pub use flags::{DEFAULT_ERROR_MESSAGE, FieldFlags, effective_type, error_display};
pub use render::{
    ClearIcon, ControlNode, LabelNode, MessageNode, RenderTree, ToggleIcon, TrailingSlot,
};
pub use state::FieldState;
