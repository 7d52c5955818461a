mod demo;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod runtime;
mod status;
mod terminal;

pub use demo::FieldDemo;
pub use options::DemoOptions;
pub use runtime::DemoApp;
