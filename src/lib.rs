#![deny(rust_2018_idioms)]
#![doc = include_str!("../README.md")]

mod app;
pub mod domain;
pub mod form;
mod io;
pub mod presentation;
pub mod stories;

pub use app::{DemoApp, DemoOptions, FieldDemo};
pub use domain::{FieldProps, InputType, Size, Variant};
pub use form::{ChangeEvent, ChangeSource, FieldIcon, InputField, RenderTree};
pub use io::{DocumentFormat, parse_document_str};
pub use presentation::{FieldView, Theme, ThemeMode};
pub use stories::{Story, StoryCatalog};

pub mod prelude {
    pub use super::{
        ChangeEvent, FieldDemo, FieldProps, FieldView, InputField, StoryCatalog, Theme,
    };
}
