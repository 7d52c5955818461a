mod format;

pub use format::{DocumentFormat, parse_document_str};
