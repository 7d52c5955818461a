mod catalog;

pub use catalog::{Story, StoryCatalog};
