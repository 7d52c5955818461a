mod components;
mod field;
pub mod icons;
mod theme;
mod view;

pub use components::{adjust_scroll, field_width, item_height};
pub use field::{FieldLayout, FieldView, display_value, field_height};
pub use theme::{SizeMetrics, Theme, ThemeMode};
pub use view::{GalleryItem, PageContext, PageHit, PageLayout, body_area, draw};
