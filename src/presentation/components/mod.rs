mod footer;
mod gallery;
mod header;

pub use footer::render_footer;
pub use gallery::{adjust_scroll, field_width, item_height, render_gallery};
pub use header::render_header;
