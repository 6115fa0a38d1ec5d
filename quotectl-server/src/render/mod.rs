//! HTML rendering of prepared views
//!
//! Renderers only escape and format. Every piece of stored or submitted
//! text goes through `escape_html` before it reaches the page.

pub mod display;
pub mod html;
pub mod layout;
pub mod manage;

pub use display::render_display;
pub use html::{escape_html, nl2br};
pub use layout::error_page;
pub use manage::render_manage;
