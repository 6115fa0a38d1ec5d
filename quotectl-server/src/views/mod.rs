//! View models: page data prepared from the store, ready to render
//!
//! Nothing here escapes or formats HTML; see `render`.

pub mod display;
pub mod manage;

pub use display::{DayView, DisplayContent, DisplayView, RandomView};
pub use manage::{
    EntryForm, Flash, FlashKind, ManageRequest, ManageView, QuoteRow, RequestMethod,
};
