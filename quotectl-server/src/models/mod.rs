//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod action;
pub mod entry;
pub mod preview;
pub mod quote;
pub mod validation;

pub use action::ActionKind;
pub use entry::{EntryId, EntryText};
pub use preview::{preview, PREVIEW_CHARS};
pub use quote::Quote;
pub use validation::ValidationError;
