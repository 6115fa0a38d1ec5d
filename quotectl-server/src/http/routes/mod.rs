//! Route handlers organized by page

pub mod display;
pub mod health;
pub mod manage;
