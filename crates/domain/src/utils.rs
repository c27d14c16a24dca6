//! Pure helper functions for display and page addressing

pub mod host;
pub mod pages;
