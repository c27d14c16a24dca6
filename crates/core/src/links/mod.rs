//! Link lifecycle, grouping, and selection logic

pub mod grouping;
pub mod ports;
pub mod selection;
pub mod service;
pub mod validation;
