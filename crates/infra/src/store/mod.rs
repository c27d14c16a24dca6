//! Record store access
//!
//! The record store is an external key-indexed record service spoken to
//! over PostgREST-style request/response calls. The client here is the
//! only place HTTP happens; the repository adapters translate between
//! store rows and domain types and apply the ownership filters.

pub mod client;
pub mod errors;
pub mod link_repository;
pub mod profile_repository;
mod rows;
