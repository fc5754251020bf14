//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: process-local repositories for development and tests.
//!
//! Adapters translate between storage representations and domain types and
//! hold no business rules.

pub mod memory;
pub mod persistence;
