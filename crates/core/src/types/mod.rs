//! Core types for the venue admin dashboard.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod venue;

pub use email::{Email, EmailError};
pub use id::*;
pub use venue::{BusinessType, EnumParseError, StaffPosition};
