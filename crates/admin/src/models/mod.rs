//! Domain models for the dashboard.
//!
//! These are the wire types exchanged with the remote data service plus the
//! session-stored identity. All entity identifiers are assigned by the
//! remote service; payload types for create/update deliberately have no id
//! field at all.

pub mod business;
pub mod session;
pub mod staff;
pub mod user;

pub use business::{Business, BusinessPayload};
pub use session::{CurrentUser, session_keys};
pub use staff::{Staff, StaffPayload};
pub use user::UserRecord;
