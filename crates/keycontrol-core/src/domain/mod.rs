//! Request-scoped domain logic: validation of press requests and the auth gate.
//!
//! Nothing in this module performs I/O.  The HTTP layer feeds it raw strings
//! taken from the query and headers, and gets back either a validated value or
//! a typed error it can map to a status code.

pub mod auth;
pub mod press;

pub use auth::{authorize, AuthToken};
pub use press::{ModifierSet, PressKind, PressRequest, ResolvedKey, ValidationError};
