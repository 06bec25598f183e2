//! Application layer for the key-control server.
//!
//! - **`dispatch`** – [`InjectionDispatcher`] performs one validated key press
//!   through a [`KeyInjector`] supplied at construction time, applying the
//!   warm-up and settle delays and serializing concurrent requests.

pub mod dispatch;

pub use dispatch::{InjectionDispatcher, InjectionError, KeyInjector};
