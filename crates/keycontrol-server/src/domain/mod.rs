//! Domain layer for keycontrol-server.
//!
//! Plain configuration values built once at startup and shared read-only.
//! Nothing in here reads the environment or touches the network; `main.rs`
//! populates these types from the command line.

pub mod config;

pub use config::{DispatchTiming, InjectionFailurePolicy, ServerConfig};
