//! keycontrol-server library crate.
//!
//! An HTTP service that, on authenticated request, simulates keyboard input
//! on the machine it runs on.  The binary in `main.rs` only parses the command
//! line and hands a [`domain::ServerConfig`] to
//! [`infrastructure::server::run_server`]; everything else lives here so the
//! integration tests in `tests/` can drive the router without a socket.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! HTTP client
//!     ↓  POST /press?keyCode=A&ctrl=true   (Authorization: <token>)
//! [keycontrol-server]
//!   ├── domain/           ServerConfig, DispatchTiming, failure policy
//!   ├── application/      InjectionDispatcher + KeyInjector seam
//!   └── infrastructure/
//!         ├── http        axum router, auth layer, handlers
//!         ├── injector/   enigo backend, recording mock
//!         ├── banner      console banner with reachable URLs
//!         └── server      listener + shutdown handling
//!     ↓
//! OS input (X11 / SendInput / CGEvent)
//! ```
//!
//! # Layer rules
//!
//! - `domain` holds plain data; no I/O, no async.
//! - `application` depends on `domain` and `keycontrol-core`; the OS is only
//!   reached through the [`application::KeyInjector`] trait.
//! - `infrastructure` owns every framework type (`axum`, `enigo`, sockets).

/// Domain layer: runtime configuration types.
pub mod domain;

/// Application layer: the injection dispatcher.
pub mod application;

/// Infrastructure layer: HTTP surface, OS backends, banner and server loop.
pub mod infrastructure;
