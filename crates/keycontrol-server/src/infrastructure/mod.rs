//! Infrastructure layer for the key-control server.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain` and
//! `keycontrol_core`, but MUST NOT be imported by them.  Test modules are the
//! exception: they share [`injector::MockInjector`] instead of defining their
//! own recording fakes.
//!
//! # Sub-modules
//!
//! - **`injector`** – [`KeyInjector`](crate::application::KeyInjector)
//!   implementations: the `enigo` OS backend and a recording mock for tests.
//! - **`http`** – the `axum` router, the auth route layer and the handlers.
//! - **`banner`** – the coloured startup banner and its URL list.
//! - **`server`** – binds the listener and runs the router until shutdown.

pub mod banner;
pub mod http;
pub mod injector;
pub mod server;

pub use server::run_server;
