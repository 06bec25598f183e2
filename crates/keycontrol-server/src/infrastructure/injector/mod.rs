//! Key injection backends.
//!
//! [`enigo::EnigoInjector`] drives the real OS input system on every
//! supported platform; [`mock::MockInjector`] records calls for tests.

pub mod enigo;
pub mod mock;

pub use self::enigo::EnigoInjector;
pub use self::mock::MockInjector;
