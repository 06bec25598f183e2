//! InjectionDispatcher: turns a validated [`PressRequest`] into one OS input
//! event.
//!
//! The dispatcher owns the timing rules around injection and delegates the
//! OS call itself to a [`KeyInjector`] trait object supplied by the
//! infrastructure layer.
//!
//! ```text
//! dispatch(request)
//!   ├─ warm-up       once per process (Linux only by default)
//!   ├─ lock          one dispatch at a time
//!   ├─ inject        on the blocking pool
//!   └─ settle        after every dispatch, still holding the lock
//! ```

use std::sync::Arc;

use keycontrol_core::{HidKeyCode, ModifierSet, PressRequest};
use thiserror::Error;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info};

use crate::domain::DispatchTiming;

/// Error type for key injection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectionError {
    /// The OS input backend could not be created.
    #[error("failed to create keyboard backend: {0}")]
    Construct(String),
    /// The backend was created but the key press was not delivered.
    #[error("failed to simulate key press: {0}")]
    Launch(String),
}

/// Platform-agnostic key injection trait.
///
/// One call is one atomic input event: press every modifier, press every key
/// in order, release the keys in reverse order, then release the modifiers.
/// Implementations block; the dispatcher calls them from the blocking pool.
pub trait KeyInjector: Send + Sync {
    fn inject(&self, keys: &[HidKeyCode], modifiers: ModifierSet) -> Result<(), InjectionError>;
}

/// Serializes injections and applies the warm-up and settle delays.
///
/// Shared between request handlers behind an `Arc`.
pub struct InjectionDispatcher {
    injector: Arc<dyn KeyInjector>,
    timing: DispatchTiming,
    warmed_up: OnceCell<()>,
    serial: Mutex<()>,
}

impl InjectionDispatcher {
    pub fn new(injector: Arc<dyn KeyInjector>, timing: DispatchTiming) -> Self {
        Self {
            injector,
            timing,
            warmed_up: OnceCell::new(),
            serial: Mutex::new(()),
        }
    }

    pub fn timing(&self) -> DispatchTiming {
        self.timing
    }

    /// Simulates the key press described by `request`.
    ///
    /// Returns once the injection has been performed and the settle delay has
    /// elapsed.  Concurrent callers are served one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] if the backend cannot be created or the OS
    /// rejects the event.  The settle delay is skipped on failure.
    pub async fn dispatch(&self, request: PressRequest) -> Result<(), InjectionError> {
        self.warm_up().await;

        let _guard = self.serial.lock().await;
        let keys = request.codes();
        let modifiers = request.modifiers();
        debug!(?keys, ?modifiers, "injecting key press");

        let injector = Arc::clone(&self.injector);
        tokio::task::spawn_blocking(move || injector.inject(&keys, modifiers))
            .await
            .map_err(|e| InjectionError::Launch(format!("injection task failed: {e}")))??;

        if !self.timing.settle.is_zero() {
            tokio::time::sleep(self.timing.settle).await;
        }
        Ok(())
    }

    /// Waits out the warm-up delay the first time it is called.
    ///
    /// Callers that arrive while the delay is running wait for the same delay
    /// rather than starting their own.
    async fn warm_up(&self) {
        let Some(delay) = self.timing.warm_up else {
            return;
        };
        self.warmed_up
            .get_or_init(|| async move {
                info!("waiting {delay:?} for the input system before the first key press");
                tokio::time::sleep(delay).await;
            })
            .await;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
