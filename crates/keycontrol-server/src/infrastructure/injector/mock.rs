//! Mock key injector for tests.
//!
//! The real backend presses keys on the machine running the tests and needs a
//! desktop session.  `MockInjector` records every call in a `Mutex<Vec<...>>`
//! instead, so assertions can check exactly what would have been injected and
//! in what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let injector = Arc::new(MockInjector::new());
//! let dispatcher = InjectionDispatcher::new(injector.clone(), DispatchTiming::immediate());
//!
//! dispatcher.dispatch(request).await.unwrap();
//!
//! let calls = injector.injections();
//! assert_eq!(calls[0].keys, vec![HidKeyCode::KeyA]);
//! ```
//!
//! Set `should_fail = true` to make every call return
//! [`InjectionError::Launch`].

use std::sync::Mutex;

use keycontrol_core::{HidKeyCode, ModifierSet};

use crate::application::{InjectionError, KeyInjector};

/// One recorded call to [`KeyInjector::inject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInjection {
    pub keys: Vec<HidKeyCode>,
    pub modifiers: ModifierSet,
}

/// An injector that records calls without touching the OS.
#[derive(Debug, Default)]
pub struct MockInjector {
    /// Every successful call, oldest first.
    pub calls: Mutex<Vec<RecordedInjection>>,
    /// When `true`, every call fails with `InjectionError::Launch`.
    pub should_fail: bool,
}

impl MockInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of the recorded calls.
    pub fn injections(&self) -> Vec<RecordedInjection> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl KeyInjector for MockInjector {
    fn inject(&self, keys: &[HidKeyCode], modifiers: ModifierSet) -> Result<(), InjectionError> {
        if self.should_fail {
            return Err(InjectionError::Launch("mock failure".into()));
        }
        let mut calls = self
            .calls
            .lock()
            .map_err(|_| InjectionError::Launch("mock state poisoned".into()))?;
        calls.push(RecordedInjection {
            keys: keys.to_vec(),
            modifiers,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_keys_in_order() {
        // Arrange
        let mock = MockInjector::new();

        // Act
        mock.inject(&[HidKeyCode::KeyB, HidKeyCode::KeyA], ModifierSet::default())
            .unwrap();

        // Assert
        assert_eq!(
            mock.injections(),
            vec![RecordedInjection {
                keys: vec![HidKeyCode::KeyB, HidKeyCode::KeyA],
                modifiers: ModifierSet::default(),
            }]
        );
    }

    #[test]
    fn test_failing_mock_records_nothing() {
        let mock = MockInjector::failing();
        let result = mock.inject(&[HidKeyCode::Enter], ModifierSet::default());
        assert!(matches!(result, Err(InjectionError::Launch(_))));
        assert!(mock.injections().is_empty());
    }
}
