//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! `main.rs` builds it from CLI flags and environment variables; tests build it
//! directly or start from [`ServerConfig::default`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use keycontrol_core::AuthToken;

/// Port the HTTP listener uses when none is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// API token used when none is configured.
pub const DEFAULT_AUTH_TOKEN: &str = "keycontrol";

/// Pause before the first dispatch of the process on Linux.
///
/// The X server drops synthetic events sent right after a client connects
/// for the first time.
pub const LINUX_WARM_UP: Duration = Duration::from_secs(2);

/// Pause after every dispatch, on every platform.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// What the service does when the OS refuses an injection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InjectionFailurePolicy {
    /// Answer the request with 500 and keep serving.
    #[default]
    PerRequest,
    /// Answer the request with 500, then stop the server and exit non-zero.
    FailFast,
}

/// Fixed delays around each dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchTiming {
    /// Waited once, before the first dispatch in the process.
    pub warm_up: Option<Duration>,
    /// Waited after every dispatch before it is reported complete.
    pub settle: Duration,
}

impl DispatchTiming {
    /// The delays for the platform this binary was compiled for.
    ///
    /// | Platform | warm_up | settle |
    /// |----------|---------|--------|
    /// | Linux    | 2 s     | 100 ms |
    /// | other    | none    | 100 ms |
    pub fn for_current_platform() -> Self {
        Self {
            warm_up: cfg!(target_os = "linux").then_some(LINUX_WARM_UP),
            settle: SETTLE_DELAY,
        }
    }

    /// No delays at all.  Used by tests that are not about timing.
    pub fn immediate() -> Self {
        Self {
            warm_up: None,
            settle: Duration::ZERO,
        }
    }
}

impl Default for DispatchTiming {
    fn default() -> Self {
        Self::for_current_platform()
    }
}

/// All runtime configuration for the key-control server.
///
/// Build once at startup, then share read-only.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address and port the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Token every `/press` caller must send in the `Authorization` header.
    pub auth_token: AuthToken,
    pub failure_policy: InjectionFailurePolicy,
    pub timing: DispatchTiming,
}

impl Default for ServerConfig {
    /// | Field          | Default          |
    /// |----------------|------------------|
    /// | bind_addr      | `0.0.0.0:8080`   |
    /// | auth_token     | `keycontrol`     |
    /// | failure_policy | `PerRequest`     |
    /// | timing         | platform default |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            auth_token: AuthToken::new(DEFAULT_AUTH_TOKEN),
            failure_policy: InjectionFailurePolicy::default(),
            timing: DispatchTiming::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_8080() {
        // Arrange / Act
        let cfg = ServerConfig::default();
        // Assert
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn test_default_bind_is_all_interfaces() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_default_token_is_keycontrol() {
        let cfg = ServerConfig::default();
        assert!(cfg.auth_token.verify("keycontrol"));
        assert!(!cfg.auth_token.verify("other"));
    }

    #[test]
    fn test_default_failure_policy_keeps_serving() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.failure_policy, InjectionFailurePolicy::PerRequest);
    }

    #[test]
    fn test_settle_delay_applies_on_every_platform() {
        let timing = DispatchTiming::for_current_platform();
        assert_eq!(timing.settle, Duration::from_millis(100));
    }

    #[test]
    fn test_warm_up_only_on_linux() {
        let timing = DispatchTiming::for_current_platform();
        if cfg!(target_os = "linux") {
            assert_eq!(timing.warm_up, Some(Duration::from_secs(2)));
        } else {
            assert_eq!(timing.warm_up, None);
        }
    }

    #[test]
    fn test_immediate_timing_has_no_delays() {
        let timing = DispatchTiming::immediate();
        assert_eq!(timing.warm_up, None);
        assert_eq!(timing.settle, Duration::ZERO);
    }

    #[test]
    fn test_debug_output_does_not_leak_token() {
        let cfg = ServerConfig {
            auth_token: AuthToken::new("hunter2"),
            ..ServerConfig::default()
        };
        assert!(!format!("{cfg:?}").contains("hunter2"));
    }
}
