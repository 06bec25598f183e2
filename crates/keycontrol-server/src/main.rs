//! KeyControl server entry point.
//!
//! Starts an HTTP server that simulates keyboard events on this machine when
//! an authenticated client asks for them.
//!
//! # Usage
//!
//! ```text
//! keycontrol [OPTIONS] [COMMAND]
//!
//! Commands:
//!   version  Print the KeyControl version information [aliases: v, ver, about]
//!
//! Options:
//!   -p, --port <PORT>   Port number for the KeyControl server [default: 8080]
//!   -a, --auth <AUTH>   Authentication token required for API access [default: keycontrol]
//!       --bind <BIND>   IP address to listen on [default: 0.0.0.0]
//!       --fail-fast     Stop the server when a key press cannot be simulated
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable                 | Default      |
//! |--------------------------|--------------|
//! | `KEY_CONTROL_PORT`       | `8080`       |
//! | `KEY_CONTROL_AUTH_TOKEN` | `keycontrol` |
//! | `KEY_CONTROL_BIND`       | `0.0.0.0`    |
//! | `KEY_CONTROL_FAIL_FAST`  | unset        |

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use keycontrol_core::AuthToken;
use keycontrol_server::domain::config::{DEFAULT_AUTH_TOKEN, DEFAULT_PORT};
use keycontrol_server::domain::{DispatchTiming, InjectionFailurePolicy, ServerConfig};
use keycontrol_server::infrastructure::banner::print_banner;
use keycontrol_server::infrastructure::injector::EnigoInjector;
use keycontrol_server::infrastructure::run_server;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DESCRIPTION: &str = "KeyControl is a command-line application that starts an HTTP \
server to simulate keyboard events remotely. It allows you to send key press commands via \
HTTP requests, making it useful for automation, remote control, or integration with other \
systems.";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Run a server for controlling keyboard events remotely.
#[derive(Debug, Parser)]
#[command(name = "keycontrol", version, long_about = DESCRIPTION)]
struct Cli {
    /// Port number for the KeyControl server.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "KEY_CONTROL_PORT")]
    port: u16,

    /// Authentication token required for API access.
    ///
    /// Clients send it verbatim in the `Authorization` header.
    #[arg(
        short,
        long,
        default_value = DEFAULT_AUTH_TOKEN,
        env = "KEY_CONTROL_AUTH_TOKEN",
        hide_env_values = true
    )]
    auth: String,

    /// IP address to listen on.  `0.0.0.0` accepts connections on every
    /// interface.
    #[arg(long, default_value = "0.0.0.0", env = "KEY_CONTROL_BIND")]
    bind: String,

    /// Stop the server when a key press cannot be simulated.
    ///
    /// Without this flag the failing request gets a 500 and the server keeps
    /// running.
    #[arg(long, env = "KEY_CONTROL_FAIL_FAST")]
    fail_fast: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the KeyControl version information.
    #[command(visible_aliases = ["v", "ver", "about"])]
    Version,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("invalid bind address: '{}'", self.bind))?;

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, self.port),
            auth_token: AuthToken::new(self.auth),
            failure_policy: if self.fail_fast {
                InjectionFailurePolicy::FailFast
            } else {
                InjectionFailurePolicy::PerRequest
            },
            timing: DispatchTiming::for_current_platform(),
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Version) = cli.command {
        println!("Key Control version {VERSION}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = cli.into_server_config()?;
    if config.auth_token.is_empty() {
        warn!("auth token is empty; every /press request will be rejected");
    }

    print_banner(VERSION, config.bind_addr.port());
    info!("KeyControl {VERSION} starting on {}", config.bind_addr);

    run_server(config, Arc::new(EnigoInjector::new())).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
