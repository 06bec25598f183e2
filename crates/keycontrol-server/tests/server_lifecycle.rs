//! End-to-end tests against a real listener on 127.0.0.1.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use keycontrol_server::domain::{DispatchTiming, InjectionFailurePolicy, ServerConfig};
use keycontrol_server::infrastructure::injector::MockInjector;
use keycontrol_server::infrastructure::server::serve;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

fn config(policy: InjectionFailurePolicy) -> ServerConfig {
    ServerConfig {
        failure_policy: policy,
        timing: DispatchTiming::immediate(),
        ..ServerConfig::default()
    }
}

/// Starts a server on an ephemeral port.  Sending on the returned channel
/// requests a graceful shutdown.
async fn start(
    injector: MockInjector,
    policy: InjectionFailurePolicy,
) -> (SocketAddr, oneshot::Sender<()>, JoinHandle<anyhow::Result<()>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve(listener, config(policy), Arc::new(injector), async {
        let _ = stop_rx.await;
    }));
    (addr, stop_tx, handle)
}

/// Sends one HTTP/1.1 request and returns the raw response text.
async fn request(addr: SocketAddr, method: &str, target: &str, token: Option<&str>) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let auth = token
        .map(|t| format!("Authorization: {t}\r\n"))
        .unwrap_or_default();
    let raw = format!(
        "{method} {target} HTTP/1.1\r\nHost: {addr}\r\n{auth}Content-Length: 0\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(raw.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_health_and_press_then_stops_cleanly() {
    // Arrange
    let (addr, stop_tx, handle) = start(MockInjector::new(), InjectionFailurePolicy::PerRequest).await;

    // Act
    let health = request(addr, "GET", "/health", None).await;
    let press = request(addr, "POST", "/press?keyCode=A&shift=true", Some("keycontrol")).await;
    stop_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle).await;

    // Assert
    assert!(health.starts_with("HTTP/1.1 200"));
    assert!(press.starts_with("HTTP/1.1 200"));
    assert!(press.ends_with("Key press simulated for keyCode: A | Shift"));
    assert!(result.unwrap().unwrap().is_ok());
}

#[tokio::test]
async fn test_per_request_policy_keeps_serving_after_failure() {
    // Arrange
    let (addr, stop_tx, handle) = start(MockInjector::failing(), InjectionFailurePolicy::PerRequest).await;

    // Act
    let failed = request(addr, "POST", "/press?keyCode=A", Some("keycontrol")).await;
    let health = request(addr, "GET", "/health", None).await;

    // Assert
    assert!(failed.starts_with("HTTP/1.1 500"));
    assert!(health.starts_with("HTTP/1.1 200"));
    assert!(!handle.is_finished());

    stop_tx.send(()).unwrap();
    assert!(handle.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_fail_fast_answers_500_then_exits_with_error() {
    // Arrange
    let (addr, _stop_tx, handle) = start(MockInjector::failing(), InjectionFailurePolicy::FailFast).await;

    // Act
    let failed = request(addr, "POST", "/press/multi?keyCodes=A,B", Some("keycontrol")).await;
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server should stop on its own");

    // Assert
    assert!(failed.starts_with("HTTP/1.1 500"));
    let err = result.unwrap().unwrap_err();
    assert!(format!("{err:#}").contains("mock failure"));
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    // Arrange: occupy a port, then ask run_server for the same one
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = ServerConfig {
        bind_addr: taken.local_addr().unwrap(),
        ..config(InjectionFailurePolicy::PerRequest)
    };

    // Act
    let result =
        keycontrol_server::infrastructure::run_server(config, Arc::new(MockInjector::new())).await;

    // Assert
    let err = result.unwrap_err();
    assert!(format!("{err}").contains("failed to bind"));
}
