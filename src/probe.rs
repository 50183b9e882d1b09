//! Internet reachability probe.
//!
//! A single TCP connect attempt against a well-known endpoint (Google public
//! DNS, 8.8.8.8:53 by default) decides whether the web TTS backend is worth
//! trying. No DNS resolution, no application-layer request.

use std::time::Duration;

use tokio::net::TcpStream;
use tracing::debug;

/// True if a TCP connection to `host:port` succeeds within `timeout`.
pub async fn is_reachable(host: &str, port: u16, timeout: Duration) -> bool {
    let addr = format!("{host}:{port}");
    match tokio::time::timeout(timeout, TcpStream::connect(&addr)).await {
        Ok(Ok(_)) => {
            debug!("Probe connected to {addr}");
            true
        }
        Ok(Err(e)) => {
            debug!("Probe failed to connect to {addr}: {e}");
            false
        }
        Err(_) => {
            debug!("Probe timed out connecting to {addr} after {timeout:?}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reaches_a_local_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(is_reachable("127.0.0.1", port, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn fails_on_unresolvable_host() {
        assert!(!is_reachable("host.invalid", 53, Duration::from_secs(1)).await);
    }
}
