//! Test helpers: a one-shot fake flight data provider on a local port.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A provider that accepts a single connection and answers it once.
pub struct FakeUpstream {
    /// Base URL to put into `Config::base_url`
    pub base_url: String,
    request: JoinHandle<String>,
}

impl FakeUpstream {
    /// Answer the next request with `status` and a JSON `body`.
    pub async fn respond(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let reply = format!(
            "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            if status < 400 { "OK" } else { "Error" },
            body.len(),
            body
        );
        Self::start(Some(reply)).await
    }

    /// Accept the next request and never answer it.
    pub async fn hang() -> Self {
        Self::start(None).await
    }

    async fn start(reply: Option<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let addr = listener.local_addr().expect("Fake upstream has no address");

        Self {
            base_url: format!("http://{}", addr),
            request: tokio::spawn(serve(listener, reply)),
        }
    }

    /// Request line the provider received, e.g. `GET /v1/flights?... HTTP/1.1`.
    pub async fn request_line(self) -> String {
        self.request.await.expect("Fake upstream task panicked")
    }
}

/// Base URL of a local port nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

async fn serve(listener: TcpListener, reply: Option<String>) -> String {
    let (mut socket, _) = match listener.accept().await {
        Ok(conn) => conn,
        Err(_) => return String::new(),
    };

    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let request_line = String::from_utf8_lossy(&head)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string();

    match reply {
        Some(reply) => {
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        None => tokio::time::sleep(Duration::from_secs(60)).await,
    }

    request_line
}
