use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

use super::{SequenceSource, parse_sequence};
use anyhow::{Context, Result, bail};

/// Integer sequence served as a text document over HTTP(S)
pub struct HttpSource {
    client: Client,
    url: String,
    transferred_bytes: AtomicU64,
    /// Retries after the first attempt, on connect errors and timeouts only
    max_retry: u32,
}

impl HttpSource {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            url,
            transferred_bytes: AtomicU64::new(0),
            max_retry: 10,
        })
    }

    pub fn with_max_retry(mut self, max_retry: u32) -> Self {
        self.max_retry = max_retry;
        self
    }

    async fn fetch_text(&self) -> Result<String> {
        let mut retry_count = 0;

        loop {
            match self.client.get(&self.url).send().await {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        bail!("HTTP request failed with status: {}", resp.status());
                    }

                    let text = resp.text().await?;
                    self.transferred_bytes
                        .fetch_add(text.len() as u64, Ordering::Relaxed);
                    debug!(url = %self.url, bytes = text.len(), "fetched sequence");
                    return Ok(text);
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count > self.max_retry {
                        bail!("Max retries exceeded after {} attempts: {}", retry_count, e);
                    }
                    warn!(
                        "Connection error, retry {}/{}: {}",
                        retry_count, self.max_retry, e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[async_trait]
impl SequenceSource for HttpSource {
    async fn read_sequence(&self) -> Result<Vec<i64>> {
        let text = self
            .fetch_text()
            .await
            .with_context(|| format!("Failed to fetch {}", self.url))?;

        parse_sequence(&text).with_context(|| format!("Failed to parse {}", self.url))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }

    fn transferred_bytes(&self) -> Option<u64> {
        Some(self.transferred_bytes.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request on a local port and return its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\n\
                 Content-Type: text/plain\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/seq.txt", addr)
    }

    #[tokio::test]
    async fn test_fetch_and_parse_body() {
        let url = serve_once("200 OK", "1 -1 4 -4 2\n").await;
        let source = HttpSource::new(url).unwrap();

        assert_eq!(source.transferred_bytes(), Some(0));
        assert_eq!(source.read_sequence().await.unwrap(), vec![1, -1, 4, -4, 2]);
        assert_eq!(source.transferred_bytes(), Some(12));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let url = serve_once("404 Not Found", "missing").await;
        let source = HttpSource::new(url.clone()).unwrap();

        let msg = format!("{:#}", source.read_sequence().await.unwrap_err());
        assert!(msg.contains("404"), "{}", msg);
        assert!(msg.contains(&url), "{}", msg);
        assert_eq!(source.transferred_bytes(), Some(0));
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let url = serve_once("200 OK", "[1, 2, three]").await;
        let source = HttpSource::new(url).unwrap();

        let msg = format!("{:#}", source.read_sequence().await.unwrap_err());
        assert!(msg.contains("'three'"), "{}", msg);
    }

    #[tokio::test]
    async fn test_connect_errors_use_every_retry() {
        // Bind then drop to get a local port nobody listens on.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let source = HttpSource::new(format!("http://{}/seq.txt", addr))
            .unwrap()
            .with_max_retry(1);

        let msg = format!("{:#}", source.read_sequence().await.unwrap_err());
        assert!(msg.contains("after 2 attempts"), "{}", msg);
    }
}
