mod http;
mod inline;
mod local;
mod parse;

pub use http::HttpSource;
pub use inline::InlineSource;
pub use local::LocalFileSource;
pub use parse::parse_sequence;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Trait for anything that can supply an integer sequence to scan
#[async_trait]
pub trait SequenceSource: Send + Sync {
    /// Load the full sequence
    async fn read_sequence(&self) -> Result<Vec<i64>>;

    /// Short human-readable name of the source, for logs
    fn describe(&self) -> String;

    /// Bytes pulled over the network so far, for remote sources
    fn transferred_bytes(&self) -> Option<u64> {
        None
    }
}

pub fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick a source for a path or URL.
pub fn open_source(location: &str) -> Result<Box<dyn SequenceSource>> {
    if is_http_url(location) {
        Ok(Box::new(HttpSource::new(location.to_string())?))
    } else {
        Ok(Box::new(LocalFileSource::new(Path::new(location))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://example.com/seq.txt"));
        assert!(is_http_url("http://localhost:8080/seq"));
        assert!(!is_http_url("./seq.txt"));
        assert!(!is_http_url("httpdata.txt"));
    }

    #[tokio::test]
    async fn test_open_source_picks_http_source() {
        let source = open_source("http://127.0.0.1:9/seq.txt").unwrap();
        assert_eq!(source.describe(), "http://127.0.0.1:9/seq.txt");
        assert_eq!(source.transferred_bytes(), Some(0));
    }

    #[tokio::test]
    async fn test_open_source_picks_local_file() {
        let source = open_source("does/not/exist.txt").unwrap();
        assert_eq!(source.describe(), "does/not/exist.txt");
        assert_eq!(source.transferred_bytes(), None);
        assert!(source.read_sequence().await.is_err());
    }
}
