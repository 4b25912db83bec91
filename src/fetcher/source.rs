//! Byte sources for sound downloads.

use std::io::{Read, Write};

use tracing::debug;

use crate::config::FetcherConfig;
use crate::error::{FetcherError, Result};

/// Size of the buffer used to stream response bodies.
const CHUNK_SIZE: usize = 64 * 1024;

/// Something that can retrieve the bytes behind a URL.
pub trait SoundSource {
    /// Streams the content of `url` into `sink`.
    ///
    /// Returns the number of bytes written. Bytes may already have been
    /// written to `sink` when an error is returned.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64>;
}

/// Blocking HTTP(S) source backed by a reused reqwest client.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Creates a source using the timeout and user agent from `config`.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetcherError::client_init_failed)?;
        Ok(Self { client })
    }
}

impl SoundSource for HttpSource {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetcherError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::http_status(url, status));
        }

        debug!(url, content_length = ?response.content_length(), "response received");

        let mut downloaded: u64 = 0;
        let mut buffer = vec![0u8; CHUNK_SIZE];

        loop {
            let bytes_read = match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(FetcherError::read_failed(url, e)),
            };

            sink.write_all(&buffer[..bytes_read])
                .map_err(|e| FetcherError::write_failed("Failed to write sound data", e))?;

            downloaded += bytes_read as u64;
        }

        sink.flush()
            .map_err(|e| FetcherError::write_failed("Failed to flush sound data", e))?;

        Ok(downloaded)
    }
}
