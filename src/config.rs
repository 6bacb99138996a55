//! Server configuration, read from flags or the environment.

use clap::Parser;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
/// Multipart uploads are capped at 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 << 20;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Serialize, Clone, Debug, PartialEq, Eq)]
#[command(
    name = "morse_server",
    version,
    about = "Upload a text file and get it back as Morse code, or the other way round."
)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[arg(long, env = "MORSE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Directory where converted transcripts are written
    #[arg(long, env = "MORSE_OUTPUT_DIR", default_value = "transcripts")]
    pub output_dir: PathBuf,

    /// HTML page served at `/`
    #[arg(long, env = "MORSE_INDEX_PATH", default_value = "index.html")]
    pub index_path: PathBuf,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "MORSE_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Seconds before an unfinished request is answered with 408
    #[arg(long, env = "MORSE_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            output_dir: PathBuf::from("transcripts"),
            index_path: PathBuf::from("index.html"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
