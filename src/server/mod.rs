//! Upload service
//!
//! Accepts a file over HTTP, converts it between text and Morse code, keeps a
//! copy in the transcript directory and returns the result.

pub mod api_server;
pub mod handlers;
pub mod types;
