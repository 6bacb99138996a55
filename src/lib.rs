// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod server;

pub use crate::core::engine::{convert, MorseEngine};
pub use crate::error::ConversionError;
