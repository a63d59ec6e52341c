//! wonton
//!
//! A thin typed dispatch layer over `reqwest` and `serde_json`: describe an
//! HTTP call with a declarative [`Endpoint`], issue it with
//! [`Client::request`] or [`Client::upload`], and get the decoded model
//! routed to a success callback (or the error text to a failure callback),
//! followed by an always-run completion callback.
//!
//! Two decode strategies cover the two common backend styles:
//! [`DecodeStrategy::schema`] decodes strictly via serde, while
//! [`DecodeStrategy::dynamic`] parses a JSON tree and builds the model with
//! [`FromJson`], defaulting every missing or mismatched field.
//!
//! ```rust,ignore
//! use wonton::{Client, ClientConfig, DecodeStrategy, Endpoint, RequestResult};
//!
//! struct Ping;
//!
//! impl Endpoint for Ping {
//!     fn path(&self) -> String {
//!         "/ping".to_string()
//!     }
//! }
//!
//! # async fn demo() -> wonton::Result<()> {
//! let client = Client::new(ClientConfig::new("https://api.example.com"));
//! client
//!     .request(
//!         &Ping,
//!         DecodeStrategy::<RequestResult<serde_json::Value>>::dynamic(),
//!         |envelope| println!("code={} message={}", envelope.code, envelope.message),
//!         |message| eprintln!("failed: {message}"),
//!         || {},
//!     )
//!     .await
//! # }
//! ```
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod decode;
mod dispatch;
pub mod endpoint;
pub mod error;
pub mod headers;
pub mod json;
pub mod progress;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use decode::DecodeStrategy;
pub use endpoint::{Endpoint, RequestBody};
pub use error::{RequestError, Result};
pub use json::{FromJson, RequestResult};
pub use progress::UploadPart;
pub use transport::{Transport, TransportRequest, TransportResponse};
