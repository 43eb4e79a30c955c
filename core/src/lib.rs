//! Client SDK for the save-string endpoint.
//!
//! # Overview
//! `StringService::send_string` POSTs `{"myString": value}` as JSON to a
//! fixed endpoint and succeeds only when the server answers 200.
//!
//! # Design
//! - The network sits behind the `Transport` trait. Production code uses
//!   `UreqTransport`; tests inject a double and never touch the network.
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`),
//!   so the exact wire form can be inspected without sending.
//! - Errors form a closed set: `InvalidUrl`, `InvalidResponse`, or the
//!   transport's own error carried unchanged in `Transport`.

pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use error::StringServiceError;
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::StringService;
pub use transport::{Transport, TransportConfig, TransportError, UreqTransport};
pub use types::{save_string_body, CONTENT_TYPE_JSON, ENDPOINT};
