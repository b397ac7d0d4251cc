//! The shared library for fetchkit, a small HTTP request helper for Yew frontends.
//!
//! This library provides the request helper and everything around it: request
//! options, body encoding, cancellation, the transport seam with its browser
//! implementation, the normalized response type, logging setup, and the wire
//! types shared by the demo frontend and backend.

pub mod body;
pub mod cancel;
pub mod data;
pub mod errors;
pub mod fetcher;
pub mod log;
pub mod macros;
pub mod options;
pub mod response;
pub mod transport;

pub use body::{Body, FormData, FormValue};
pub use cancel::{AbortController, AbortSignal};
pub use errors::TransportError;
pub use fetcher::Fetcher;
pub use options::{HttpMethod, Headers, RequestOptions};
pub use response::FetchResponse;
pub use transport::{GlooTransport, Transport, TransportResponse};

pub use serde;
pub use serde_json;
pub use tracing;
