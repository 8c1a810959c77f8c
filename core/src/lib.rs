//! Client core for the movie catalog service.
//!
//! # Overview
//! `MovieClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern). `MovieApi`
//! pairs it with a `Transport` and exposes one call per endpoint, each
//! returning an `ApiOutcome` that holds either the server data or the error.
//!
//! # Design
//! - `MovieClient` is stateless: it holds only the validated base URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and testable with plain data.
//! - The `blocking` feature (on by default) provides `UreqTransport`.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod outcome;
pub mod transport;
pub mod types;

pub use api::MovieApi;
pub use client::{MovieClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::ApiOutcome;
pub use transport::Transport;
#[cfg(feature = "blocking")]
pub use transport::UreqTransport;
pub use types::{Movie, MovieFields, MovieInput};
