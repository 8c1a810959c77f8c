//! Executes `HttpRequest` values against the network.
//!
//! `Transport` is the seam between the sans-IO client and real I/O. Status
//! codes are returned as data so `MovieClient::parse_*` stays in charge of
//! interpreting them; only failures that produce no response at all become
//! `ApiError::Transport`.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "blocking")]
pub use blocking::UreqTransport;

#[cfg(feature = "blocking")]
mod blocking {
    use super::Transport;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a `ureq` agent.
    ///
    /// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
    /// responses come back as `HttpResponse` values. No timeout is set.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let HttpRequest {
                method,
                url,
                headers,
                body,
            } = request;
            let content_type = headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("content-type"))
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| "application/json".to_string());

            let result = match (method, body) {
                (HttpMethod::Get, _) => self.agent.get(&url).call(),
                (HttpMethod::Delete, _) => self.agent.delete(&url).call(),
                (HttpMethod::Post, Some(body)) => self
                    .agent
                    .post(&url)
                    .content_type(&content_type)
                    .send(body.as_bytes()),
                (HttpMethod::Post, None) => self.agent.post(&url).send_empty(),
                (HttpMethod::Put, Some(body)) => self
                    .agent
                    .put(&url)
                    .content_type(&content_type)
                    .send(body.as_bytes()),
                (HttpMethod::Put, None) => self.agent.put(&url).send_empty(),
                (HttpMethod::Patch, Some(body)) => self
                    .agent
                    .patch(&url)
                    .content_type(&content_type)
                    .send(body.as_bytes()),
                (HttpMethod::Patch, None) => self.agent.patch(&url).send_empty(),
            };
            let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
