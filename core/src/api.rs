//! One call per catalog endpoint, each returning an `ApiOutcome`.
//!
//! `MovieApi` pairs the sans-IO `MovieClient` with a `Transport`. A call
//! issues exactly one request and never fails outward: errors are logged
//! and handed back in the outcome.

use tracing::{debug, warn};

use crate::client::MovieClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::outcome::ApiOutcome;
use crate::transport::Transport;
use crate::types::{Movie, MovieFields, MovieInput};

#[derive(Debug, Clone)]
pub struct MovieApi<T> {
    client: MovieClient,
    transport: T,
}

impl<T: Transport> MovieApi<T> {
    pub fn new(client: MovieClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &MovieClient {
        &self.client
    }

    pub fn get_all_movies(&self) -> ApiOutcome<Vec<Movie>> {
        let request = self.client.build_get_all_movies();
        self.call("get_all_movies", Ok(request), |c, r| c.parse_get_all_movies(r))
    }

    pub fn get_genre(&self, genre: &str) -> ApiOutcome<Vec<Movie>> {
        let request = self.client.build_get_genre(genre);
        self.call("get_genre", Ok(request), |c, r| c.parse_get_genre(r))
    }

    pub fn get_movie(&self, id: i64) -> ApiOutcome<Movie> {
        let request = self.client.build_get_movie(id);
        self.call("get_movie", Ok(request), |c, r| c.parse_get_movie(r))
    }

    pub fn create_movie(&self, input: &MovieInput) -> ApiOutcome<Movie> {
        let request = self.client.build_create_movie(input);
        self.call("create_movie", request, |c, r| c.parse_create_movie(r))
    }

    pub fn update_movie(&self, movie: &Movie) -> ApiOutcome<Movie> {
        let request = self.client.build_update_movie(movie);
        self.call("update_movie", request, |c, r| c.parse_update_movie(r))
    }

    pub fn update_movie_details(&self, fields: &MovieFields, id: i64) -> ApiOutcome<()> {
        let request = self.client.build_update_movie_details(fields, id);
        self.call("update_movie_details", Ok(request), |c, r| {
            c.parse_update_movie_details(r)
        })
    }

    pub fn delete_movie(&self, id: i64) -> ApiOutcome<()> {
        let request = self.client.build_delete_movie(id);
        self.call("delete_movie", Ok(request), |c, r| c.parse_delete_movie(r))
    }

    fn call<R>(
        &self,
        operation: &'static str,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&MovieClient, HttpResponse) -> Result<R, ApiError>,
    ) -> ApiOutcome<R> {
        let result = request.and_then(|request| {
            debug!(operation, method = request.method.as_str(), url = %request.url, "sending request");
            let response = self.transport.execute(request)?;
            debug!(operation, status = response.status, "received response");
            parse(&self.client, response)
        });
        if let Err(error) = &result {
            warn!(operation, %error, "movie api call failed");
        }
        result.into()
    }
}
