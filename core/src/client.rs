//! Stateless HTTP request builder and response parser for the movie API.
//!
//! # Design
//! `MovieClient` holds only the validated base URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. A `Transport` executes the round-trip in between.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Movie, MovieFields, MovieInput};

/// Where the catalog service listens unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/movie";

/// Synchronous, stateless client for the movie API.
#[derive(Debug, Clone)]
pub struct MovieClient {
    base_url: Url,
}

impl MovieClient {
    /// Validate `base_url`. A trailing slash is ignored.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: HttpMethod, url: Url) -> HttpRequest {
        HttpRequest {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<B: serde::Serialize>(
        &self,
        method: HttpMethod,
        url: Url,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: url.into(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_get_all_movies(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.endpoint(&["getAllMovies"]))
    }

    pub fn build_get_genre(&self, genre: &str) -> HttpRequest {
        self.request(HttpMethod::Get, self.endpoint(&["getGenre", genre]))
    }

    pub fn build_get_movie(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, self.endpoint(&["getOne", &id.to_string()]))
    }

    pub fn build_create_movie(&self, input: &MovieInput) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, self.endpoint(&["createMovie"]), input)
    }

    /// Full replacement. The id travels both in the path and in the body.
    pub fn build_update_movie(&self, movie: &Movie) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            self.endpoint(&["update", &movie.id.to_string()]),
            movie,
        )
    }

    /// Partial update. Fields travel as query parameters; there is no body.
    pub fn build_update_movie_details(&self, fields: &MovieFields, id: i64) -> HttpRequest {
        let mut url = self.endpoint(&["update", &id.to_string()]);
        let pairs = fields.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        self.request(HttpMethod::Patch, url)
    }

    pub fn build_delete_movie(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, self.endpoint(&["delete", &id.to_string()]))
    }

    pub fn parse_get_all_movies(&self, response: HttpResponse) -> Result<Vec<Movie>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_genre(&self, response: HttpResponse) -> Result<Vec<Movie>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        parse_json(response)
    }

    /// The service answers a partial update with an empty body; whatever it
    /// sends is discarded.
    pub fn parse_update_movie_details(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_movie(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MovieClient {
        MovieClient::new(DEFAULT_BASE_URL).unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_all_movies_produces_correct_request() {
        let req = client().build_get_all_movies();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/movie/getAllMovies");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_genre_encodes_segment() {
        let req = client().build_get_genre("Science Fiction");
        assert_eq!(req.url, "http://localhost:8080/movie/getGenre/Science%20Fiction");

        let req = client().build_get_genre("a/b");
        assert_eq!(req.url, "http://localhost:8080/movie/getGenre/a%2Fb");
    }

    #[test]
    fn build_get_movie_produces_correct_request() {
        let req = client().build_get_movie(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/movie/getOne/42");
    }

    #[test]
    fn build_create_movie_produces_correct_request() {
        let input = MovieInput {
            title: "Jaws".to_string(),
            genre: "Thriller".to_string(),
            year_release: 1975,
        };
        let req = client().build_create_movie(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/movie/createMovie");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Jaws");
        assert_eq!(body["yearRelease"], 1975);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_movie_carries_id_in_path_and_body() {
        let movie = Movie {
            id: 7,
            title: "Up".to_string(),
            genre: "Animation".to_string(),
            year_release: 2009,
        };
        let req = client().build_update_movie(&movie).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:8080/movie/update/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 7);
    }

    #[test]
    fn build_update_movie_details_uses_query_string() {
        let fields = MovieFields {
            title: Some("New Title".to_string()),
            genre: Some("Drama".to_string()),
            year_release: None,
        };
        let req = client().build_update_movie_details(&fields, 7);
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(
            req.url,
            "http://localhost:8080/movie/update/7?title=New+Title&genre=Drama"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_movie_details_without_fields_has_no_query() {
        let req = client().build_update_movie_details(&MovieFields::default(), 7);
        assert_eq!(req.url, "http://localhost:8080/movie/update/7");
    }

    #[test]
    fn build_delete_movie_produces_correct_request() {
        let req = client().build_delete_movie(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8080/movie/delete/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let client = MovieClient::new("http://localhost:8080/movie/").unwrap();
        assert_eq!(
            client.build_get_all_movies().url,
            "http://localhost:8080/movie/getAllMovies"
        );
    }

    #[test]
    fn bare_host_base_url() {
        let client = MovieClient::new("http://127.0.0.1:9000").unwrap();
        assert_eq!(client.build_get_movie(1).url, "http://127.0.0.1:9000/getOne/1");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            MovieClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            MovieClient::new("mailto:someone@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn parse_get_all_movies_success() {
        let movies = client()
            .parse_get_all_movies(response(
                200,
                r#"[{"id":1,"title":"Heat","genre":"Crime","yearRelease":1995}]"#,
            ))
            .unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Heat");
        assert_eq!(movies[0].year_release, 1995);
    }

    #[test]
    fn parse_get_movie_not_found() {
        let err = client().parse_get_movie(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_movie_accepts_any_2xx() {
        let body = r#"{"id":2,"title":"Jaws","genre":"Thriller","yearRelease":1975}"#;
        assert_eq!(client().parse_create_movie(response(201, body)).unwrap().id, 2);
        assert_eq!(client().parse_create_movie(response(200, body)).unwrap().id, 2);
    }

    #[test]
    fn parse_create_movie_wrong_status() {
        let err = client()
            .parse_create_movie(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_movie_details_ignores_body() {
        assert!(client()
            .parse_update_movie_details(response(200, "definitely not json"))
            .is_ok());
        assert!(client().parse_update_movie_details(response(200, "")).is_ok());
    }

    #[test]
    fn parse_update_movie_details_not_found() {
        let err = client()
            .parse_update_movie_details(response(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_movie_success() {
        assert!(client().parse_delete_movie(response(204, "")).is_ok());
    }

    #[test]
    fn parse_get_all_movies_bad_json() {
        let err = client()
            .parse_get_all_movies(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
