//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use movie_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, Movie, MovieClient, MovieFields, MovieInput,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/movie";

fn client() -> MovieClient {
    MovieClient::new(BASE_URL).unwrap()
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Check method, url, and (when the vector has them) headers and JSON body.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    match expected.get("headers") {
        Some(headers) => {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => assert!(req.headers.is_empty(), "{name}: headers should be empty"),
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Compare a parse result with the case's `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: PartialEq + std::fmt::Debug + serde::de::DeserializeOwned,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
            "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
        return;
    }
    let value = result.unwrap();
    if let Some(expected) = case.get("expected_result") {
        let expected: T = serde_json::from_value(expected.clone()).unwrap();
        assert_eq!(value, expected, "{name}: parsed result");
    }
}

fn name(case: &Value) -> &str {
    case["name"].as_str().unwrap()
}

fn input_id(case: &Value) -> i64 {
    case["input_id"].as_i64().unwrap()
}

#[test]
fn get_all_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get_all.json")) {
        let req = c.build_get_all_movies();
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<Vec<Movie>>(name(&case), &case, c.parse_get_all_movies(simulated(&case)));
    }
}

#[test]
fn genre_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/genre.json")) {
        let req = c.build_get_genre(case["input_genre"].as_str().unwrap());
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<Vec<Movie>>(name(&case), &case, c.parse_get_genre(simulated(&case)));
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let req = c.build_get_movie(input_id(&case));
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<Movie>(name(&case), &case, c.parse_get_movie(simulated(&case)));
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let input: MovieInput = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_movie(&input).unwrap();
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<Movie>(name(&case), &case, c.parse_create_movie(simulated(&case)));
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let input: Movie = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_movie(&input).unwrap();
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<Movie>(name(&case), &case, c.parse_update_movie(simulated(&case)));
    }
}

#[test]
fn patch_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/patch.json")) {
        let fields: MovieFields = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_movie_details(&fields, input_id(&case));
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<()>(name(&case), &case, c.parse_update_movie_details(simulated(&case)));
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let req = c.build_delete_movie(input_id(&case));
        assert_request(name(&case), &req, &case["expected_request"]);
        assert_outcome::<()>(name(&case), &case, c.parse_delete_movie(simulated(&case)));
    }
}
