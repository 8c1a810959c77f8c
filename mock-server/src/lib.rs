//! In-memory stand-in for the movie catalog service.
//!
//! Serves the same routes as the real service under `/movie`, backed by a
//! `BTreeMap` so listings come back ordered by id.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub year_release: i32,
}

/// Body of create and full-update requests. A body id is accepted and
/// ignored; the path decides which movie is replaced.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieBody {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub genre: String,
    pub year_release: i32,
}

/// Query parameters of a partial update.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePatch {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub year_release: Option<i32>,
}

#[derive(Debug)]
pub struct Store {
    next_id: i64,
    movies: BTreeMap<i64, Movie>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            movies: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let movie_routes = Router::new()
        .route("/getAllMovies", get(get_all_movies))
        .route("/getGenre/{genre}", get(get_genre))
        .route("/getOne/{id}", get(get_movie))
        .route("/createMovie", post(create_movie))
        .route("/update/{id}", put(update_movie).patch(update_movie_details))
        .route("/delete/{id}", delete(delete_movie));
    Router::new().nest("/movie", movie_routes).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_all_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    let store = db.read().await;
    Json(store.movies.values().cloned().collect())
}

async fn get_genre(State(db): State<Db>, Path(genre): Path<String>) -> Json<Vec<Movie>> {
    let store = db.read().await;
    Json(
        store
            .movies
            .values()
            .filter(|movie| movie.genre.eq_ignore_ascii_case(&genre))
            .cloned()
            .collect(),
    )
}

async fn get_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, StatusCode> {
    let store = db.read().await;
    store.movies.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_movie(
    State(db): State<Db>,
    Json(input): Json<MovieBody>,
) -> (StatusCode, Json<Movie>) {
    let mut store = db.write().await;
    let movie = Movie {
        id: store.next_id,
        title: input.title,
        genre: input.genre,
        year_release: input.year_release,
    };
    store.next_id += 1;
    store.movies.insert(movie.id, movie.clone());
    info!(id = movie.id, title = %movie.title, "created movie");
    (StatusCode::CREATED, Json(movie))
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<MovieBody>,
) -> Result<(StatusCode, Json<Movie>), StatusCode> {
    let mut store = db.write().await;
    let movie = store.movies.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    movie.title = input.title;
    movie.genre = input.genre;
    movie.year_release = input.year_release;
    info!(id, "replaced movie");
    Ok((StatusCode::ACCEPTED, Json(movie.clone())))
}

async fn update_movie_details(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Query(patch): Query<MoviePatch>,
) -> StatusCode {
    let mut store = db.write().await;
    let Some(movie) = store.movies.get_mut(&id) else {
        return StatusCode::NOT_FOUND;
    };
    if let Some(title) = patch.title {
        movie.title = title;
    }
    if let Some(genre) = patch.genre {
        movie.genre = genre;
    }
    if let Some(year_release) = patch.year_release {
        movie.year_release = year_release;
    }
    info!(id, "patched movie");
    StatusCode::OK
}

async fn delete_movie(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.movies.remove(&id) {
        Some(_) => {
            info!(id, "deleted movie");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
