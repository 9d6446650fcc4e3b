use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{
    AppState, cors,
    error::AppResult,
    models::{GenreFilter, Message, Movie, MoviePatch, NewMovie},
};

pub fn router(state: Arc<AppState>) -> anyhow::Result<Router> {
    let cors = cors::layer(&state.config.allowed_origins)?;

    Ok(Router::new()
        .route("/", get(index))
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).patch(update_movie).delete(delete_movie))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub async fn index() -> &'static str {
    "Hola mundo"
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<GenreFilter>,
) -> Json<Vec<Movie>> {
    let store = state.store.read().await;
    Json(store.list(filter.genre()))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let store = state.store.read().await;
    let movie = store.get(&id).inspect_err(|_| tracing::debug!(%id, "movie not found"))?;
    Ok(Json(movie.clone()))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Option<Json<NewMovie>>,
) -> (StatusCode, Json<Movie>) {
    let new = body.map(|Json(new)| new).unwrap_or_default();
    let movie = state.store.write().await.create(new);
    tracing::debug!(id = %movie.id, "movie created");
    (StatusCode::CREATED, Json(movie))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<MoviePatch>>,
) -> AppResult<Json<Movie>> {
    let patch = body.map(|Json(patch)| patch).unwrap_or_default();
    let mut store = state.store.write().await;
    let movie = store.update(&id, patch)?;
    tracing::debug!(%id, "movie updated");
    Ok(Json(movie.clone()))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Message>> {
    state.store.write().await.delete(&id)?;
    tracing::debug!(%id, "movie deleted");
    Ok(Json(Message { message: "Movie deleted".to_string() }))
}
