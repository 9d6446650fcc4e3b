use std::{collections::HashSet, path::Path};

use anyhow::{Context, bail};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MoviePatch, NewMovie},
};

/// Dataset compiled into the binary, used when no seed file is configured.
pub const BUNDLED_SEED: &str = include_str!("../data/movies.json");

/// In-memory movie collection in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn from_seed(movies: Vec<Movie>) -> anyhow::Result<Self> {
        {
            let mut seen = HashSet::with_capacity(movies.len());
            if let Some(dup) = movies.iter().find(|m| !seen.insert(m.id.as_str())) {
                bail!("duplicate movie id in seed: {}", dup.id);
            }
        }
        Ok(Self { movies })
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let movies: Vec<Movie> = serde_json::from_str(raw).context("parse seed dataset")?;
        Self::from_seed(movies)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read seed dataset {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Every movie, or only those tagged with `genre` (case-insensitive).
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        match genre {
            Some(genre) => self.movies.iter().filter(|m| m.has_genre(genre)).cloned().collect(),
            None => self.movies.clone(),
        }
    }

    pub fn get(&self, id: &str) -> AppResult<&Movie> {
        self.movies.iter().find(|m| m.id == id).ok_or(AppError::NotFound)
    }

    pub fn create(&mut self, new: NewMovie) -> Movie {
        let id = self.fresh_id();
        let movie = new.into_movie(id);
        self.movies.push(movie.clone());
        movie
    }

    pub fn update(&mut self, id: &str, patch: MoviePatch) -> AppResult<&Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id).ok_or(AppError::NotFound)?;
        movie.apply(patch);
        Ok(movie)
    }

    pub fn delete(&mut self, id: &str) -> AppResult<Movie> {
        let idx = self.position(id).ok_or(AppError::NotFound)?;
        Ok(self.movies.remove(idx))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
