use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl Movie {
    /// True when any of the record's genre tags equals `genre` ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genre.as_deref().unwrap_or_default().iter().any(|g| g.to_lowercase() == wanted)
    }

    /// Overwrites each field for which the patch carries a truthy value.
    pub fn apply(&mut self, patch: MoviePatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.year, patch.year);
        merge(&mut self.director, patch.director);
        merge(&mut self.duration, patch.duration);
        merge(&mut self.poster, patch.poster);
        merge(&mut self.genre, patch.genre);
        merge(&mut self.rate, patch.rate);
    }
}

/// Body of `POST /movies`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewMovie {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rate: Option<f64>,
}

impl NewMovie {
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
            rate: self.rate,
        }
    }
}

/// Body of `PATCH /movies/{id}`.
///
/// Falsy values (empty text, zero, empty genre list) are indistinguishable
/// from absent ones, so a patch can never clear a field.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rate: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreFilter {
    pub genre: Option<String>,
}

impl GenreFilter {
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

fn merge<T: Truthy>(slot: &mut Option<T>, incoming: Option<T>) {
    if let Some(value) = incoming.filter(Truthy::is_truthy) {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Movie {
        Movie {
            id: "a1".to_string(),
            title: Some("X".to_string()),
            year: Some(2000),
            director: Some("D".to_string()),
            duration: Some(120),
            poster: Some("https://img.test/x.jpg".to_string()),
            genre: Some(vec!["Drama".to_string(), "Crime".to_string()]),
            rate: Some(8.5),
        }
    }

    #[test]
    fn genre_match_ignores_case_but_not_substrings() {
        let movie = sample();
        assert!(movie.has_genre("drama"));
        assert!(movie.has_genre("CRIME"));
        assert!(!movie.has_genre("dram"));
        assert!(!movie.has_genre("Comedy"));
    }

    #[test]
    fn movie_without_genres_never_matches() {
        let movie = Movie { genre: None, ..sample() };
        assert!(!movie.has_genre("drama"));
    }

    #[test]
    fn empty_patch_leaves_record_unchanged() {
        let mut movie = sample();
        movie.apply(MoviePatch::default());
        assert_eq!(movie, sample());
    }

    #[test]
    fn falsy_patch_values_are_ignored() {
        let mut movie = sample();
        movie.apply(MoviePatch {
            title: Some(String::new()),
            year: Some(0),
            duration: Some(0),
            genre: Some(Vec::new()),
            rate: Some(0.0),
            ..MoviePatch::default()
        });
        assert_eq!(movie, sample());
    }

    #[test]
    fn truthy_patch_values_overwrite() {
        let mut movie = sample();
        movie.apply(MoviePatch {
            year: Some(2001),
            genre: Some(vec!["Thriller".to_string()]),
            ..MoviePatch::default()
        });
        assert_eq!(movie.year, Some(2001));
        assert_eq!(movie.genre, Some(vec!["Thriller".to_string()]));
        assert_eq!(movie.title.as_deref(), Some("X"));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let movie = NewMovie { title: Some("Y".to_string()), ..NewMovie::default() }
            .into_movie("b2".to_string());
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "b2", "title": "Y" }));
    }

    #[test]
    fn null_fields_deserialize_as_absent() {
        let patch: MoviePatch =
            serde_json::from_str(r#"{"title":null,"year":1999,"unknown":true}"#).unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.year, Some(1999));
    }

    #[test]
    fn empty_genre_query_means_no_filter() {
        let filter = GenreFilter { genre: Some(String::new()) };
        assert_eq!(filter.genre(), None);
    }
}
