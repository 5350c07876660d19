use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type MovieId = u64;

/// A movie as returned by the trending endpoint and stored in the watchlist.
///
/// `id` and `title` are required; everything else is optional and defaults
/// when missing. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Movie {
    /// Year part of `release_date` ("2024-05-01" → 2024).
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok())
    }

    /// Poster URL at the given size (e.g. "w500"), if the movie has one.
    pub fn poster_url(&self, image_base_url: &str, size: &str) -> Option<String> {
        image_url(image_base_url, size, self.poster_path.as_deref())
    }

    /// Backdrop URL at the given size (e.g. "w780"), if the movie has one.
    pub fn backdrop_url(&self, image_base_url: &str, size: &str) -> Option<String> {
        image_url(image_base_url, size, self.backdrop_path.as_deref())
    }

    /// Rating with one decimal, as shown next to the title.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }
}

fn image_url(base: &str, size: &str, path: Option<&str>) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        size,
        path.trim_start_matches('/')
    ))
}

/// Raw page of the trending endpoint. Records stay untyped until
/// [`TrendingPage::into_movies`] validates them.
#[derive(Debug, Deserialize)]
pub struct TrendingPage {
    #[serde(default)]
    pub results: Vec<Value>,
}

impl TrendingPage {
    /// Typed movies, skipping records that fail validation.
    pub fn into_movies(self) -> Vec<Movie> {
        self.results
            .into_iter()
            .filter_map(|record| {
                let id = record.get("id").cloned();
                match serde_json::from_value::<Movie>(record) {
                    Ok(movie) => Some(movie),
                    Err(err) => {
                        tracing::warn!(id = ?id, error = %err, "Skipping invalid movie record");
                        None
                    }
                }
            })
            .collect()
    }
}
