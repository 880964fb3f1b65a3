use crate::utils::{AppError, AppResult};
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use crate::models::lenient::{
    request_f64, request_i32, stored_f64, stored_i32, stored_labels, stored_opt_string,
    stored_string,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Movie as stored in the `movies` collection.
/// Every field reads leniently: one mistyped document must not hide the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default, deserialize_with = "stored_string")]
    pub title: String,

    /// Category labels; older documents may hold a single string
    #[serde(default, deserialize_with = "stored_labels")]
    pub genre: Vec<String>,

    #[serde(default, deserialize_with = "stored_i32", skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,

    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default, deserialize_with = "stored_labels", skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<String>,

    #[serde(default, deserialize_with = "stored_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Runtime in minutes
    #[serde(default, deserialize_with = "stored_i32", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,

    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub plot_summary: Option<String>,

    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,

    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Email of the user who added it (not checked against `users`)
    #[serde(default, deserialize_with = "stored_opt_string", skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(label)) => vec![label],
        Some(OneOrMany::Many(labels)) => labels,
        None => Vec::new(),
    })
}

fn one_or_many_opt<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(label)) => Some(vec![label]),
        Some(OneOrMany::Many(labels)) => Some(labels),
        None => None,
    })
}

/// Body of `POST /movies`
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub title: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub genre: Vec<String>,
    #[serde(default, deserialize_with = "request_i32")]
    pub release_year: Option<i32>,
    pub director: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub cast: Vec<String>,
    #[serde(default, deserialize_with = "request_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "request_i32")]
    pub duration: Option<i32>,
    pub plot_summary: Option<String>,
    pub poster_url: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub added_by: Option<String>,
}

impl From<CreateMovieRequest> for Movie {
    fn from(req: CreateMovieRequest) -> Self {
        Movie {
            id: None,
            title: req.title,
            genre: req.genre,
            release_year: req.release_year,
            director: req.director,
            cast: req.cast,
            rating: req.rating,
            duration: req.duration,
            plot_summary: req.plot_summary,
            poster_url: req.poster_url,
            language: req.language,
            country: req.country,
            added_by: req.added_by,
        }
    }
}

/// Body of `PUT /movies/{id}`; absent fields are left untouched
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMovieRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "one_or_many_opt", skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, deserialize_with = "request_i32", skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "one_or_many_opt", skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(default, deserialize_with = "request_f64", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "request_i32", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
}

impl UpdateMovieRequest {
    /// `$set` payload; the store refuses an empty one
    pub fn to_set_document(&self) -> AppResult<Document> {
        let set = bson::to_document(self)
            .map_err(|e| AppError::InvalidRequest(format!("Invalid movie fields: {}", e)))?;
        if set.is_empty() {
            return Err(AppError::InvalidRequest("No fields to update".to_string()));
        }
        Ok(set)
    }
}

/// Query string of `GET /movies`
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MovieQuery {
    /// Comma-separated genres, any of which may match
    pub genre: Option<String>,
    /// Inclusive lower rating bound
    pub min_rating: Option<String>,
    /// Inclusive upper rating bound
    pub max_rating: Option<String>,
}

impl MovieQuery {
    pub fn to_filter(&self) -> AppResult<Document> {
        let mut filter = Document::new();

        if let Some(raw) = non_empty(&self.genre) {
            let genres: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .collect();
            if !genres.is_empty() {
                filter.insert("genre", doc! { "$in": genres });
            }
        }

        let min = parse_bound("minRating", &self.min_rating)?;
        let max = parse_bound("maxRating", &self.max_rating)?;

        if min.is_some() || max.is_some() {
            let mut range = Document::new();
            if let Some(min) = min {
                range.insert("$gte", min);
            }
            if let Some(max) = max {
                range.insert("$lte", max);
            }
            filter.insert("rating", range);
        }

        Ok(filter)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bound(name: &str, value: &Option<String>) -> AppResult<Option<f64>> {
    match non_empty(value) {
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| AppError::InvalidRequest(format!("{} must be a number, got '{}'", name, raw))),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub cast: Vec<String>,
    pub rating: Option<f64>,
    pub duration: Option<i32>,
    pub plot_summary: Option<String>,
    pub poster_url: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub added_by: Option<String>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        MovieResponse {
            id: movie.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            director: movie.director,
            cast: movie.cast,
            rating: movie.rating,
            duration: movie.duration,
            plot_summary: movie.plot_summary,
            poster_url: movie.poster_url,
            language: movie.language,
            country: movie.country,
            added_by: movie.added_by,
        }
    }
}
