use crate::models::Movie;
use serde::Serialize;

/// Placeholder until awards are tracked somewhere
pub const AWARDS_WON: u32 = 12;

/// Body of `GET /api/stats`
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_movies: u64,
    pub total_users: u64,
    /// Rating of the best movie, 0 when there are none
    pub top_rated_movie: f64,
    pub awards_won: u32,
}

/// Rating of the top movie; an empty collection or an unrated top movie yields 0
pub fn highest_rating(top: Option<&Movie>) -> f64 {
    top.and_then(|movie| movie.rating).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(rating: Option<f64>) -> Movie {
        Movie {
            id: None,
            title: "Heat".to_string(),
            genre: vec!["Crime".to_string()],
            release_year: None,
            director: None,
            cast: vec![],
            rating,
            duration: None,
            plot_summary: None,
            poster_url: None,
            language: None,
            country: None,
            added_by: None,
        }
    }

    #[test]
    fn test_no_movies_means_zero() {
        assert_eq!(highest_rating(None), 0.0);
    }

    #[test]
    fn test_unrated_top_movie_means_zero() {
        assert_eq!(highest_rating(Some(&movie(None))), 0.0);
    }

    #[test]
    fn test_rating_is_reported() {
        assert_eq!(highest_rating(Some(&movie(Some(9.3)))), 9.3);
    }

    #[test]
    fn test_json_field_names() {
        let stats = StatsResponse {
            total_movies: 3,
            total_users: 2,
            top_rated_movie: 9.3,
            awards_won: AWARDS_WON,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalMovies"], 3);
        assert_eq!(json["totalUsers"], 2);
        assert_eq!(json["topRatedMovie"], 9.3);
        assert_eq!(json["awardsWon"], 12);
    }
}
