use serde::{Deserialize, Serialize};

use super::repo_types::ReviewDetails;
use crate::error::FieldErrors;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateReviewRequest {
    pub review: String,
    pub stars: Option<i32>,
}

impl CreateReviewRequest {
    /// Returns the trimmed text and star count.
    pub fn validate(&self) -> Result<(String, i32), FieldErrors> {
        let mut errors = FieldErrors::new();
        let text = self.review.trim();
        if text.is_empty() {
            errors.add("review", "Review text is required");
        }
        let stars = self.stars.filter(|s| (1..=5).contains(s));
        if stars.is_none() {
            errors.add("stars", "Stars must be an integer from 1 to 5");
        }
        match stars {
            Some(stars) if errors.is_empty() => Ok((text.to_owned(), stars)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewList {
    pub reviews: Vec<ReviewDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_bounds() {
        for (stars, ok) in [(0, false), (1, true), (5, true), (6, false)] {
            let req = CreateReviewRequest {
                review: "Great".into(),
                stars: Some(stars),
            };
            assert_eq!(req.validate().is_ok(), ok, "stars = {stars}");
        }
    }

    #[test]
    fn blank_review_and_missing_stars() {
        let errors = CreateReviewRequest {
            review: "   ".into(),
            stars: None,
        }
        .validate()
        .unwrap_err();
        assert!(errors.get("review").is_some());
        assert!(errors.get("stars").is_some());
    }
}
