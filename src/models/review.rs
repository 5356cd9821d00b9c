// src/models/review.rs
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,          // Store-assigned identifier
    pub product_id: String,  // ID of the product the review is associated with
    pub user_name: String,   // Display name of the reviewer
    pub rating: i64,         // Meant to be 1-5, not enforced
    pub comment: String,
}

/// A review ready to be stored: every required field is present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: String,
    pub user_name: String,
    pub rating: i64,
    pub comment: String,
}

impl NewReview {
    pub fn with_id(&self, id: String) -> Review {
        Review {
            id,
            product_id: self.product_id.clone(),
            user_name: self.user_name.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
        }
    }
}

/// The body of a create-review request as received, before presence checks.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub product_id: Option<String>,
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

// Accepts `5` and `5.0`; a fractional rating is a malformed body
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    number
        .as_i64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        })
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("rating must be a whole number, got {}", number)))
}

impl ReviewSubmission {
    /// Checks that every field is present. Empty strings count as absent.
    /// The rating range is not checked.
    pub fn validate(self) -> Result<NewReview, Vec<&'static str>> {
        let mut missing = Vec::new();
        let product_id = required_text(self.product_id, "productId", &mut missing);
        let user_name = required_text(self.user_name, "userName", &mut missing);
        if self.rating.is_none() {
            missing.push("rating");
        }
        let comment = required_text(self.comment, "comment", &mut missing);

        match (product_id, user_name, self.rating, comment) {
            (Some(product_id), Some(user_name), Some(rating), Some(comment)) => Ok(NewReview {
                product_id,
                user_name,
                rating,
                comment,
            }),
            _ => Err(missing),
        }
    }
}

fn required_text(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(text) if !text.is_empty() => Some(text),
        _ => {
            missing.push(field);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_submission_validates() {
        let submission: ReviewSubmission = serde_json::from_str(
            r#"{"productId":"p1","userName":"Alice","rating":5,"comment":"Great scent"}"#,
        )
        .unwrap();
        let review = submission.validate().unwrap();
        assert_eq!(review.product_id, "p1");
        assert_eq!(review.user_name, "Alice");
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, "Great scent");
    }

    #[test]
    fn test_missing_and_empty_fields_are_reported_in_order() {
        let submission: ReviewSubmission =
            serde_json::from_str(r#"{"productId":"p1","userName":"","comment":null}"#).unwrap();
        assert_eq!(
            submission.validate().unwrap_err(),
            vec!["userName", "rating", "comment"]
        );
    }

    #[test]
    fn test_rating_accepts_whole_number_floats_only() {
        let parse = |body: &str| serde_json::from_str::<ReviewSubmission>(body);

        assert_eq!(parse(r#"{"rating":5.0}"#).unwrap().rating, Some(5));
        assert_eq!(parse(r#"{"rating":3}"#).unwrap().rating, Some(3));
        assert_eq!(parse(r#"{"rating":null}"#).unwrap().rating, None);
        assert_eq!(parse(r#"{}"#).unwrap().rating, None);
        assert!(parse(r#"{"rating":4.5}"#).is_err());
        assert!(parse(r#"{"rating":"5"}"#).is_err());
    }

    #[test]
    fn test_rating_range_is_not_checked() {
        let submission = ReviewSubmission {
            product_id: Some("p1".into()),
            user_name: Some("Bob".into()),
            rating: Some(42),
            comment: Some("too much".into()),
        };
        assert_eq!(submission.validate().unwrap().rating, 42);
    }

    #[test]
    fn test_review_serializes_camel_case_with_document_id() {
        let review = NewReview {
            product_id: "p1".into(),
            user_name: "Alice".into(),
            rating: 4,
            comment: "Nice".into(),
        }
        .with_id("r1".into());
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["_id"], "r1");
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["userName"], "Alice");
    }
}
