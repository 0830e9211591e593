//! Validation of the login and review forms before anything is sent.

use thiserror::Error;

use crate::api::{LoginRequest, ReviewRequest};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingCredentials,

    #[error("Please fill in all fields.")]
    MissingReviewFields,

    #[error("No place ID found in the URL.")]
    MissingPlaceId,

    #[error("Rating must be a whole number from 1 to 5, got {0:?}")]
    InvalidRating(String),

    #[error("Invalid price filter: {0:?}")]
    InvalidPrice(String),
}

/// The email is trimmed, the password is taken as typed.
pub fn login(email: &str, password: &str) -> Result<LoginRequest, FormError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(FormError::MissingCredentials);
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn review(place_id: Option<&str>, text: &str, rating: &str) -> Result<ReviewRequest, FormError> {
    let place_id = match place_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(FormError::MissingPlaceId),
    };
    let text = text.trim();
    let rating = rating.trim();
    if text.is_empty() || rating.is_empty() {
        return Err(FormError::MissingReviewFields);
    }
    let rating = match rating.parse::<u8>() {
        Ok(value @ 1..=5) => value,
        _ => return Err(FormError::InvalidRating(rating.to_string())),
    };
    Ok(ReviewRequest {
        place_id: place_id.to_string(),
        text: text.to_string(),
        rating,
    })
}
