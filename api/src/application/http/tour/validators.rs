use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};
use wayfarer_core::domain::tour::entities::DIFFICULTIES;

static TOUR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z '\-]+$").unwrap()
});

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_discount", skip_on_field_errors = true))]
pub struct CreateTourValidator {
    #[validate(
        length(
            min = 10,
            max = 40,
            message = "a tour name must have between 10 and 40 characters"
        ),
        regex(
            path = *TOUR_NAME,
            message = "a tour name may only contain letters, spaces, apostrophes and hyphens"
        )
    )]
    pub name: String,

    #[validate(range(min = 1, message = "a tour must last at least one day"))]
    pub duration: i32,

    #[validate(range(min = 1, message = "a tour must have a group size"))]
    pub max_group_size: i32,

    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    pub price_discount: Option<f64>,

    #[validate(length(min = 1, message = "a tour must have a summary"))]
    pub summary: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "a tour must have a cover image"))]
    pub image_cover: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub start_dates: Vec<DateTime<Utc>>,

    #[serde(default)]
    pub secret_tour: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTourValidator {
    #[serde(default)]
    #[validate(
        length(
            min = 10,
            max = 40,
            message = "a tour name must have between 10 and 40 characters"
        ),
        regex(
            path = *TOUR_NAME,
            message = "a tour name may only contain letters, spaces, apostrophes and hyphens"
        )
    )]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "a tour must last at least one day"))]
    pub duration: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "a tour must have a group size"))]
    pub max_group_size: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,

    #[serde(default)]
    pub price_discount: Option<f64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "a tour must have a summary"))]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "a tour must have a cover image"))]
    pub image_cover: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<String>>,

    #[serde(default)]
    pub start_dates: Option<Vec<DateTime<Utc>>>,

    #[serde(default)]
    pub secret_tour: Option<bool>,
}

fn validate_difficulty(difficulty: &str) -> Result<(), ValidationError> {
    if DIFFICULTIES.contains(&difficulty) {
        return Ok(());
    }

    Err(ValidationError::new("difficulty")
        .with_message("difficulty must be easy, medium or hard".into()))
}

/// The discount can only be checked against the price when both are in
/// the same payload, mirroring the document-level rule of the original
/// data model.
fn validate_create_discount(tour: &CreateTourValidator) -> Result<(), ValidationError> {
    if let Some(discount) = tour.price_discount
        && discount >= tour.price
    {
        return Err(ValidationError::new("price_discount")
            .with_message("discount price must be below the regular price".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_tour() -> CreateTourValidator {
        CreateTourValidator {
            name: "The Forest Hiker".to_string(),
            duration: 5,
            max_group_size: 25,
            difficulty: "easy".to_string(),
            price: 397.0,
            price_discount: None,
            summary: "Breathtaking hike through the Canadian Banff National Park".to_string(),
            description: None,
            image_cover: "tour-1-cover.jpg".to_string(),
            images: vec![],
            start_dates: vec![],
            secret_tour: false,
        }
    }

    #[test]
    fn a_well_formed_tour_passes() {
        assert!(valid_tour().validate().is_ok());
    }

    #[test]
    fn short_names_are_rejected() {
        let mut tour = valid_tour();
        tour.name = "Too short".to_string();
        assert!(tour.validate().is_err());
    }

    #[test]
    fn names_with_digits_are_rejected() {
        let mut tour = valid_tour();
        tour.name = "The 2nd Forest Hiker".to_string();
        assert!(tour.validate().is_err());
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let mut tour = valid_tour();
        tour.difficulty = "impossible".to_string();
        assert!(tour.validate().is_err());
    }

    #[test]
    fn discount_must_stay_below_price() {
        let mut tour = valid_tour();
        tour.price_discount = Some(400.0);
        assert!(tour.validate().is_err());

        tour.price_discount = Some(100.0);
        assert!(tour.validate().is_ok());
    }

    #[test]
    fn partial_updates_validate_only_supplied_fields() {
        let update = UpdateTourValidator {
            name: None,
            duration: None,
            max_group_size: None,
            difficulty: Some("medium".to_string()),
            price: None,
            price_discount: None,
            summary: None,
            description: None,
            image_cover: None,
            images: None,
            start_dates: None,
            secret_tour: None,
        };
        assert!(update.validate().is_ok());
    }
}
