use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;
use crate::domain::tour::value_objects::{CreateTourInput, UpdateTourInput};

pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tour {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub duration: i32,
    pub max_group_size: i32,
    pub difficulty: String,
    pub ratings_average: f64,
    pub ratings_quantity: i32,
    pub price: f64,
    pub price_discount: Option<f64>,
    pub summary: String,
    pub description: Option<String>,
    pub image_cover: String,
    pub images: Vec<String>,
    pub start_dates: Vec<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub secret_tour: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tour {
    pub fn new(input: CreateTourInput) -> Self {
        let (now, timestamp) = generate_timestamp();
        let slug = slugify(&input.name);

        Self {
            id: Uuid::new_v7(timestamp),
            name: input.name,
            slug,
            duration: input.duration,
            max_group_size: input.max_group_size,
            difficulty: input.difficulty,
            ratings_average: 4.5,
            ratings_quantity: 0,
            price: input.price,
            price_discount: input.price_discount,
            summary: input.summary,
            description: input.description,
            image_cover: input.image_cover,
            images: input.images,
            start_dates: input.start_dates,
            secret_tour: input.secret_tour,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, input: UpdateTourInput) {
        if let Some(name) = input.name {
            self.slug = slugify(&name);
            self.name = name;
        }
        if let Some(duration) = input.duration {
            self.duration = duration;
        }
        if let Some(max_group_size) = input.max_group_size {
            self.max_group_size = max_group_size;
        }
        if let Some(difficulty) = input.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if input.price_discount.is_some() {
            self.price_discount = input.price_discount;
        }
        if let Some(summary) = input.summary {
            self.summary = summary;
        }
        if input.description.is_some() {
            self.description = input.description;
        }
        if let Some(image_cover) = input.image_cover {
            self.image_cover = image_cover;
        }
        if let Some(images) = input.images {
            self.images = images;
        }
        if let Some(start_dates) = input.start_dates {
            self.start_dates = start_dates;
        }
        if let Some(secret_tour) = input.secret_tour {
            self.secret_tour = secret_tour;
        }
        self.updated_at = Utc::now();
    }
}

/// Per-difficulty aggregates backing the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TourStats {
    pub difficulty: String,
    pub num_tours: i64,
    pub avg_rating: Option<f64>,
    pub avg_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static pattern"));

/// Lowercases and collapses anything that is not alphanumeric into single
/// hyphens.
pub fn slugify(name: &str) -> String {
    SLUG_SEPARATORS
        .replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateTourInput {
        CreateTourInput {
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
    fn new_tour_gets_slug_and_rating_defaults() {
        let tour = Tour::new(input());
        assert_eq!(tour.slug, "the-forest-hiker");
        assert_eq!(tour.ratings_average, 4.5);
        assert_eq!(tour.ratings_quantity, 0);
    }

    #[test]
    fn renaming_regenerates_the_slug() {
        let mut tour = Tour::new(input());
        tour.update(UpdateTourInput {
            name: Some("The Sea Explorer".to_string()),
            ..Default::default()
        });
        assert_eq!(tour.name, "The Sea Explorer");
        assert_eq!(tour.slug, "the-sea-explorer");
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("  The   Snow! Adventurer's "), "the-snow-adventurer-s");
    }
}
