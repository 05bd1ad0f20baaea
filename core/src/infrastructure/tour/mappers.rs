use chrono::{TimeZone, Utc};

use crate::domain::tour::entities::Tour;
use crate::entity::tours::Model as TourModel;

impl From<TourModel> for Tour {
    fn from(model: TourModel) -> Self {
        let images = serde_json::from_value(model.images).unwrap_or_default();
        let start_dates = serde_json::from_value(model.start_dates).unwrap_or_default();

        Tour {
            id: model.id,
            name: model.name,
            slug: model.slug,
            duration: model.duration,
            max_group_size: model.max_group_size,
            difficulty: model.difficulty,
            ratings_average: model.ratings_average,
            ratings_quantity: model.ratings_quantity,
            price: model.price,
            price_discount: model.price_discount,
            summary: model.summary,
            description: model.description,
            image_cover: model.image_cover,
            images,
            start_dates,
            secret_tour: model.secret_tour,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}
