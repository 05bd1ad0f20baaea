use std::sync::Arc;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, Order, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::value_objects::RawQuery,
    tour::{
        entities::{Tour, TourStats},
        ports::TourRepository,
    },
};
use crate::entity::tours::{
    ActiveModel as TourActiveModel, Column as TourColumn, Entity as TourEntity,
};
use crate::infrastructure::{map_db_err, query::features::ApiFeatures};

/// Fields the free-text `search` parameter matches against.
const SEARCH_FIELDS: [&str; 2] = ["name", "summary"];

#[derive(Debug, Clone)]
pub struct PostgresTourRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresTourRepository {
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

fn to_active_model(tour: Tour) -> TourActiveModel {
    TourActiveModel {
        id: Set(tour.id),
        name: Set(tour.name),
        slug: Set(tour.slug),
        duration: Set(tour.duration),
        max_group_size: Set(tour.max_group_size),
        difficulty: Set(tour.difficulty),
        ratings_average: Set(tour.ratings_average),
        ratings_quantity: Set(tour.ratings_quantity),
        price: Set(tour.price),
        price_discount: Set(tour.price_discount),
        summary: Set(tour.summary),
        description: Set(tour.description),
        image_cover: Set(tour.image_cover),
        images: Set(serde_json::json!(tour.images)),
        start_dates: Set(serde_json::json!(tour.start_dates)),
        secret_tour: Set(tour.secret_tour),
        created_at: Set(tour.created_at.naive_utc()),
        updated_at: Set(tour.updated_at.naive_utc()),
        revision: sea_orm::ActiveValue::NotSet,
    }
}

#[derive(Debug, FromQueryResult)]
struct TourStatsRow {
    difficulty: String,
    num_tours: i64,
    avg_rating: Option<f64>,
    avg_price: Option<f64>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl TourRepository for PostgresTourRepository {
    async fn fetch_tours(&self, params: RawQuery) -> Result<Vec<JsonValue>, CoreError> {
        let base = TourEntity::find().filter(TourColumn::SecretTour.eq(false));
        let features = ApiFeatures::new(base, params)
            .filter()
            .sort()
            .limit_fields()
            .paginate()
            .search(&SEARCH_FIELDS);

        if features.page_was_requested() {
            let total = features
                .count(self.db.as_ref())
                .await
                .map_err(|e| map_db_err("failed to count tours", e))?;
            if features.skip() >= total {
                return Err(CoreError::PageNotFound);
            }
        }

        features
            .into_inner()
            .into_json()
            .all(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to fetch tours", e))
    }

    async fn get_by_id(&self, tour_id: Uuid) -> Result<Option<Tour>, CoreError> {
        let tour = TourEntity::find_by_id(tour_id)
            .filter(TourColumn::SecretTour.eq(false))
            .one(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to get tour by id", e))?
            .map(Tour::from);

        Ok(tour)
    }

    async fn create(&self, tour: Tour) -> Result<Tour, CoreError> {
        TourEntity::insert(to_active_model(tour))
            .exec_with_returning(self.db.as_ref())
            .await
            .map(Tour::from)
            .map_err(|e| map_db_err("failed to create tour", e))
    }

    async fn update(&self, tour: Tour) -> Result<Tour, CoreError> {
        let mut model = to_active_model(tour);
        model.updated_at = Set(Utc::now().naive_utc());

        TourEntity::update(model)
            .exec(self.db.as_ref())
            .await
            .map(Tour::from)
            .map_err(|e| map_db_err("failed to update tour", e))
    }

    async fn delete(&self, tour_id: Uuid) -> Result<(), CoreError> {
        let result = TourEntity::delete_by_id(tour_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to delete tour", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    /// Per-difficulty aggregates over well-rated public tours, cheapest
    /// difficulty tier first.
    async fn stats(&self) -> Result<Vec<TourStats>, CoreError> {
        let rows = TourEntity::find()
            .select_only()
            .column(TourColumn::Difficulty)
            .column_as(Expr::col(TourColumn::Id).count(), "num_tours")
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col(TourColumn::RatingsAverage))),
                "avg_rating",
            )
            .column_as(
                SimpleExpr::from(Func::avg(Expr::col(TourColumn::Price))),
                "avg_price",
            )
            .column_as(Expr::col(TourColumn::Price).min(), "min_price")
            .column_as(Expr::col(TourColumn::Price).max(), "max_price")
            .filter(TourColumn::SecretTour.eq(false))
            .filter(TourColumn::RatingsAverage.gte(4.5))
            .group_by(TourColumn::Difficulty)
            .order_by(
                SimpleExpr::from(Expr::col(Alias::new("avg_price"))),
                Order::Asc,
            )
            .into_model::<TourStatsRow>()
            .all(self.db.as_ref())
            .await
            .map_err(|e| map_db_err("failed to aggregate tour stats", e))?;

        Ok(rows
            .into_iter()
            .map(|row| TourStats {
                difficulty: row.difficulty,
                num_tours: row.num_tours,
                avg_rating: row.avg_rating,
                avg_price: row.avg_price,
                min_price: row.min_price,
                max_price: row.max_price,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    use super::*;

    fn count_result(total: i64) -> Vec<BTreeMap<&'static str, Value>> {
        vec![BTreeMap::from([("num_items", Value::BigInt(Some(total)))])]
    }

    #[tokio::test]
    async fn explicit_page_past_the_result_set_is_rejected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([count_result(3)])
            .into_connection();
        let repository = PostgresTourRepository::new(db);

        let mut params = RawQuery::new();
        params.insert("page", "4");
        params.insert("limit", "2");

        // skip = 6, only 3 matching rows
        let result = repository.fetch_tours(params).await;
        assert_eq!(result, Err(CoreError::PageNotFound));
    }

    #[tokio::test]
    async fn stats_map_aggregate_rows_per_difficulty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([
                ("difficulty", Value::from("easy")),
                ("num_tours", Value::BigInt(Some(2))),
                ("avg_rating", Value::Double(Some(4.7))),
                ("avg_price", Value::Double(Some(400.0))),
                ("min_price", Value::Double(Some(300.0))),
                ("max_price", Value::Double(Some(500.0))),
            ])]])
            .into_connection();
        let repository = PostgresTourRepository::new(db);

        let stats = repository.stats().await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].difficulty, "easy");
        assert_eq!(stats[0].num_tours, 2);
        assert_eq!(stats[0].avg_price, Some(400.0));
    }
}
