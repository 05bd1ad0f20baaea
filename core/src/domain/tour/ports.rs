use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    query::value_objects::RawQuery,
    tour::{
        entities::{Tour, TourStats},
        value_objects::{CreateTourInput, UpdateTourInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait TourService: Send + Sync {
    fn get_tours(
        &self,
        params: RawQuery,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_tour(&self, tour_id: Uuid) -> impl Future<Output = Result<Tour, CoreError>> + Send;

    fn create_tour(
        &self,
        identity: Identity,
        input: CreateTourInput,
    ) -> impl Future<Output = Result<Tour, CoreError>> + Send;

    fn update_tour(
        &self,
        identity: Identity,
        tour_id: Uuid,
        input: UpdateTourInput,
    ) -> impl Future<Output = Result<Tour, CoreError>> + Send;

    fn delete_tour(
        &self,
        identity: Identity,
        tour_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_tour_stats(&self) -> impl Future<Output = Result<Vec<TourStats>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TourRepository: Send + Sync {
    /// Runs the full translator pipeline over the tours collection and
    /// executes it. Projection is caller-controlled, so rows come back as
    /// loose JSON documents rather than typed models.
    fn fetch_tours(
        &self,
        params: RawQuery,
    ) -> impl Future<Output = Result<Vec<JsonValue>, CoreError>> + Send;

    fn get_by_id(
        &self,
        tour_id: Uuid,
    ) -> impl Future<Output = Result<Option<Tour>, CoreError>> + Send;

    fn create(&self, tour: Tour) -> impl Future<Output = Result<Tour, CoreError>> + Send;

    fn update(&self, tour: Tour) -> impl Future<Output = Result<Tour, CoreError>> + Send;

    fn delete(&self, tour_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn stats(&self) -> impl Future<Output = Result<Vec<TourStats>, CoreError>> + Send;
}
