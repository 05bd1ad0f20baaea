use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    mailer::ports::MailerRepository,
    query::value_objects::RawQuery,
    tour::{
        entities::{Tour, TourStats},
        policies,
        ports::{TourRepository, TourService},
        value_objects::{CreateTourInput, UpdateTourInput},
    },
    user::ports::UserRepository,
};

impl<T, U, H, HC, M> TourService for Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    async fn get_tours(&self, params: RawQuery) -> Result<Vec<JsonValue>, CoreError> {
        self.tour_repository.fetch_tours(params).await
    }

    async fn get_tour(&self, tour_id: Uuid) -> Result<Tour, CoreError> {
        self.tour_repository
            .get_by_id(tour_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_tour(
        &self,
        _identity: Identity,
        input: CreateTourInput,
    ) -> Result<Tour, CoreError> {
        let tour = Tour::new(input);
        self.tour_repository.create(tour).await
    }

    async fn update_tour(
        &self,
        _identity: Identity,
        tour_id: Uuid,
        input: UpdateTourInput,
    ) -> Result<Tour, CoreError> {
        let mut tour = self
            .tour_repository
            .get_by_id(tour_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        tour.update(input);

        self.tour_repository.update(tour).await
    }

    async fn delete_tour(&self, identity: Identity, tour_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            policies::can_delete_tour(&identity),
            "tour deletion requires a staff role",
        )?;

        self.tour_repository.delete(tour_id).await
    }

    async fn get_tour_stats(&self) -> Result<Vec<TourStats>, CoreError> {
        self.tour_repository.stats().await
    }
}
