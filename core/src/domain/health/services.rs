use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    mailer::ports::MailerRepository,
    tour::ports::TourRepository,
    user::ports::UserRepository,
};

impl<T, U, H, HC, M> HealthCheckService for Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
