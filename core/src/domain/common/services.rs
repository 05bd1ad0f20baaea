use crate::domain::{
    common::WayfarerConfig, crypto::ports::HasherRepository, health::ports::HealthCheckRepository,
    mailer::ports::MailerRepository, tour::ports::TourRepository, user::ports::UserRepository,
};

/// Aggregate service over the application's ports. The domain service
/// traits (`TourService`, `UserService`, `AuthService`, ...) are each
/// implemented for this type in their own module.
#[derive(Debug, Clone)]
pub struct Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    pub tour_repository: T,
    pub user_repository: U,
    pub hasher_repository: H,
    pub health_check_repository: HC,
    pub mailer_repository: M,
    pub config: WayfarerConfig,
}

impl<T, U, H, HC, M> Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    pub fn new(
        tour_repository: T,
        user_repository: U,
        hasher_repository: H,
        health_check_repository: HC,
        mailer_repository: M,
        config: WayfarerConfig,
    ) -> Self {
        Self {
            tour_repository,
            user_repository,
            hasher_repository,
            health_check_repository,
            mailer_repository,
            config,
        }
    }
}
