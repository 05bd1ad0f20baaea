use crate::domain::common::{WayfarerConfig, services::Service};
use crate::infrastructure::{
    crypto::Argon2HasherRepository,
    db::postgres::{Postgres, PostgresConfig},
    health::PostgresHealthCheckRepository,
    mailer::HttpMailerRepository,
    tour::PostgresTourRepository,
    user::PostgresUserRepository,
};

/// The fully wired service aggregate used by the api crate.
pub type WayfarerService = Service<
    PostgresTourRepository,
    PostgresUserRepository,
    Argon2HasherRepository,
    PostgresHealthCheckRepository,
    HttpMailerRepository,
>;

pub async fn create_service(config: WayfarerConfig) -> Result<WayfarerService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresTourRepository::new(postgres.get_db()),
        PostgresUserRepository::new(postgres.get_db()),
        Argon2HasherRepository::new(),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        HttpMailerRepository::new(config.mailer.clone()),
        config,
    ))
}
