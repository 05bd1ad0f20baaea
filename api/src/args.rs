use clap::Parser;
use wayfarer_core::domain::common::{
    AuthConfig, DatabaseConfig, MailerConfig, WayfarerConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "wayfarer-api", about = "Wayfarer tour booking API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub mailer: MailerArgs,

    /// Emit logs as json lines instead of human-readable text.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix every route is mounted under.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Externally reachable base URL, used in password-reset emails.
    #[arg(long, env = "PUBLIC_URL", default_value = "http://localhost:3000")]
    pub public_url: String,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "wayfarer")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "wayfarer")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "wayfarer")]
    pub database_name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(long, env = "JWT_EXPIRATION_DAYS", default_value_t = 90)]
    pub jwt_expiration_days: i64,
}

#[derive(Debug, Clone, Parser)]
pub struct MailerArgs {
    #[arg(long, env = "MAILER_ENDPOINT", default_value = "http://localhost:8025/api/send")]
    pub mailer_endpoint: String,

    #[arg(long, env = "MAILER_API_TOKEN", default_value = "")]
    pub mailer_api_token: String,

    #[arg(long, env = "MAILER_FROM", default_value = "Wayfarer <no-reply@wayfarer.io>")]
    pub mailer_from: String,
}

impl From<Args> for WayfarerConfig {
    fn from(args: Args) -> Self {
        WayfarerConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expiration_days: args.auth.jwt_expiration_days,
            },
            mailer: MailerConfig {
                endpoint: args.mailer.mailer_endpoint,
                api_token: args.mailer.mailer_api_token,
                from: args.mailer.mailer_from,
            },
            public_url: args.server.public_url,
        }
    }
}
