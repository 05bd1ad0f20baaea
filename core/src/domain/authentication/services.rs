use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use tracing::{error, info};

use crate::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthenticatedUser, Identity, SignUpInput},
    },
    common::{
        entities::app_errors::CoreError, generate_random_string, services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::services::{sign_token, verify_token},
    mailer::{entities::EmailMessage, ports::MailerRepository},
    tour::ports::TourRepository,
    user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
};

const RESET_TOKEN_LENGTH: usize = 32;
const RESET_TOKEN_VALIDITY_MINUTES: i64 = 10;

/// Reset tokens are stored hashed so a database leak does not expose
/// usable tokens.
pub fn hash_reset_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

impl<T, U, H, HC, M> Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    fn issue_token(&self, user: User) -> Result<AuthenticatedUser, CoreError> {
        let token = sign_token(
            &self.config.auth.jwt_secret,
            user.id,
            self.config.auth.jwt_expiration_days,
        )?;

        Ok(AuthenticatedUser { token, user })
    }
}

impl<T, U, H, HC, M> AuthService for Service<T, U, H, HC, M>
where
    T: TourRepository,
    U: UserRepository,
    H: HasherRepository,
    HC: HealthCheckRepository,
    M: MailerRepository,
{
    async fn sign_up(&self, input: SignUpInput) -> Result<AuthenticatedUser, CoreError> {
        let password_hash = self.hasher_repository.hash_password(&input.password).await?;

        let user = User::new(CreateUserRequest {
            name: input.name,
            email: input.email,
            photo_url: input.photo_url,
            password_hash,
        });

        let user = self.user_repository.create(user).await?;
        info!(user_id = %user.id, "new user signed up");

        self.issue_token(user)
    }

    async fn login(&self, email: String, password: String) -> Result<AuthenticatedUser, CoreError> {
        let user = self
            .user_repository
            .get_by_email(email)
            .await?
            .filter(|user| user.active)
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher_repository
            .verify_password(&password, &user.password_hash)
            .await?;

        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        self.issue_token(user)
    }

    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let claim = verify_token(&self.config.auth.jwt_secret, &token)?;

        let user = self
            .user_repository
            .get_by_id(claim.sub)
            .await?
            .filter(|user| user.active)
            .ok_or_else(|| {
                CoreError::Unauthorized("the user belonging to this token no longer exists".into())
            })?;

        if user.changed_password_after(claim.iat) {
            return Err(CoreError::Unauthorized(
                "password changed after this token was issued, please log in again".into(),
            ));
        }

        Ok(Identity::User(user))
    }

    async fn forgot_password(&self, email: String) -> Result<(), CoreError> {
        let mut user = self
            .user_repository
            .get_by_email(email)
            .await?
            .ok_or(CoreError::NotFound)?;

        let token = generate_random_string(RESET_TOKEN_LENGTH);
        let now = Utc::now();

        user.password_reset_token = Some(hash_reset_token(&token));
        user.password_reset_expires =
            Some(now + Duration::minutes(RESET_TOKEN_VALIDITY_MINUTES));
        let mut user = self.user_repository.update(user).await?;

        let reset_url = format!(
            "{}/api/v1/users/reset-password/{}",
            self.config.public_url, token
        );
        let message = EmailMessage {
            to: user.email.clone(),
            subject: format!(
                "Your password reset token (valid for {RESET_TOKEN_VALIDITY_MINUTES} minutes)"
            ),
            body: format!(
                "Forgot your password? Submit a request with your new password to {reset_url}.\n\
                 If you didn't forget your password, please ignore this email."
            ),
        };

        if let Err(err) = self.mailer_repository.send(message).await {
            error!(user_id = %user.id, %err, "password reset email failed, clearing token");
            user.password_reset_token = None;
            user.password_reset_expires = None;
            self.user_repository.update(user).await?;
            return Err(CoreError::EmailDelivery);
        }

        Ok(())
    }

    async fn reset_password(
        &self,
        token: String,
        new_password: String,
    ) -> Result<AuthenticatedUser, CoreError> {
        let now = Utc::now();
        let mut user = self
            .user_repository
            .get_by_reset_token(hash_reset_token(&token), now)
            .await?
            .ok_or(CoreError::ResetTokenInvalid)?;

        user.password_hash = self.hasher_repository.hash_password(&new_password).await?;
        user.password_reset_token = None;
        user.password_reset_expires = None;
        user.password_changed_at = Some(now);

        let user = self.user_repository.update(user).await?;
        self.issue_token(user)
    }

    async fn update_password(
        &self,
        identity: Identity,
        current_password: String,
        new_password: String,
    ) -> Result<AuthenticatedUser, CoreError> {
        let Identity::User(mut user) = identity;

        let verified = self
            .hasher_repository
            .verify_password(&current_password, &user.password_hash)
            .await?;

        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        user.password_hash = self.hasher_repository.hash_password(&new_password).await?;
        user.password_changed_at = Some(Utc::now());

        let user = self.user_repository.update(user).await?;
        self.issue_token(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::{
        common::{AuthConfig, DatabaseConfig, MailerConfig, WayfarerConfig},
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        mailer::ports::MockMailerRepository,
        tour::ports::MockTourRepository,
        user::ports::MockUserRepository,
    };

    type TestService = Service<
        MockTourRepository,
        MockUserRepository,
        MockHasherRepository,
        MockHealthCheckRepository,
        MockMailerRepository,
    >;

    fn config() -> WayfarerConfig {
        WayfarerConfig {
            database: DatabaseConfig {
                host: "localhost".into(),
                port: 5432,
                username: "wayfarer".into(),
                password: "wayfarer".into(),
                name: "wayfarer".into(),
            },
            auth: AuthConfig {
                jwt_secret: "test-secret".into(),
                jwt_expiration_days: 90,
            },
            mailer: MailerConfig {
                endpoint: "http://localhost:8025".into(),
                api_token: "token".into(),
                from: "admin@wayfarer.io".into(),
            },
            public_url: "http://localhost:3000".into(),
        }
    }

    fn service(
        users: MockUserRepository,
        hasher: MockHasherRepository,
        mailer: MockMailerRepository,
    ) -> TestService {
        Service::new(
            MockTourRepository::new(),
            users,
            hasher,
            MockHealthCheckRepository::new(),
            mailer,
            config(),
        )
    }

    #[tokio::test]
    async fn login_rejects_unknown_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .with(eq("nobody@example.com".to_string()))
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(users, MockHasherRepository::new(), MockMailerRepository::new());
        let result = service
            .login("nobody@example.com".into(), "pass1234".into())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_rejects_deactivated_accounts() {
        let mut deactivated = User::fixture();
        deactivated.active = false;

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_email()
            .returning(move |_| {
                let user = deactivated.clone();
                Box::pin(async move { Ok(Some(user)) })
            });

        let service = service(users, MockHasherRepository::new(), MockMailerRepository::new());
        let result = service
            .login("test@example.com".into(), "pass1234".into())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let user = User::fixture();

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let service = service(users, hasher, MockMailerRepository::new());
        let result = service
            .login("test@example.com".into(), "wrong".into())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_issues_a_token_on_success() {
        let user = User::fixture();
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let service = service(users, hasher, MockMailerRepository::new());
        let authenticated = service
            .login("test@example.com".into(), "pass1234".into())
            .await
            .unwrap();

        assert_eq!(authenticated.user.id, user_id);
        assert!(!authenticated.token.is_empty());
    }

    #[tokio::test]
    async fn authenticate_resolves_a_fresh_token() {
        let user = User::fixture();
        let user_id = user.id;
        let token = sign_token("test-secret", user_id, 90).unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .with(eq(user_id))
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });

        let service = service(users, MockHasherRepository::new(), MockMailerRepository::new());
        let identity = service.authenticate(token).await.unwrap();

        assert_eq!(identity.id(), user_id);
    }

    #[tokio::test]
    async fn authenticate_rejects_tokens_issued_before_a_password_change() {
        let mut user = User::fixture();
        let token = sign_token("test-secret", user.id, 90).unwrap();
        user.password_changed_at = Some(Utc::now() + Duration::minutes(5));

        let mut users = MockUserRepository::new();
        users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });

        let service = service(users, MockHasherRepository::new(), MockMailerRepository::new());
        let result = service.authenticate(token).await;

        assert!(matches!(result, Err(CoreError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn authenticate_rejects_tokens_for_deleted_users() {
        let token = sign_token("test-secret", uuid::Uuid::now_v7(), 90).unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(users, MockHasherRepository::new(), MockMailerRepository::new());
        let result = service.authenticate(token).await;

        assert!(matches!(result, Err(CoreError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn forgot_password_stores_a_hashed_token_and_sends_mail() {
        let user = User::fixture();

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        users
            .expect_update()
            .withf(|user| {
                user.password_reset_token.is_some() && user.password_reset_expires.is_some()
            })
            .returning(|user| Box::pin(async move { Ok(user) }));

        let mut mailer = MockMailerRepository::new();
        mailer
            .expect_send()
            .withf(|message| message.to == "test@example.com")
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = service(users, MockHasherRepository::new(), mailer);
        service
            .forgot_password("test@example.com".into())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn forgot_password_clears_the_token_when_mail_fails() {
        let user = User::fixture();

        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        users
            .expect_update()
            .withf(|user| user.password_reset_token.is_some())
            .times(1)
            .returning(|user| Box::pin(async move { Ok(user) }));
        users
            .expect_update()
            .withf(|user| user.password_reset_token.is_none())
            .times(1)
            .returning(|user| Box::pin(async move { Ok(user) }));

        let mut mailer = MockMailerRepository::new();
        mailer
            .expect_send()
            .returning(|_| Box::pin(async { Err(CoreError::ExternalServiceError("down".into())) }));

        let service = service(users, MockHasherRepository::new(), mailer);
        let result = service.forgot_password("test@example.com".into()).await;

        assert_eq!(result.unwrap_err(), CoreError::EmailDelivery);
    }

    #[tokio::test]
    async fn reset_password_rejects_unknown_tokens() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_by_reset_token()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let service = service(users, MockHasherRepository::new(), MockMailerRepository::new());
        let result = service
            .reset_password("bogus".into(), "newpass123".into())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::ResetTokenInvalid);
    }

    #[tokio::test]
    async fn reset_password_rehashes_and_stamps_the_change() {
        let mut user = User::fixture();
        user.password_reset_token = Some(hash_reset_token("plain-token"));
        user.password_reset_expires = Some(Utc::now() + Duration::minutes(5));

        let mut users = MockUserRepository::new();
        users.expect_get_by_reset_token().returning(move |_, _| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        users
            .expect_update()
            .withf(|user| {
                user.password_hash == "$argon2id$new"
                    && user.password_reset_token.is_none()
                    && user.password_changed_at.is_some()
            })
            .returning(|user| Box::pin(async move { Ok(user) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("$argon2id$new".to_string()) }));

        let service = service(users, hasher, MockMailerRepository::new());
        let authenticated = service
            .reset_password("plain-token".into(), "newpass123".into())
            .await
            .unwrap();

        assert!(!authenticated.token.is_empty());
    }

    #[tokio::test]
    async fn update_password_requires_the_current_one() {
        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let service = service(MockUserRepository::new(), hasher, MockMailerRepository::new());
        let result = service
            .update_password(
                Identity::User(User::fixture()),
                "wrong".into(),
                "newpass123".into(),
            )
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InvalidCredentials);
    }

    #[test]
    fn reset_token_hash_is_deterministic_hex() {
        let digest = hash_reset_token("abc");
        assert_eq!(digest, hash_reset_token("abc"));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
