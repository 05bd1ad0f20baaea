use crate::domain::{
    authentication::value_objects::{AuthenticatedUser, Identity, SignUpInput},
    common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    fn sign_up(
        &self,
        input: SignUpInput,
    ) -> impl Future<Output = Result<AuthenticatedUser, CoreError>> + Send;

    fn login(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<AuthenticatedUser, CoreError>> + Send;

    /// Verifies a bearer token and resolves it to a live identity.
    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn forgot_password(&self, email: String) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn reset_password(
        &self,
        token: String,
        new_password: String,
    ) -> impl Future<Output = Result<AuthenticatedUser, CoreError>> + Send;

    fn update_password(
        &self,
        identity: Identity,
        current_password: String,
        new_password: String,
    ) -> impl Future<Output = Result<AuthenticatedUser, CoreError>> + Send;
}
