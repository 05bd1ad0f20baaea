use crate::domain::{common::entities::app_errors::CoreError, mailer::entities::EmailMessage};

#[cfg_attr(test, mockall::automock)]
pub trait MailerRepository: Send + Sync {
    fn send(&self, message: EmailMessage) -> impl Future<Output = Result<(), CoreError>> + Send;
}
