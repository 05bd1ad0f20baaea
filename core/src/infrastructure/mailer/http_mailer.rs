use reqwest::Client;
use serde::Serialize;
use tracing::error;

use crate::domain::common::MailerConfig;
use crate::domain::{
    common::entities::app_errors::CoreError,
    mailer::{entities::EmailMessage, ports::MailerRepository},
};

/// Delivers mail through an HTTP transactional-email endpoint.
#[derive(Debug, Clone)]
pub struct HttpMailerRepository {
    config: MailerConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpMailerRepository {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

impl MailerRepository for HttpMailerRepository {
    async fn send(&self, message: EmailMessage) -> Result<(), CoreError> {
        let request = SendMailRequest {
            from: &self.config.from,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("mail API request failed: {e}");
                CoreError::ExternalServiceError(format!("mail API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("mail API error: {status} - {error_text}");
            return Err(CoreError::ExternalServiceError(format!(
                "mail API returned error: {status} - {error_text}"
            )));
        }

        Ok(())
    }
}
