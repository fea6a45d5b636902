/// Template-based email delivery for contact and adoption requests
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::EmailConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub enum Mailer {
    /// Deliver through the hosted email API
    Hosted(EmailClient),
    /// Log the message instead of sending it
    DryRun,
}

#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    config: Arc<EmailConfig>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

impl Mailer {
    pub fn from_config(config: Option<&EmailConfig>, http: reqwest::Client) -> Self {
        match config {
            Some(config) => Mailer::Hosted(EmailClient {
                http,
                config: Arc::new(config.clone()),
            }),
            None => Mailer::DryRun,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Mailer::DryRun)
    }

    /// Deliver one templated message
    pub async fn send(&self, params: BTreeMap<String, String>) -> Result<()> {
        match self {
            Mailer::Hosted(client) => client.send(&params).await,
            Mailer::DryRun => {
                tracing::info!(?params, "email delivery not configured; message logged only");
                Ok(())
            }
        }
    }
}

impl EmailClient {
    async fn send(&self, params: &BTreeMap<String, String>) -> Result<()> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&SendRequest {
                service_id: &self.config.service_id,
                template_id: &self.config.template_id,
                user_id: &self.config.public_key,
                template_params: params,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::from_response_body(status.as_u16(), &body));
        }

        tracing::info!(template = %self.config.template_id, "email sent");
        Ok(())
    }
}
