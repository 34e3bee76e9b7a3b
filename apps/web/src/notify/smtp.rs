//! SMTP-backed notifier. Dials a fresh transport per send so each operation
//! carries its own timeout, the way the underlying submission flow expects.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use super::{attachment_content_type, html_message, parse_mailbox, MailConfig, Notifier};
use crate::errors::AppError;

/// Transport timeout for plain messages and error notices.
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(10);
/// Transport timeout when an attachment rides along; large payloads on slow
/// uplinks take a while.
const ATTACHMENT_TIMEOUT: Duration = Duration::from_secs(300);

const ERR_NOTICE_SUBJECT: &str = "Error in sending email message";
const ERR_NOTICE_BODY: &str =
    "We were trying to send a message that failed. Kindly check with the admin for missed notifications";

pub struct SmtpNotifier {
    config: MailConfig,
}

impl SmtpNotifier {
    /// Creates the notifier and verifies the account with a connection
    /// handshake before first use.
    pub async fn connect(config: MailConfig) -> Result<Self, AppError> {
        let notifier = Self { config };
        let transport = notifier.transport(MESSAGE_TIMEOUT)?;
        match transport.test_connection().await {
            Ok(true) => {
                debug!(host = %notifier.config.host, "smtp handshake ok");
                Ok(notifier)
            }
            Ok(false) => Err(AppError::Gateway(
                "smtp server refused the connection handshake".to_string(),
            )),
            Err(e) => Err(AppError::Gateway(format!(
                "failed to reach smtp server: {e}"
            ))),
        }
    }

    fn transport(&self, timeout: Duration) -> Result<AsyncSmtpTransport<Tokio1Executor>, AppError> {
        let relay = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
            .map_err(|e| AppError::Mail(format!("invalid smtp relay '{}': {e}", self.config.host)))?;
        Ok(relay
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .timeout(Some(timeout))
            .build())
    }

    async fn dial_and_send(&self, message: Message, timeout: Duration) -> Result<(), AppError> {
        self.transport(timeout)?
            .send(message)
            .await
            .map_err(|e| AppError::Mail(format!("failed to send message: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_message(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), AppError> {
        let message = html_message(from, to, subject, body)?;
        self.dial_and_send(message, MESSAGE_TIMEOUT).await
    }

    async fn send_error_notice(&self, from: &str, to: &str) -> Result<(), AppError> {
        let message = html_message(from, to, ERR_NOTICE_SUBJECT, ERR_NOTICE_BODY)?;
        self.dial_and_send(message, MESSAGE_TIMEOUT).await
    }

    async fn send_with_attachment(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
        file_path: &str,
    ) -> Result<(), AppError> {
        let content = tokio::fs::read(file_path)
            .await
            .map_err(|e| AppError::Mail(format!("cannot read attachment '{file_path}': {e}")))?;
        let filename = std::path::Path::new(file_path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("attachment")
            .to_string();

        let message = Message::builder()
            .from(parse_mailbox(from)?)
            .to(parse_mailbox(to)?)
            .subject(subject)
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        Attachment::new(filename).body(content, attachment_content_type(file_path)),
                    ),
            )
            .map_err(|e| AppError::Mail(format!("failed to assemble message: {e}")))?;

        self.dial_and_send(message, ATTACHMENT_TIMEOUT).await
    }
}
