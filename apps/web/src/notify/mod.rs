#![allow(dead_code)]

//! Transactional email — notifications sent from the server on behalf of
//! the site owner: plain messages, error notices, and messages carrying a
//! file attachment.
//!
//! `Notifier` is the seam; `SmtpNotifier` is the one implementation,
//! selected through [`build_notifier`] keyed by [`NotifierKind`].

pub mod smtp;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::Message;

use crate::errors::AppError;
use self::smtp::SmtpNotifier;

/// Connection parameters for a mail account. `password` is the app secret
/// when the account uses 2FA.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Capability set for sending notification mail.
///
/// The From address is only honored by the transport when it matches the
/// authenticated account; callers must not assume sender spoofing.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a text/html message with a custom subject and body.
    async fn send_message(&self, from: &str, to: &str, subject: &str, body: &str)
        -> Result<(), AppError>;

    /// Sends a fixed notice telling the recipient that a prior send failed.
    async fn send_error_notice(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Sends a text/html message with the file at `file_path` attached.
    /// Runs with a much longer transport timeout for the larger payload.
    async fn send_with_attachment(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
        file_path: &str,
    ) -> Result<(), AppError>;
}

/// Available notifier backends.
#[derive(Debug, Clone, Copy)]
pub enum NotifierKind {
    Smtp,
}

/// Builds a notifier of the requested kind and performs its connection
/// handshake; a failed handshake surfaces as the gateway error.
pub async fn build_notifier(
    kind: NotifierKind,
    config: MailConfig,
) -> Result<Arc<dyn Notifier>, AppError> {
    match kind {
        NotifierKind::Smtp => Ok(Arc::new(SmtpNotifier::connect(config).await?)),
    }
}

fn parse_mailbox(addr: &str) -> Result<Mailbox, AppError> {
    addr.parse()
        .map_err(|_| AppError::Mail(format!("'{addr}' is not a valid mail address")))
}

/// Assembles a plain text/html message.
pub(crate) fn html_message(
    from: &str,
    to: &str,
    subject: &str,
    body: &str,
) -> Result<Message, AppError> {
    Message::builder()
        .from(parse_mailbox(from)?)
        .to(parse_mailbox(to)?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(body.to_string())
        .map_err(|e| AppError::Mail(format!("failed to assemble message: {e}")))
}

/// Content type for an attachment, inferred from the file extension.
pub(crate) fn attachment_content_type(file_path: &str) -> ContentType {
    let mime = match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    };
    ContentType::parse(mime).unwrap_or(ContentType::TEXT_PLAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_message_with_valid_addresses() {
        let msg = html_message(
            "awatiniranjan@gmail.com",
            "kneerunjun@gmail.com",
            "Test email",
            "Hi there<br>Best regards,<br>Niranjan",
        );
        assert!(msg.is_ok());
    }

    #[test]
    fn test_html_message_rejects_malformed_sender() {
        assert!(html_message("NiranjanAwati", "kneerunjun@gmail.com", "s", "b").is_err());
    }

    #[test]
    fn test_html_message_rejects_malformed_recipient() {
        assert!(html_message("awatiniranjan@gmail.com", "not an address", "s", "b").is_err());
    }

    #[test]
    fn test_attachment_content_type_for_pdf() {
        let ct = attachment_content_type("/var/aboutme/NiranjanAwati.pdf");
        assert_eq!(ct, ContentType::parse("application/pdf").unwrap());
    }

    #[test]
    fn test_attachment_content_type_fallback() {
        let ct = attachment_content_type("/var/aboutme/resume.bin");
        assert_eq!(ct, ContentType::parse("application/octet-stream").unwrap());
    }
}
