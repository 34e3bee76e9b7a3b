//! The request-my-resume flow: a form, two field validations, and a
//! fire-and-forget attachment send. The HTTP reply never waits on the mail
//! transport; the background task's failures end up in the log and, best
//! effort, in an error notice to the requestor.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use regex::Regex;
use serde::Deserialize;
use tera::Context;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::notify::{self, MailConfig, NotifierKind};
use crate::state::AppState;

/// Cookie carrying the confirmation message shown on the success page.
const SUCCESS_COOKIE: &str = "aboutme-200ok";

/// Single optional `-`/`_`/`.` separator in the local part, single-dot
/// domain. Deliberately narrow: multi-dot domains do not pass.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9]+[-_.]{0,1}[a-zA-Z0-9]*@[a-zA-Z0-9]+.[a-zA-Z0-9]+$";

/// Company names start with letters and may carry digits, spaces and the
/// usual punctuation of legal names; weeds out nuisance values.
const COMPANY_PATTERN: &str = r"^[a-zA-Z'-]+[\s]*[a-zA-Z0-9\s'-,&]*$";

#[derive(Debug, Deserialize)]
pub struct ResumeRequestForm {
    #[serde(rename = "reqemail")]
    pub email: String,
    #[serde(rename = "reqcompany")]
    pub company: String,
}

fn valid_email(addr: &str) -> bool {
    Regex::new(EMAIL_PATTERN)
        .expect("email pattern is a valid expression")
        .is_match(addr)
}

fn valid_company(name: &str) -> bool {
    Regex::new(COMPANY_PATTERN)
        .expect("company pattern is a valid expression")
        .is_match(name)
}

fn form_context(emailed: bool, invalid_email: bool, invalid_company: bool) -> Context {
    let mut ctx = Context::new();
    ctx.insert("emailed", &emailed);
    ctx.insert("invalid_email", &invalid_email);
    ctx.insert("invalid_company", &invalid_company);
    ctx
}

/// GET /notifications/email/myprofile
/// The page where a pdf copy of the resume can be requested over email.
pub async fn request_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.render("req-resume.html", &form_context(false, false, false))
}

/// POST /notifications/email/myprofile
///
/// Validates the requestor's address and company name; invalid fields
/// re-render the form with the offending inputs flagged and nothing is
/// sent. Valid input dispatches the attachment send on a detached task and
/// replies immediately — cookie plus redirect — regardless of how the send
/// eventually fares.
pub async fn dispatch_request(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ResumeRequestForm>,
) -> Result<Response, AppError> {
    let invalid_email = !valid_email(&form.email);
    let invalid_company = !valid_company(&form.company);
    if invalid_email || invalid_company {
        debug!(email = %form.email, company = %form.company, "rejected resume request form");
        let page = state.render(
            "req-resume.html",
            &form_context(false, invalid_email, invalid_company),
        )?;
        return Ok(page.into_response());
    }

    let config = &state.config;
    let notifier = notify::build_notifier(
        NotifierKind::Smtp,
        MailConfig {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            username: config.smtp_username.clone(),
            password: config.smtp_password.clone(),
        },
    )
    .await?;

    let sender = config.sender.clone();
    let recipient = form.email.clone();
    let resume_path = config.resume_path.clone();
    tokio::spawn(async move {
        let body = "Hi,<br>As requested I'm attaching my latest resume alongside.<br>Best regards,<br>Niranjan";
        if let Err(err) = notifier
            .send_with_attachment(
                &sender,
                &recipient,
                "Resume: Niranjan Awati",
                body,
                &resume_path,
            )
            .await
        {
            error!(recipient = %recipient, error = %err, "failed to send resume email");
            // The recipient address itself may be the problem; nothing more
            // to do than record the notice failing too.
            if let Err(err) = notifier.send_error_notice(&sender, &recipient).await {
                error!(recipient = %recipient, error = %err, "error sending the error notification");
            }
        }
    });

    let message = format!("Kindly check at {} for a pdf copy of the resume", form.email);
    let cookie = Cookie::build((SUCCESS_COOKIE, message))
        .max_age(time::Duration::hours(1))
        .path("/success")
        .domain(state.config.cookie_domain.clone())
        .secure(true)
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Redirect::permanent("/success")).into_response())
}

/// POST /success
/// Target of the post-dispatch redirect; shows the confirmation message
/// carried by the cookie. A missing cookie must not stop the page from
/// loading — the operation before the redirect already completed.
pub async fn render_success(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    let message = match jar.get(SUCCESS_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            debug!("no success message cookie on the request");
            String::new()
        }
    };

    let mut ctx = Context::new();
    ctx.insert("success_msg", &message);
    state.render("200OK.html", &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_names_accepted() {
        for name in [
            "Schumm-Conroy",
            "Gleason LLC",
            "Connelly, Rempel and Wolf",
            "Collier-O'Conner",
            "FDG Inc, India",
            "Satterfield, Lubowitz & Torphy",
            "Padberg and 2Sons",
        ] {
            assert!(valid_company(name), "pattern failed to verify {name}");
        }
    }

    #[test]
    fn test_company_names_rejected() {
        for name in [" ", "", "$%#$%", "_", "Schumm-Conroy %", "12313"] {
            assert!(!valid_company(name), "pattern failed to reject {name}");
        }
    }

    #[test]
    fn test_emails_accepted() {
        for addr in [
            "niranjan_awati@gmail.com",
            "kneerunjun@gmail.com",
            "niranjan.awati@gmail.com",
            "niranjan1_awati@gmail.com",
            "niranjan-awati@gmail.com",
            "niranjan@gmail.co1",
            "324343_awati@gmail.com",
            "niranjan_324343@gmail.com",
        ] {
            assert!(valid_email(addr), "pattern failed to verify {addr}");
        }
    }

    #[test]
    fn test_emails_rejected() {
        for addr in [
            "",
            " ",
            "@gmail.com",
            "-@gmail.com",
            "_@gmail.com",
            "niranjan__awati@gmail.com",
            "niranjan%awati@gmail.com",
            "niranjan@gmail.co.in",
        ] {
            assert!(!valid_email(addr), "pattern failed to reject {addr}");
        }
    }
}
