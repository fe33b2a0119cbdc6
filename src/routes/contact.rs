use std::fmt::Debug;

use actix_web::web;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use anyhow::Context;
use serde::Deserialize;

use crate::domain::ContactEmail;
use crate::domain::ContactSubmission;
use crate::email_client::EmailClient;
use crate::message::submission_html;
use crate::message::submission_subject;
use crate::message::submission_text;
use crate::routes::error_chain_fmt;

/// Raw request body. Every field is optional at this stage so that a missing
/// key and an empty string fail with the same reason -- a browser form can
/// produce either.
#[derive(Deserialize)]
pub struct BodyData {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

// validation is inherently not robust, because, in the worst case, it has to
// be performed at every callsite. in contrast, parsing transforms the
// unstructured body into `ContactSubmission` exactly once, which can then be
// passed around with confidence in its correctness.

impl TryFrom<BodyData> for ContactSubmission {
    type Error = String;
    fn try_from(value: BodyData) -> Result<Self, Self::Error> {
        // presence first; one reason covers all four fields
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            value.name.filter(|f| !f.is_empty()),
            value.email.filter(|f| !f.is_empty()),
            value.subject.filter(|f| !f.is_empty()),
            value.message.filter(|f| !f.is_empty()),
        ) else {
            return Err("All fields are required".to_owned());
        };

        // the parse detail is only useful in the logs; the caller gets the
        // fixed reason
        let email = ContactEmail::parse(email).map_err(|_| "Invalid email address".to_owned())?;

        Ok(ContactSubmission {
            name,
            email,
            subject,
            message,
        })
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        Ok(())
    }
}

impl ResponseError for ContactError {
    // supersedes `status_code`
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::ValidationError(reason) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": reason }))
            }
            // the cause chain stays in the logs; the caller only learns that
            // the relay failed
            Self::UnexpectedError(_) => HttpResponse::InternalServerError().json(
                serde_json::json!({ "error": "Failed to send email. Please try again later." }),
            ),
        }
    }
}

/// `POST /api/contact`
///
/// Validates one submission and relays it to the account inbox through the
/// mail provider. Stateless and safely reentrant: concurrent invocations
/// share nothing but the provider connection pool. A failed relay is terminal
/// for this request; the form offers a resubmit.
///
/// # Request example
///
/// ```sh
///     curl --json '{"name":"Ann","email":"ann@x.com","subject":"Hi","message":"Hello"}' \
///         http://127.0.0.1:8000/api/contact
/// ```
#[tracing::instrument(
    name = "Relaying contact form submission",
    skip(body, email_client),
    fields(
        // recorded once validation has succeeded
        visitor_email = tracing::field::Empty,
        subject = tracing::field::Empty,
    )
)]
pub async fn contact(
    body: web::Json<BodyData>,
    // inherited via App.app_data
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = body.0.try_into().map_err(ContactError::ValidationError)?;

    tracing::Span::current().record(
        "visitor_email",
        tracing::field::display(submission.email.as_ref()),
    );
    tracing::Span::current().record("subject", tracing::field::display(&submission.subject));

    send_submission_email(&email_client, &submission)
        .await
        .context("could not relay the submission to the mail provider")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Email sent successfully!" })))
}

/// Wrapper for `EmailClient.send_email`: composes both bodies and pins the
/// reply-to to the visitor's address
#[tracing::instrument(name = "Dispatching submission email", skip(email_client, submission))]
async fn send_submission_email(
    email_client: &EmailClient,
    submission: &ContactSubmission,
) -> Result<(), reqwest::Error> {
    email_client
        .send_email(
            &submission.email,
            &submission_subject(submission),
            &submission_html(submission),
            &submission_text(submission),
        )
        .await
}
