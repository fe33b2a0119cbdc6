use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use secrecy::Secret;

use crate::domain::ContactEmail;

/// Client for the mail provider's HTTP API.
///
/// Establishing a HTTP connection is expensive, so if multiple requests are
/// to be sent to the same server, the connection should be reused. This is
/// done by keeping `Client` at the top level (App) and extracting it from the
/// App via `web::Data`.
pub struct EmailClient {
    http_client: Client,
    base_url: String,

    /// The account inbox. Submissions are sent from -and- to this address;
    /// the visitor's address only ever appears in the reply-to header.
    sender: ContactEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ContactEmail,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }

    /// Relay one composed message to the provider. `reply_to` is the
    /// visitor's address, so the recipient can respond directly.
    ///
    /// There are no retries: the caller treats any failure here as terminal
    /// for its request.
    pub async fn send_email(
        &self,
        reply_to: &ContactEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: self.sender.as_ref(),
            reply_to: reply_to.as_ref(),
            subject,
            html_body: html_content,
            text_body: text_content,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            // a provider-side rejection (4xx/5xx) is as terminal as a network
            // failure
            .error_for_status()?;
        Ok(())
    }
}

/// Lifetimes avoid cloning the field strings into the request body
#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
