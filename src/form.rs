//! The submission form: the client half of the contact flow. Gathers the four
//! fields, validates cheaply before incurring network cost, submits once, and
//! reflects exactly one of four states for the shell to paint.

use std::time::Duration;

use serde::Serialize;

/// How long the success banner stays up before the form reverts to idle on
/// its own
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Shown when submit is pressed with any field blank; no request is made in
/// that case
pub const INCOMPLETE_FIELDS: &str = "Please fill in all fields";

/// Shown when the request never completed, or the response could not be
/// parsed
pub const NETWORK_ERROR: &str = "Network error. Please try again later.";

/// Fallback when a failure response carries no error text of its own
const SUBMIT_FAILED: &str = "Failed to send message";

/// Draft of the four fields, bound to the inputs
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Presence only; the email shape is the server's call
    fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }
}

/// What the form currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    /// The submit control is disabled while a request is in flight
    Loading,
    Success,
    Error(String),
}

/// The only ways the status is allowed to change
#[derive(Debug)]
enum FormEvent {
    SubmitIncomplete,
    SubmitComplete,
    ResponseOk,
    ResponseFailed(String),
    ResetTimerFired,
}

pub struct ContactForm {
    http_client: reqwest::Client,

    /// Absolute URL of the submission endpoint
    endpoint: String,
    reset_delay: Duration,
    pub fields: FormFields,
    status: FormStatus,
}

impl ContactForm {
    pub fn new(endpoint: String) -> Self { Self::with_reset_delay(endpoint, SUCCESS_RESET_DELAY) }

    /// Like `new`, with the success-to-idle delay overridden (tests shorten
    /// it)
    pub fn with_reset_delay(
        endpoint: String,
        reset_delay: Duration,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint,
            reset_delay,
            fields: FormFields::default(),
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus { &self.status }

    fn transition(
        &mut self,
        event: FormEvent,
    ) {
        self.status = match event {
            FormEvent::SubmitIncomplete => FormStatus::Error(INCOMPLETE_FIELDS.to_owned()),
            FormEvent::SubmitComplete => FormStatus::Loading,
            FormEvent::ResponseOk => {
                self.fields = FormFields::default();
                FormStatus::Success
            }
            FormEvent::ResponseFailed(reason) => FormStatus::Error(reason),
            // only meaningful straight after a success; any transition in the
            // meantime wins
            FormEvent::ResetTimerFired => match self.status {
                FormStatus::Success => FormStatus::Idle,
                ref other => other.clone(),
            },
        };
    }

    /// One submit attempt: validate cheaply, then issue at most one request.
    /// A submit while `Loading` is ignored, so duplicate concurrent
    /// submissions cannot be produced. A submit from `error`/`success`
    /// re-enters the same logic as from `idle`.
    pub async fn submit(&mut self) {
        if self.status == FormStatus::Loading {
            return;
        }
        if !self.fields.is_complete() {
            self.transition(FormEvent::SubmitIncomplete);
            return;
        }
        self.transition(FormEvent::SubmitComplete);
        match self.post_submission().await {
            Ok(()) => self.transition(FormEvent::ResponseOk),
            Err(reason) => self.transition(FormEvent::ResponseFailed(reason)),
        }
    }

    /// The one outbound request. An unreachable server and an unparsable
    /// response collapse into the same generic message.
    async fn post_submission(&self) -> Result<(), String> {
        let resp = self
            .http_client
            .post(&self.endpoint)
            .json(&self.fields)
            .send()
            .await
            .map_err(|_| NETWORK_ERROR.to_owned())?;

        // the body is read in both branches: the success acknowledgment is
        // ignored, the failure reason is surfaced
        let ok = resp.status().is_success();
        let body: serde_json::Value = resp.json().await.map_err(|_| NETWORK_ERROR.to_owned())?;

        match ok {
            true => Ok(()),
            false => Err(body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(SUBMIT_FAILED)
                .to_owned()),
        }
    }

    /// Drive the automatic success -> idle transition. The shell calls (or
    /// spawns) this right after a successful `submit`; it is a no-op in any
    /// other state.
    pub async fn reset_after_success(&mut self) {
        if self.status != FormStatus::Success {
            return;
        }
        tokio::time::sleep(self.reset_delay).await;
        self.transition(FormEvent::ResetTimerFired);
    }
}
