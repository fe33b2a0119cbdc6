//! Composition of the relayed email: one rich-text body and one plain-text
//! body, both embedding the four submission fields, plus the subject line.

use htmlescape::encode_minimal;

use crate::domain::ContactSubmission;

/// Styles are inlined in a `<style>` block; most mail clients ignore external
/// stylesheets
const STYLE_SHEET: &str = r#"
      body {
        font-family: 'Arial', sans-serif;
        line-height: 1.6;
        color: #333;
        max-width: 600px;
        margin: 0 auto;
        padding: 20px;
      }
      .header {
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        padding: 30px;
        border-radius: 10px 10px 0 0;
        text-align: center;
      }
      .content {
        background: #f9f9f9;
        padding: 30px;
        border-radius: 0 0 10px 10px;
      }
      .field {
        margin-bottom: 20px;
        padding: 15px;
        background: white;
        border-radius: 8px;
        border-left: 4px solid #667eea;
      }
      .field-label {
        font-weight: bold;
        color: #667eea;
        font-size: 12px;
        text-transform: uppercase;
        margin-bottom: 5px;
      }
      .field-value {
        color: #333;
        font-size: 16px;
      }
      .message-box {
        background: white;
        padding: 20px;
        border-radius: 8px;
        border-left: 4px solid #764ba2;
        margin-top: 20px;
      }
      .footer {
        text-align: center;
        margin-top: 20px;
        padding-top: 20px;
        border-top: 2px solid #e0e0e0;
        color: #666;
        font-size: 14px;
      }
"#;

/// Subject line of the relayed email. The visitor's subject is embedded
/// verbatim; a header is not markup.
pub fn submission_subject(submission: &ContactSubmission) -> String {
    format!("Portfolio Contact: {}", submission.subject)
}

/// Rich-text body. All user-supplied fields are entity-encoded before being
/// embedded, so a visitor cannot smuggle markup into the inbox.
pub fn submission_html(submission: &ContactSubmission) -> String {
    let name = encode_minimal(&submission.name);
    let email = encode_minimal(submission.email.as_ref());
    let subject = encode_minimal(&submission.subject);
    let message = encode_minimal(&submission.message);

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <style>{style}</style>
  </head>
  <body>
    <div class="header">
      <h1>New Portfolio Contact Message</h1>
    </div>
    <div class="content">
      <div class="field">
        <div class="field-label">From</div>
        <div class="field-value">{name}</div>
      </div>

      <div class="field">
        <div class="field-label">Email</div>
        <div class="field-value">
          <a href="mailto:{email}" style="color: #667eea; text-decoration: none;">{email}</a>
        </div>
      </div>

      <div class="field">
        <div class="field-label">Subject</div>
        <div class="field-value">{subject}</div>
      </div>

      <div class="message-box">
        <div class="field-label">Message</div>
        <div class="field-value" style="white-space: pre-wrap;">{message}</div>
      </div>

      <div class="footer">
        <p>You can reply directly to this email to respond to {name}</p>
        <p style="font-size: 12px; color: #999;">Sent from your portfolio contact form</p>
      </div>
    </div>
  </body>
</html>
"#,
        style = STYLE_SHEET,
        name = name,
        email = email,
        subject = subject,
        message = message,
    )
}

/// Plain-text body; fields embedded verbatim
pub fn submission_text(submission: &ContactSubmission) -> String {
    format!(
        "\
New Contact Form Submission

From: {name}
Email: {email}
Subject: {subject}

Message:
{message}

---
You can reply directly to this email to respond to {name}.
",
        name = submission.name,
        email = submission.email.as_ref(),
        subject = submission.subject,
        message = submission.message,
    )
}
