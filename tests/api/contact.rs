use wiremock::matchers::any;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_app;

/// Test the `/api/contact` endpoint with a valid request: 200, the fixed
/// acknowledgment body, and exactly one dispatch to the provider with the
/// visitor pinned as reply-to
#[tokio::test]
async fn valid_submission_is_relayed() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = serde_json::json!({
        "name": "Ann",
        "email": "ann@x.com",
        "subject": "Hi",
        "message": "Hello",
    });
    let resp = app.post_contact(&body).await;

    assert_eq!(resp.status().as_u16(), 200);
    let resp_body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(resp_body["message"], "Email sent successfully!");

    // now we check the side-effect: what actually went out to the provider
    let reqs = app.email_server.received_requests().await.unwrap();
    let sent = reqs
        .last()
        .unwrap()
        .body_json::<serde_json::Value>()
        .unwrap();
    assert_eq!(sent["ReplyTo"], "ann@x.com");
    assert!(sent["Subject"].as_str().unwrap().contains("Hi"));
    // submissions go to the account's own inbox
    assert_eq!(sent["From"], sent["To"]);
    assert!(sent["HtmlBody"].as_str().unwrap().contains("Hello"));
    assert!(sent["TextBody"].as_str().unwrap().contains("Hello"));
}

/// Missing and empty fields fail the same way, and nothing reaches the
/// provider
#[tokio::test]
async fn incomplete_submission_is_rejected() {
    let app = spawn_app().await;

    let _ = Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // for parametrised testing, use `rstest`
    for (body, msg) in [
        (serde_json::json!({}), "all fields missing"),
        (
            serde_json::json!({"email": "a@b.com", "subject": "s", "message": "m"}),
            "missing name",
        ),
        (
            serde_json::json!({"name": "A", "subject": "s", "message": "m"}),
            "missing email",
        ),
        (
            serde_json::json!({"name": "A", "email": "a@b.com", "message": "m"}),
            "missing subject",
        ),
        (
            serde_json::json!({"name": "A", "email": "a@b.com", "subject": "s"}),
            "missing message",
        ),
        (
            serde_json::json!({"name": "", "email": "a@b.com", "subject": "s", "message": "m"}),
            "empty name",
        ),
        (
            serde_json::json!({"name": "A", "email": "", "subject": "s", "message": "m"}),
            "empty email",
        ),
        (
            serde_json::json!({"name": "A", "email": "a@b.com", "subject": "", "message": "m"}),
            "empty subject",
        ),
        (
            serde_json::json!({"name": "A", "email": "a@b.com", "subject": "s", "message": ""}),
            "empty message",
        ),
    ] {
        let resp = app.post_contact(&body).await;

        assert_eq!(resp.status().as_u16(), 400, "{msg}");
        let resp_body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(resp_body["error"], "All fields are required", "{msg}");
    }
}

/// Anything that isn't `local@domain.tld` shaped is rejected before dispatch
#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = spawn_app().await;

    let _ = Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in [
        "not-an-email",
        "ann@xcom",
        "ann@.com",
        "ann@x.",
        "@x.com",
        "ann@x@y.com",
        "ann smith@x.com",
    ] {
        let body = serde_json::json!({
            "name": "A",
            "email": email,
            "subject": "s",
            "message": "m",
        });
        let resp = app.post_contact(&body).await;

        assert_eq!(resp.status().as_u16(), 400, "{email}");
        let resp_body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(resp_body["error"], "Invalid email address", "{email}");
    }
}

/// Whatever the provider's reason, the caller only sees the fixed generic
/// failure
#[tokio::test]
async fn provider_failure_is_opaque_to_the_caller() {
    for provider_status in [400, 500] {
        let app = spawn_app().await;

        Mock::given(path("/email"))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(provider_status))
            .expect(1)
            .mount(&app.email_server)
            .await;

        let body = serde_json::json!({
            "name": "Ann",
            "email": "ann@x.com",
            "subject": "Hi",
            "message": "Hello",
        });
        let resp = app.post_contact(&body).await;

        assert_eq!(resp.status().as_u16(), 500, "provider {provider_status}");
        let resp_body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            resp_body["error"],
            "Failed to send email. Please try again later.",
            "provider {provider_status}"
        );
    }
}
