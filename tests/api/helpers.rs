use once_cell::sync::Lazy;
use portfolio_site::configuration::get_configuration;
use portfolio_site::startup::Application;
use portfolio_site::telemetry::get_subscriber;
use portfolio_site::telemetry::init_subscriber;
use wiremock::MockServer;

/// Init a static subscriber once for the whole test binary, using the
/// `once_cell` crate.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    // the intuitive/'elegant' solution of assigning 2 different "closure
    // types" to the same var is not allowed by the compiler, hence the
    // unwieldy match arms
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber);
        }
    };
});

pub struct TestApp {
    pub addr: String,

    /// Stands in for the mail provider
    pub email_server: MockServer,
}

impl TestApp {
    /// Convenience method for making a `POST /api/contact` request
    pub async fn post_contact(
        &self,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        let client = reqwest::Client::new();

        client
            .post(format!("{}/api/contact", self.addr))
            .json(body)
            .send()
            .await
            .expect("execute request")
    }

    /// Absolute URL of the submission endpoint, for driving a `ContactForm`
    pub fn contact_endpoint(&self) -> String { format!("{}/api/contact", self.addr) }
}

/// Spawn the app with a randomised port, pointing its email client at a fresh
/// `MockServer` that simulates the mail provider.
///
/// Returns the address the server was bound to, in the form
/// `http://localhost:{port}`. The `http://` prefix is important, as this is
/// the address that clients will send requests to.
pub async fn spawn_app() -> TestApp {
    // init the tracing subscriber once only
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let cfg = {
        let mut rand_cfg = get_configuration().unwrap();

        // port 0 is reserved by the OS; the server will be spawned on an
        // address with a random available port, retrieved below via
        // `Application.get_port`
        rand_cfg.application.port = 0;

        rand_cfg.email_client.base_url = email_server.uri();

        rand_cfg
    };

    let app = Application::build(cfg).await.unwrap();
    let addr = format!("http://localhost:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    TestApp { addr, email_server }
}
