use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::contact;
use crate::routes::health_check;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,

    /// Contains the following components: TCP listener (randomised port when
    /// configured with port 0) and the mail provider client
    server: Server,
}

impl Application {
    /// Wrapper over `startup::run` that builds a `Server`
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        // env-dependent host
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // get the port assigned by the OS; this will be saved in the `port`
        // field
        let port = listener.local_addr()?.port();

        let email_client = cfg.email_client.client();

        let server = run(listener, email_client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call
    /// (or passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens
/// to an already bound address.
///
/// Declares all API endpoints.
pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
) -> Result<Server, std::io::Error> {
    // `HttpServer` handles transport level concerns, such as TCP sockets,
    // concurrent connections, TLS, etc
    //
    // an `App` 'lives' in a `HttpServer`, and handles all request/response
    // logic via `route` endpoints

    // `Data` is externally an `Arc` (for sharing/cloning), internally a
    // `HashMap` (for wrapping arbitrary types)
    let email_client = web::Data::new(email_client);

    // note the closure; "`actix-web` will spin up a worker process for each
    // available core on your machine. Each worker runs its own copy of the
    // application built by `HttpServer` calling the very same closure that
    // `HttpServer::new` takes as argument." hence the clone.
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default()) // wrap the whole app in tracing middleware
            // remember, the guard must match the client's request type
            .route("/health_check", web::get().to(health_check))
            .route("/api/contact", web::post().to(contact))
            // with `.app_data`, global state is made available to all
            // endpoints, if specified as args
            .app_data(email_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server) // sync return -- caller uses foo()?.await
}
