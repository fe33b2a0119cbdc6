pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod form;
pub mod message;
pub mod routes;
pub mod site;
pub mod startup;
pub mod telemetry;
