use crate::app::App;
use crate::config::{AppConfig, CliArgs};
use crate::db::connection::{init_db, Database};
use crate::responses::error_response;
use crate::router::handle;
use astra::Server;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod auth;
mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod handlers;
mod images;
mod local_store;
mod mailer;
mod responses;
mod router;
mod templates;
mod wishlist;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clarkmart=info")),
        )
        .init();

    let config = AppConfig::from_args(CliArgs::parse());

    let db = Database::new(config.database.clone());
    if let Err(e) = init_db(&db, &config.schema) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    if config.mail.is_none() {
        info!("no Brevo API key configured; magic links will be logged instead of emailed");
    }

    let addr = config.bind;
    let workers = config.workers;
    let app = App::new(db, config);

    info!(%addr, workers, "starting server");
    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_response(err, &app.config.app_name),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
