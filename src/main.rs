use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use crate::source::CsvSource;
use astra::Server;
use log::{error, info, warn};
use std::time::Duration;

mod app;
mod config;
mod domain;
mod errors;
mod filters;
mod responses;
mod router;
mod source;
mod spreadsheets;
mod templates;
mod view;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let source = match CsvSource::new(Duration::from_secs(config.fetch_timeout_secs)) {
        Ok(source) => source,
        Err(e) => {
            error!("Could not build the HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let app = App::new(config, Box::new(source));

    // Warm the cache so the first visitor does not wait for the download.
    if let Err(e) = app.dataset() {
        warn!("Initial dataset load failed: {e}. The next request will try again.");
    }

    let addr = app.config.bind_addr;
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };

        info!("{method} {path} -> {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
