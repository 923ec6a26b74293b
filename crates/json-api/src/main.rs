//! Yori JSON API Server

use std::process;

use salvo::{affix_state::inject, prelude::*};
use tracing::{error, info};
use yori_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod auth;
mod carts;
mod checkout;
mod config;
mod extensions;
mod fields;
mod healthcheck;
mod observability;
mod orders;
mod presenters;
mod responses;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so there is nowhere else to report it"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let app = match AppContext::from_database_url(
        &config.database.database_url,
        config.database.database_max_connections,
        (&config.checkout).into(),
    )
    .await
    {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(%addr, "starting server");

    let listener = TcpListener::new(addr).bind().await;

    let router = router::with_docs(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(router::routes()),
    );

    let server = Server::new(listener);
    let handle = server.handle();
    let shutdown_timeout = config.server.shutdown_timeout();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, shutdown_timeout).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router::service(router)).await;

    info!("server stopped");
}
