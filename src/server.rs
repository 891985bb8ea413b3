use std::{io, net::SocketAddr};

use axum::Router;
use leptos::{config::errors::LeptosConfigError, prelude::*};
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::*;

const DEFAULT_LOG_FILTER: &str = "portfolio_site=info,tower_http=info";

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Couldn't load leptos configuration: {0}")]
    Config(#[from] LeptosConfigError),
    #[error("Couldn't bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
    #[error("Server stopped: {0}")]
    Serve(io::Error),
}

/// Logs to stdout, filtered by `RUST_LOG`. `log` records from the library are
/// forwarded as well.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(true)
                .with_line_number(true),
        )
        .with_env_filter(filter)
        .try_init();
}

pub async fn serve() -> Result<(), ServerError> {
    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
