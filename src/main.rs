#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), portfolio_site::server::ServerError> {
    use portfolio_site::server::{init_tracing, serve};

    init_tracing();
    serve().await.inspect_err(|e| tracing::error!("{e}"))
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
