//! HTTP server for the live site.

use tokio::net::TcpListener;

use crate::config::SiteConfig;
use crate::error::ServerError;
use crate::routes::app;

/// Serve the site on `config.host:config.port` until the process exits.
pub async fn serve(config: SiteConfig) -> Result<(), ServerError> {
    let listener = bind(&config).await?;

    if config.uses_default_secret() && !config.debug {
        tracing::warn!("Using the default secret key; set SECRET_KEY for production");
    }

    match listener.local_addr() {
        Ok(addr) => tracing::info!("Serving site at http://{}", addr),
        Err(_) => tracing::info!("Serving site at http://{}", config.address()),
    }

    axum::serve(listener, app(config))
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))
}

/// Resolve `host:port` and bind a listener. Hostnames such as `localhost`
/// are accepted as well as IP literals.
async fn bind(config: &SiteConfig) -> Result<TcpListener, ServerError> {
    let address = config.address();
    let addrs: Vec<_> = tokio::net::lookup_host(address.as_str())
        .await
        .map_err(|_| ServerError::InvalidAddress(address.clone()))?
        .collect();

    if addrs.is_empty() {
        return Err(ServerError::InvalidAddress(address));
    }

    TcpListener::bind(addrs.as_slice())
        .await
        .map_err(|e| ServerError::BindError(address, e.to_string()))
}
