use super::router::build_router;
use crate::application::engine::ReceiptEngine;
use crate::config::ServerConfig;
use crate::error::{ReceiptError, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// HTTP front end for a [`ReceiptEngine`].
pub struct ReceiptServer {
    config: ServerConfig,
    engine: Arc<ReceiptEngine>,
}

impl ReceiptServer {
    pub fn new(config: ServerConfig, engine: ReceiptEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.engine))
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight
    /// requests and return.
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("receipt server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ReceiptError::Io)
    }

    /// Bind and serve in a background task, returning the bound address.
    /// Port 0 in the config picks a free port.
    pub async fn spawn(self) -> Result<SocketAddr> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("receipt server error: {}", e);
            }
        });

        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryReceiptStore;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn server(bind_addr: &str) -> ReceiptServer {
        let engine = ReceiptEngine::new(Box::new(InMemoryReceiptStore::new()));
        ReceiptServer::new(ServerConfig::new(bind_addr.parse().unwrap()), engine)
    }

    #[test]
    fn server_construction() {
        let server = server("127.0.0.1:8080");
        assert_eq!(server.config().bind_addr.port(), 8080);
        let _router = server.router();
    }

    #[tokio::test]
    async fn spawned_server_answers_over_tcp() {
        let addr = server("127.0.0.1:0").spawn().await.unwrap();
        assert_ne!(addr.port(), 0);

        let request = concat!(
            "GET /receipts/0/points HTTP/1.1\r\n",
            "Host: localhost\r\n",
            "Connection: close\r\n\r\n",
        );
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 400"));
        assert!(response.contains("Receipt ID does not exist"));
    }

    #[tokio::test]
    async fn serve_stops_on_shutdown_signal() {
        let result = server("127.0.0.1:0").serve(async {}).await;
        assert!(result.is_ok());
    }
}
