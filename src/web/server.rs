//! Web server for the feedback relay.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{Config, ServerConfig};
use crate::{RelayError, Result};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Server configuration.
    server_config: ServerConfig,
}

impl WebServer {
    /// Create a new web server with the given application state.
    pub fn new(config: &ServerConfig, app_state: AppState) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| RelayError::Config(format!("invalid server address: {e}")))?;

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            server_config: config.clone(),
        })
    }

    /// Create a new web server from configuration, using the Resend backend.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.server, AppState::from_config(config)?)
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn router(&self) -> axum::Router {
        create_router(self.app_state.clone(), &self.server_config).merge(create_health_router())
    }

    /// Run the web server until Ctrl-C is received.
    pub async fn run(self) -> Result<()> {
        let router = self.router();
        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Web server stopped");
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr> {
        let router = self.router();
        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::{MailError, Mailer, OutgoingEmail};
    use crate::token::TokenSigner;
    use async_trait::async_trait;

    struct NullMailer;

    #[async_trait]
    impl Mailer for NullMailer {
        async fn send(&self, _email: OutgoingEmail) -> std::result::Result<(), MailError> {
            Ok(())
        }
    }

    fn create_test_server() -> WebServer {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..ServerConfig::default()
        };
        let mut mail = crate::config::MailConfig::default();
        mail.to_address = "team@example.com".to_string();
        mail.from_address = "feedback@example.com".to_string();

        let state = AppState::new(
            TokenSigner::with_expiry_secs("test-secret", 300),
            Arc::new(NullMailer),
            mail.settings(),
        );
        WebServer::new(&config, state).unwrap()
    }

    #[test]
    fn test_web_server_new() {
        let server = create_test_server();
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_web_server_invalid_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        let state = create_test_server().app_state.as_ref().clone();

        let result = WebServer::new(&config, state);
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let addr = create_test_server().run_with_addr().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
        assert_eq!(resp.text().await.unwrap(), "OK");

        let resp = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success());
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["token"].as_str().unwrap().contains('.'));
    }
}
