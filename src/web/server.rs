use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Environment variable consulted for the port when no argument is given
pub const PORT_ENV_VAR: &str = "K_PATHS_PORT";

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [127, 0, 0, 1],
            port: 3005,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Port from the first argument, else from `K_PATHS_PORT`, else the default.
    ///
    /// Values that do not parse as a port are ignored.
    pub fn from_sources(arg: Option<&str>, env_port: Option<&str>) -> Self {
        let port = arg
            .and_then(|value| value.parse().ok())
            .or_else(|| env_port.and_then(|value| value.parse().ok()))
            .unwrap_or(Self::default().port);

        Self {
            port,
            ..Default::default()
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// Build the application with middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app = Router::new().merge(create_router()).with_state(AppState::new());

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);
    let addr = config.addr();

    log::info!("k paths server listening on http://{}", addr);
    log::info!("health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
