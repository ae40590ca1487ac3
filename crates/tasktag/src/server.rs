use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServiceConfig;
use crate::error::{TagError, TagResult};
use crate::tagger::Tagger;

pub mod error;
pub mod meta;
pub mod openapi;
pub mod tags;

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    pub async fn start(config: &ServiceConfig, tagger: Tagger) -> TagResult<Self> {
        let state = Arc::new(ServerState { tagger });
        let app = build_router(state);

        let listener = TcpListener::bind(config.listen_addr())
            .await
            .map_err(|error| {
                TagError::Internal(format!("failed to bind {}: {error}", config.listen_addr()))
            })?;
        let addr = listener
            .local_addr()
            .map_err(|error| TagError::Internal(error.to_string()))?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        info!("listening on http://{addr}");
        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> TagResult<()> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| TagError::Internal("failed to send server shutdown signal".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route("/healthz", get(meta::healthz))
        .route("/tag-task", post(tags::tag_task))
        .route("/tag-tasks", post(tags::tag_tasks))
        .route("/categories", get(meta::categories))
        .route("/demo", get(meta::demo))
        .route("/openapi.json", get(openapi::serve_spec));

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs")
            .url("/api-docs/openapi.json", {
                use utoipa::OpenApi;
                openapi::ApiDoc::openapi()
            }),
    );

    router.with_state(state).layer(cors)
}

pub struct ServerState {
    pub(crate) tagger: Tagger,
}
