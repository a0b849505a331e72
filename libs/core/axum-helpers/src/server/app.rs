use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps the API routes with documentation and the cross-cutting layers.
///
/// - `apis` is nested under `/api`
/// - OpenAPI JSON at `/api-docs/openapi.json`, Swagger UI at `/swagger-ui`,
///   Scalar at `/scalar`
/// - JSON 404 fallback
/// - request tracing, security headers, CORS (see
///   [`cors_layer_from_env`]) and response compression
///
/// Health endpoints are merged by the caller so they stay outside `/api`.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` contains a value that is not a valid header.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then shuts down in two phases:
///
/// 1. stop accepting connections and let in-flight requests finish, for at
///    most `shutdown_timeout`
/// 2. run `cleanup` (closing pools and the like), also bounded by
///    `shutdown_timeout`
///
/// ```ignore
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     close_postgres(db, "main").await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_listener = coordinator.clone();
    tokio::spawn(async move { signal_listener.wait_for_signal().await });

    let graceful = coordinator.clone();
    let server = async move {
        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(async move { graceful.wait_for_shutdown().await })
            .await
    };

    let drain_deadline = async {
        coordinator.wait_for_shutdown().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    let serve_result = tokio::select! {
        result = server => result.inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        }),
        _ = drain_deadline => {
            warn!("In-flight requests did not finish within {:?}, forcing shutdown", shutdown_timeout);
            Ok(())
        }
    };

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => warn!("Cleanup exceeded timeout of {:?}", shutdown_timeout),
    }

    serve_result
}
