//! Bookshelf Application Library
//!
//! Wires the book CRUD module into the kernel runtime and serves it over
//! HTTP.

pub mod modules;

use std::sync::Arc;

use anyhow::Context;

use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use bookshelf_store::InMemoryBookStore;

/// Load settings, wire the module registry, and serve until the server exits.
pub async fn run() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry)?;

    tracing::info!(env = ?settings.environment, "bookshelf bootstrap starting");

    let store = Arc::new(InMemoryBookStore::new());
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!("bookshelf bootstrap complete");

    let served = bookshelf_http::start_server(&registry, &settings).await;
    registry.stop_modules().await?;
    served
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn registered_modules_serve_under_their_mount_point() {
        let settings = Settings::default();
        let mut registry = ModuleRegistry::new();
        modules::register_all(&mut registry, Arc::new(InMemoryBookStore::new()));

        registry
            .init_modules(&InitCtx {
                settings: &settings,
            })
            .await
            .unwrap();

        let router = bookshelf_http::build_router(&registry, &settings);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/books")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!([]));
    }
}
