//! Dashboard HTTP API
//!
//! HTTP layer for the recycling dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page (`?area=` preselects an area)
//!
//! ## Callbacks
//! - `GET /api/v1/callbacks/output-panel?area=` - Statistics panel fragment
//! - `GET /api/v1/callbacks/recycle-chart?area=` - Recycling by area figure
//! - `GET /api/v1/callbacks/recycle-year?period=` - Recycling by year figure
//!
//! ## Data
//! - `GET /api/v1/areas` - List areas
//! - `GET /api/v1/periods` - List periods
//! - `GET /api/v1/areas/:area/summary` - Area summary statistics
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use recycling_dashboard::api::{serve, AppState};
//! use recycling_dashboard::config::ServerConfig;
//! use recycling_dashboard::dashboard::Dashboard;
//! use recycling_dashboard::data::RecyclingData;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let data = Arc::new(RecyclingData::bundled("England")?);
//!     let dashboard = Dashboard::new(data, "London", None)?;
//!     let config = ServerConfig::default();
//!
//!     serve(AppState::new(dashboard, config.clone()), &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Callback routes
        .route(
            "/callbacks/output-panel",
            get(routes::callbacks::output_panel),
        )
        .route(
            "/callbacks/recycle-chart",
            get(routes::callbacks::recycle_chart),
        )
        .route(
            "/callbacks/recycle-year",
            get(routes::callbacks::recycle_year),
        )
        // Data routes
        .route("/areas", get(routes::areas::list_areas))
        .route("/areas/:area/summary", get(routes::areas::area_summary))
        .route("/periods", get(routes::areas::list_periods));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Recycling dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Recycling dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::data::RecyclingData;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let data = Arc::new(RecyclingData::bundled("England").unwrap());
        let dashboard = Dashboard::new(data, "London", None).unwrap();
        let state = AppState::new(dashboard, ServerConfig::default());
        build_router(state)
    }

    async fn get(uri: &str) -> Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get("/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get("/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["areas"], 12);
        assert_eq!(json["periods"], 9);
        assert_eq!(json["latest_period"], "2018/19");
    }

    #[tokio::test]
    async fn test_index_page() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.contains("Waste and recycling"));
        assert!(html.contains(r#"id="card_name""#));
        assert!(html.contains("London</h4>"));
    }

    #[tokio::test]
    async fn test_index_page_with_area() {
        let response = get("/?area=Camden").await;
        let html = body_string(response).await;
        assert!(html.contains(r#"id="card_name""#));
        assert!(html.contains("Camden</h4>"));
    }

    #[tokio::test]
    async fn test_output_panel_callback() {
        let response = get("/api/v1/callbacks/output-panel?area=Bexley").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(r#"id="card_name""#));
        assert!(html.contains("Bexley</h4>"));
        assert!(html.contains(">9%<"));
        assert!(html.contains("with recycling rate 54%"));
    }

    #[tokio::test]
    async fn test_output_panel_area_with_spaces() {
        let response = get("/api/v1/callbacks/output-panel?area=Bexley%20").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_output_panel_unknown_area() {
        let response = get("/api/v1/callbacks/output-panel?area=Atlantis").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "AREA_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_output_panel_missing_area() {
        let response = get("/api/v1/callbacks/output-panel").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recycle_chart_callback() {
        let response = get("/api/v1/callbacks/recycle-chart?area=Hackney").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"][0]["name"], "Hackney");
        assert_eq!(json["data"][1]["name"], "England");
        assert!(!json["data"][0]["y"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recycle_year_default_and_explicit() {
        let json = body_json(get("/api/v1/callbacks/recycle-year").await).await;
        assert_eq!(json["data"][0]["name"], "2018/19");

        let json = body_json(get("/api/v1/callbacks/recycle-year?period=2012%2F13").await).await;
        assert_eq!(json["data"][0]["name"], "2012/13");
        assert_eq!(json["data"][0]["type"], "bar");
    }

    #[tokio::test]
    async fn test_recycle_year_unknown_period() {
        let response = get("/api/v1/callbacks/recycle-year?period=1990%2F91").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_areas() {
        let json = body_json(get("/api/v1/areas").await).await;
        assert_eq!(json["areas"][0], "England");
        assert_eq!(json["default_area"], "London");
        assert_eq!(json["total"], 12);
    }

    #[tokio::test]
    async fn test_list_periods() {
        let json = body_json(get("/api/v1/periods").await).await;
        assert_eq!(json["periods"][0], "2010/11");
        assert_eq!(json["latest"], "2018/19");
    }

    #[tokio::test]
    async fn test_area_summary() {
        let response = get("/api/v1/areas/Bexley/summary").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["area"], "Bexley");
        assert_eq!(json["best_period"], "2016/17");
        assert_eq!(json["formatted"]["compare_to_eng"], "9%");
    }

    #[tokio::test]
    async fn test_area_summary_unknown() {
        let response = get("/api/v1/areas/Atlantis/summary").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
