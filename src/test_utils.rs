#[cfg(test)]
pub mod test_utils {
    use crate::config::{initialize_app_state, ProxyConfig};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_API_KEY: &str = "testkey123456";

    /// Body served verbatim for the series "RAW"; keys are not in sorted order.
    pub const RAW_UPSTREAM_BODY: &str =
        r#"{"realtime_start":"2024-04-01","observations":[{"value":"3.1","date":"2024-03-01"}],"count":1}"#;

    /// Create AppState for testing
    pub fn setup_test_app_state(api_key: Option<&str>, upstream_base: &str) -> AppState {
        let config = ProxyConfig::new(api_key.map(str::to_string), upstream_base);
        initialize_app_state(config).expect("Failed to build app state")
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Installed globally once; later calls
    /// keep the first subscriber.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        // Another test may have installed it already.
        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app(api_key: Option<&str>, upstream_base: &str) -> Router {
        init_test_tracing();

        let state = setup_test_app_state(api_key, upstream_base);
        create_router(state)
    }

    /// Fake FRED observations endpoint.
    ///
    /// Echoes the query it received under `received`, answers 500 for the
    /// series "BROKEN", a non-JSON body for "GARBAGE" and [`RAW_UPSTREAM_BODY`]
    /// for "RAW".
    async fn fake_fred(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        match params.get("series_id").map(String::as_str) {
            Some("BROKEN") => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "upstream exploded".to_string(),
            )
                .into_response(),
            Some("GARBAGE") => (StatusCode::OK, "<html>not json</html>".to_string()).into_response(),
            Some("RAW") => (StatusCode::OK, RAW_UPSTREAM_BODY).into_response(),
            _ => Json(json!({
                "realtime_start": "2024-04-01",
                "received": params,
                "observations": [
                    { "realtime_start": "2024-04-01", "date": "2024-03-15", "value": "3.2" },
                    { "realtime_start": "2024-04-01", "date": "2024-03-01", "value": "3.1" },
                    { "realtime_start": "2024-04-01", "date": "2024-02-01", "value": "." }
                ]
            }))
            .into_response(),
        }
    }

    /// Start the fake FRED endpoint on a random local port and return its URL.
    pub async fn spawn_fake_fred() -> String {
        let app = Router::new().route("/fred/series/observations", get(fake_fred));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake FRED listener");
        let addr = listener.local_addr().expect("Fake FRED listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake FRED server failed");
        });
        format!("http://{}/fred/series/observations", addr)
    }

    /// Start the proxy itself on a random local port and return its base URL.
    pub async fn spawn_proxy(api_key: Option<&str>, upstream_base: &str) -> String {
        let app = setup_test_app(api_key, upstream_base);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind proxy listener");
        let addr = listener.local_addr().expect("Proxy listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Proxy server failed");
        });
        format!("http://{}", addr)
    }
}
