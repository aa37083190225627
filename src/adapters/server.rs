use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Response};
use axum::routing::any;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::core::handlers::PortfolioApi;
use crate::core::{ApiResponse, Endpoint, HttpMethod};
use crate::utils::error::Result;

/// API routes only; the static-file fallback is added in [`serve`] so tests
/// can drive the router without a frontend directory on disk.
pub fn router(api: PortfolioApi) -> Router {
    Router::new()
        .route(Endpoint::Health.path(), any(health))
        .route(Endpoint::Projects.path(), any(projects))
        .route(Endpoint::Skills.path(), any(skills))
        .route(Endpoint::Contact.path(), any(contact))
        .layer(TraceLayer::new_for_http())
        .with_state(api)
}

pub async fn serve(api: PortfolioApi, config: ServerConfig) -> Result<()> {
    let app = router(api).fallback_service(ServeDir::new(&config.static_dir));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("📡 Portfolio server listening on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(api): State<PortfolioApi>, method: Method) -> Response<Body> {
    respond(&api, Endpoint::Health, method, None)
}

async fn projects(State(api): State<PortfolioApi>, method: Method) -> Response<Body> {
    respond(&api, Endpoint::Projects, method, None)
}

async fn skills(State(api): State<PortfolioApi>, method: Method) -> Response<Body> {
    respond(&api, Endpoint::Skills, method, None)
}

/// The body is forwarded raw so parse-failure semantics stay in the core,
/// identical to the function shape.
async fn contact(State(api): State<PortfolioApi>, method: Method, body: String) -> Response<Body> {
    respond(&api, Endpoint::Contact, method, Some(body))
}

fn respond(
    api: &PortfolioApi,
    endpoint: Endpoint,
    method: Method,
    body: Option<String>,
) -> Response<Body> {
    let method = HttpMethod::parse(method.as_str());
    let response = api.handle(endpoint, method, body.as_deref());
    render(endpoint, response)
}

fn render(endpoint: Endpoint, response: ApiResponse) -> Response<Body> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in endpoint.cors_headers() {
        builder = builder.header(name, value);
    }

    let result = match response.body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    };

    // Status and headers are static or validated; construction cannot fail.
    result.expect("response parts are valid")
}
