//! End-to-end tests over real HTTP: a server bound to an ephemeral loopback
//! port, exercised with a plain HTTP client.

#![cfg(feature = "server")]

use portfolio_api::adapters::server::router;
use portfolio_api::{Catalog, PortfolioApi};
use serde_json::json;

async fn spawn_server() -> String {
    let api = PortfolioApi::new(Catalog::new());
    let app = router(api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_over_real_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Portfolio server is running");
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_projects_and_skills_over_real_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let projects: serde_json::Value = client
        .get(format!("{}/api/projects", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(projects["success"], true);
    let ids: Vec<u64> = projects["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let skills: serde_json::Value = client
        .get(format!("{}/api/skills", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(skills["success"], true);
    let categories = skills["skills"].as_object().unwrap();
    assert_eq!(categories.len(), 4);
    for key in ["frontend", "backend", "database", "tools"] {
        assert!(categories.contains_key(key), "missing category {}", key);
    }
}

#[tokio::test]
async fn test_contact_flow_over_real_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/contact", base);

    // Valid submission
    let response = client
        .post(&url)
        .json(&json!({"name":"A","email":"a@b.com","subject":"s","message":"m"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your message! I will get back to you soon."
    );

    // Missing field
    let response = client
        .post(&url)
        .json(&json!({"name":"","email":"a@b.com","subject":"s","message":"m"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "All fields are required");

    // Invalid email
    let response = client
        .post(&url)
        .json(&json!({"name":"A","email":"nope","subject":"s","message":"m"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email address");

    // Malformed body
    let response = client
        .post(&url)
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Internal server error");

    // Wrong method
    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), 405);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_preflight_over_real_http() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/contact", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "POST, OPTIONS"
    );
    assert_eq!(response.text().await.unwrap(), "");
}
