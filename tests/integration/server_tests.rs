//! Router tests for POST /scrape

use crate::common::{document_page, index_page, mount_html, mount_status, test_config};
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use folio_scraper::config::ScrapeMode;
use folio_scraper::server::{create_app, AppState};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

fn app(mode: ScrapeMode, base_url: &str) -> Router {
    let state = AppState::new(&test_config(mode, base_url)).expect("Failed to build state");
    create_app(state)
}

fn post_scrape(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/scrape")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_index_scrape_end_to_end() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/docs/index.htm",
        index_page(
            r#"<a href="ee_1.htm">Libro 1</a>
               <a href="ee_2.htm">Libro 2</a>
               <a href="https://elsewhere.example.net/docs/ee_3.htm">Off domain</a>"#,
        ),
    )
    .await;
    mount_html(&mock_server, "/docs/ee_1.htm", document_page("Libro 1", "Texto uno")).await;
    mount_html(&mock_server, "/docs/ee_2.htm", document_page("Libro 2", "Texto dos")).await;

    let body = serde_json::json!({
        "url": format!("{}/docs/index.htm", mock_server.uri()),
        "fuente": "TEST",
    })
    .to_string();

    let (status, json) = send(app(ScrapeMode::Index, &mock_server.uri()), post_scrape(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["fuente"], "TEST");

    let documentos = json["documentos"].as_array().expect("documentos array");
    assert_eq!(documentos.len(), 2);
    for doc in documentos {
        assert_eq!(doc["fuente"], "TEST");
        assert!(!doc["contenido"].as_str().unwrap().is_empty());
        assert!(doc["titulo"].as_str().unwrap().starts_with("Libro"));

        let fecha = doc["fecha_scrapeo"].as_str().unwrap();
        assert_eq!(fecha.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(fecha, "%Y-%m-%d").is_ok());
    }
}

#[tokio::test]
async fn test_index_failure_returns_500() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/docs/index.htm", 503).await;

    let body = format!(r#"{{"url": "{}/docs/index.htm", "fuente": "TEST"}}"#, mock_server.uri());
    let (status, json) = send(app(ScrapeMode::Index, &mock_server.uri()), post_scrape(body)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("503"));
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_index_missing_url_returns_400() {
    let mock_server = MockServer::start().await;
    let (status, json) = send(
        app(ScrapeMode::Index, &mock_server.uri()),
        post_scrape(r#"{"fuente": "TEST"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "La URL es requerida en el body");
}

#[tokio::test]
async fn test_single_page_end_to_end() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/gestor/entorno/docs/", mock_server.uri());

    mount_html(
        &mock_server,
        "/gestor/entorno/docs/resolucion_unica_ee.html",
        r#"<html><head><title>Resolución Única del Sector de Energía</title></head>
           <body><p>Disposiciones generales</p></body></html>"#
            .to_string(),
    )
    .await;

    let (status, json) = send(
        app(ScrapeMode::Single, &base_url),
        post_scrape(r#"{"url": "resolucion_unica_ee.html"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["fuente"], "CREG");
    assert_eq!(json["titulo"], "Resolución Única del Sector de Energía");
    assert_eq!(json["contenido"], "Disposiciones generales");
    assert_eq!(
        json["url"],
        format!("{}resolucion_unica_ee.html", base_url).as_str()
    );

    let fecha = json["fecha_scrapeo"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(fecha).is_ok());
    assert!(fecha.ends_with('Z'));
}

#[tokio::test]
async fn test_single_page_empty_body_returns_400() {
    let mock_server = MockServer::start().await;
    let (status, json) = send(
        app(ScrapeMode::Single, &mock_server.uri()),
        post_scrape(Body::empty()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "La URL es requerida en el body" }));
}

#[tokio::test]
async fn test_single_page_failure_returns_details() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/gestor/entorno/docs/", mock_server.uri());
    mount_status(&mock_server, "/gestor/entorno/docs/missing.html", 404).await;

    let (status, json) = send(
        app(ScrapeMode::Single, &base_url),
        post_scrape(r#"{"url": "missing.html"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Error al scrapear la página");
    assert!(json["details"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_get_not_allowed() {
    let mock_server = MockServer::start().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/scrape")
        .body(Body::empty())
        .unwrap();

    let response = app(ScrapeMode::Index, &mock_server.uri())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
