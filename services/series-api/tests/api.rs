use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use series_api::{app, AppState, TvMazeClient};
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn serve(router: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (addr, handle)
}

/// Stand-in for `GET /singlesearch/shows` keyed by the `q` parameter.
async fn singlesearch(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("embed").map(String::as_str) != Some("cast") {
        return (StatusCode::BAD_REQUEST, "missing embed=cast").into_response();
    }

    let q = params.get("q").cloned().unwrap_or_default();
    match q.as_str() {
        "Breaking Bad" => Json(json!({
            "id": 169,
            "name": "Breaking Bad",
            "premiered": "2008-01-20",
            "ended": "2013-09-29",
            "status": "Ended",
            "network": { "id": 20, "name": "AMC" },
            "webChannel": null,
            "_embedded": { "cast": [
                { "person": { "name": "Bryan Cranston" } },
                { "person": { "name": "Aaron Paul" } },
                { "person": { "name": "Anna Gunn" } },
                { "person": { "name": "Dean Norris" } },
                { "person": { "name": "Betsy Brandt" } }
            ]}
        }))
        .into_response(),
        "Stranger Things" => Json(json!({
            "name": "Stranger Things",
            "premiered": "2016-07-15",
            "ended": null,
            "status": "Running",
            "network": null,
            "webChannel": { "id": 1, "name": "Netflix" }
        }))
        .into_response(),
        "Garbled" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "Service Down" => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "name": "Not Found", "status": 404 })))
            .into_response(),
    }
}

struct TestApp {
    base: String,
    http: Client,
    _api: tokio::task::JoinHandle<()>,
    _upstream: Option<tokio::task::JoinHandle<()>>,
}

async fn setup() -> TestApp {
    let upstream = Router::new().route("/singlesearch/shows", get(singlesearch));
    let (upstream_addr, upstream_handle) = serve(upstream).await;

    let tvmaze = TvMazeClient::new(format!("http://{}", upstream_addr)).unwrap();
    let (addr, api_handle) = serve(app(AppState::new(tvmaze))).await;

    TestApp {
        base: format!("http://{}", addr),
        http: Client::new(),
        _api: api_handle,
        _upstream: Some(upstream_handle),
    }
}

/// API pointed at a port nothing listens on.
async fn setup_unreachable_upstream() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let tvmaze = TvMazeClient::new(format!("http://{}", dead_addr)).unwrap();
    let (addr, api_handle) = serve(app(AppState::new(tvmaze))).await;

    TestApp {
        base: format!("http://{}", addr),
        http: Client::new(),
        _api: api_handle,
        _upstream: None,
    }
}

// ── Health ───────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok() {
    let t = setup().await;
    let resp = t.http.get(format!("{}/health", t.base)).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["estado"], "OK");
    assert!(body["mensaje"].is_string());
}

// ── Lookup: success ──────────────────────────────────────────────

#[tokio::test]
async fn lookup_normalizes_and_shapes_summary() {
    let t = setup().await;
    let resp = t
        .http
        .get(format!("{}/api/serie/bReAkInG%20bad", t.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "busqueda_original": "bReAkInG bad",
            "titulo_sanitizado": "Breaking Bad",
            "titulo_oficial": "Breaking Bad",
            "actores_principales": ["Bryan Cranston", "Aaron Paul", "Anna Gunn"],
            "ano_inicio": "2008",
            "ano_fin": "2013",
            "plataforma_streaming": "AMC"
        })
    );
}

#[tokio::test]
async fn lookup_running_show_without_cast() {
    let t = setup().await;
    let body: Value = t
        .http
        .get(format!("{}/api/serie/STRANGER%20THINGS", t.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["titulo_sanitizado"], "Stranger Things");
    assert_eq!(body["actores_principales"], json!(["No disponible"]));
    assert_eq!(body["ano_inicio"], "2016");
    assert_eq!(body["ano_fin"], "En emisión");
    assert_eq!(body["plataforma_streaming"], "Netflix");
}

// ── Lookup: failures ─────────────────────────────────────────────

#[tokio::test]
async fn lookup_unknown_show_is_404_with_normalized_title() {
    let t = setup().await;
    let resp = t
        .http
        .get(format!("{}/api/serie/no%20such%20SHOW", t.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("No Such Show"), "message: {}", message);
    assert!(!message.contains("no such SHOW"), "message: {}", message);
}

#[tokio::test]
async fn lookup_malformed_upstream_body_is_500() {
    let t = setup().await;
    let resp = t
        .http
        .get(format!("{}/api/serie/garbled", t.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], series_api::error::LOOKUP_FAILED_MESSAGE);
    let detail = body["detalle"].as_str().unwrap();
    assert!(detail.contains("error decoding response body"), "detail: {}", detail);
    assert!(detail.contains("expected value"), "detail: {}", detail);
}

#[tokio::test]
async fn lookup_upstream_server_error_is_404() {
    let t = setup().await;
    let resp = t
        .http
        .get(format!("{}/api/serie/service%20DOWN", t.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Service Down"));
}

#[tokio::test]
async fn lookup_invalid_utf8_path_is_json_400() {
    let t = setup().await;
    let resp = t
        .http
        .get(format!("{}/api/serie/%FF", t.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], series_api::error::INVALID_PATH_MESSAGE);
    assert!(body["detalle"].as_str().unwrap().contains("UTF-8"));
}

#[tokio::test]
async fn lookup_network_failure_is_500_with_detail() {
    let t = setup_unreachable_upstream().await;
    let resp = t
        .http
        .get(format!("{}/api/serie/lost", t.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
    assert!(!body["detalle"].as_str().unwrap().is_empty());
}
