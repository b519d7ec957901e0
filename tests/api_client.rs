use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use market_dashboard::{ApiClient, MarketOverview, StockApi, StockSample};
use std::time::Duration;
use tokio::net::TcpListener;

fn sample(symbol: &str, date: &str, close: f64, volume: u64) -> StockSample {
    StockSample {
        symbol: symbol.to_string(),
        date: date.to_string(),
        open: close - 1.0,
        high: close + 2.0,
        low: close - 2.0,
        close,
        volume,
    }
}

fn snapshot() -> Vec<StockSample> {
    // deliberately not sorted by symbol
    vec![
        sample("TSLA", "2024-05-03", 181.19, 75_491_000),
        sample("AAPL", "2024-05-03", 183.38, 163_224_000),
        sample("MSFT", "2024-05-03", 406.66, 17_446_700),
    ]
}

fn overview() -> MarketOverview {
    MarketOverview {
        total_volume: 256_161_700,
        top_gainer_symbol: "AAPL".to_string(),
        top_gainer_change: 5.98,
        top_loser_symbol: "TSLA".to_string(),
        top_loser_change: -1.23,
    }
}

async fn history(Path(symbol): Path<String>) -> Json<Vec<StockSample>> {
    Json(vec![
        sample(&symbol, "2024-05-01", 10.0, 1),
        sample(&symbol, "2024-05-02", 11.0, 2),
        sample(&symbol, "2024-05-03", 9.5, 3),
    ])
}

fn healthy_backend() -> Router {
    Router::new()
        .route("/api/all-stocks", get(|| async { Json(snapshot()) }))
        .route("/api/stock-history/:symbol", get(history))
        .route("/api/market-overview", get(|| async { Json(overview()) }))
}

fn failing_backend() -> Router {
    Router::new()
        .route("/api/all-stocks", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/api/stock-history/:symbol",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/market-overview",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

fn malformed_backend() -> Router {
    Router::new()
        .route("/api/all-stocks", get(|| async { "definitely not json" }))
        .route(
            "/api/stock-history/:symbol",
            get(|| async { Json(serde_json::json!({ "rows": [] })) }),
        )
        .route(
            "/api/market-overview",
            get(|| async { Json(serde_json::json!([1, 2, 3])) }),
        )
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(base, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn all_stocks_come_back_verbatim() {
    let api = client(&serve(healthy_backend()).await);
    assert_eq!(api.fetch_all_stocks().await, snapshot());
}

#[tokio::test]
async fn history_keeps_backend_order() {
    let api = client(&serve(healthy_backend()).await);
    let data = api.fetch_stock_history("AAPL").await;

    let closes: Vec<f64> = data.iter().map(|s| s.close).collect();
    assert_eq!(closes, vec![10.0, 11.0, 9.5]);
    assert!(data.iter().all(|s| s.symbol == "AAPL"));
}

#[tokio::test]
async fn history_symbol_travels_as_a_single_segment() {
    let api = client(&serve(healthy_backend()).await);

    let data = api.fetch_stock_history("BRK/B").await;
    assert_eq!(data.len(), 3);
    assert_eq!(data[0].symbol, "BRK/B");

    let data = api.fetch_stock_history("BTC USD").await;
    assert_eq!(data[0].symbol, "BTC USD");
}

#[tokio::test]
async fn overview_comes_back_verbatim() {
    let api = client(&serve(healthy_backend()).await);
    assert_eq!(api.fetch_market_overview().await, Some(overview()));
}

#[tokio::test]
async fn base_url_with_trailing_slash_still_works() {
    let base = format!("{}/", serve(healthy_backend()).await);
    let api = client(&base);
    assert_eq!(api.fetch_all_stocks().await.len(), 3);
}

#[tokio::test]
async fn server_errors_become_empty_results() {
    let api = client(&serve(failing_backend()).await);

    assert!(api.fetch_all_stocks().await.is_empty());
    assert!(api.fetch_stock_history("AAPL").await.is_empty());
    assert_eq!(api.fetch_market_overview().await, None);
}

#[tokio::test]
async fn malformed_bodies_become_empty_results() {
    let api = client(&serve(malformed_backend()).await);

    assert!(api.fetch_all_stocks().await.is_empty());
    assert!(api.fetch_stock_history("AAPL").await.is_empty());
    assert_eq!(api.fetch_market_overview().await, None);
}

#[tokio::test]
async fn unknown_route_becomes_empty_result() {
    let router = Router::new().route("/api/all-stocks", get(|| async { Json(snapshot()) }));
    let api = client(&serve(router).await);

    assert_eq!(api.fetch_all_stocks().await.len(), 3);
    assert!(api.fetch_stock_history("AAPL").await.is_empty());
    assert_eq!(api.fetch_market_overview().await, None);
}

#[tokio::test]
async fn connection_refused_becomes_empty_results() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{addr}"));

    assert!(api.fetch_all_stocks().await.is_empty());
    assert!(api.fetch_stock_history("AAPL").await.is_empty());
    assert_eq!(api.fetch_market_overview().await, None);
}

#[tokio::test]
async fn slow_backend_times_out_to_empty() {
    let router = Router::new().route(
        "/api/all-stocks",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(snapshot())
        }),
    );
    let base = serve(router).await;
    let api = ApiClient::new(&base, Duration::from_millis(200)).unwrap();

    assert!(api.fetch_all_stocks().await.is_empty());
}
