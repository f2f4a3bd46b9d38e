//! Integration tests for the HTTP API, driven through the full router.

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use outfit_advisor::api::AppState;
use outfit_advisor::config::ServerConfig;
use outfit_advisor::{AdvisorError, ForecastProvider, web};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Provider answering every lookup with a fixed payload
struct StaticProvider(Value);

#[async_trait]
impl ForecastProvider for StaticProvider {
    async fn fetch_daily(&self, _latitude: f64, _longitude: f64) -> outfit_advisor::Result<Value> {
        Ok(self.0.clone())
    }
}

/// Provider that answers only after the request deadline has passed
struct SlowProvider;

#[async_trait]
impl ForecastProvider for SlowProvider {
    async fn fetch_daily(&self, _latitude: f64, _longitude: f64) -> outfit_advisor::Result<Value> {
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        Ok(week_payload())
    }
}

/// Provider that is always unreachable
struct UnavailableProvider;

#[async_trait]
impl ForecastProvider for UnavailableProvider {
    async fn fetch_daily(&self, _latitude: f64, _longitude: f64) -> outfit_advisor::Result<Value> {
        Err(AdvisorError::provider_unavailable("天气服务暂时不可用，请稍后再试。"))
    }
}

fn app(provider: impl ForecastProvider + 'static) -> Router {
    web::app(&ServerConfig::default(), AppState::new(provider))
}

fn week_payload() -> Value {
    json!({
        "timezone": "Asia/Shanghai",
        "daily": {
            "time": ["2024-05-01", "2024-05-02", "2024-05-03", "2024-05-04",
                     "2024-05-05", "2024-05-06", "2024-05-07"],
            "weathercode": [0, 3, 61, 95, 71, 45, 2],
            "temperature_2m_max": [30.0, 20.0, 12.0, null, 2.0, 18.0, 25.0],
            "temperature_2m_min": [20.0, 10.0, 8.0, 14.0, -4.0, 12.0, 19.0],
            "windspeed_10m_max": [12.0, 3.0, 6.0, 20.0, 1.0, 2.0, 4.0]
        }
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_recommend_hot_windy_sunny_day() {
    let (status, body) = post_json(
        app(UnavailableProvider),
        "/api/recommend",
        json!({"weather": "晴", "temperature": 30, "windSpeed": "12"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["outfit"], "透气短袖或无袖上衣，搭配短裤或轻薄长裤");

    let accessories = body["data"]["accessories"].as_array().unwrap();
    assert!(accessories.contains(&json!("遮阳帽")));
    assert!(accessories.contains(&json!("防风外套")));

    let tips = body["data"]["tips"].as_array().unwrap();
    assert!(tips.contains(&json!("多喝水，避免长时间暴晒")));
    assert!(tips.contains(&json!("风力较大，外出时注意防风并保护好头部")));
}

#[tokio::test]
async fn test_recommend_blank_numbers_are_optional() {
    let (status, body) = post_json(
        app(UnavailableProvider),
        "/api/recommend",
        json!({"weather": "多云", "temperature": "", "windSpeed": null}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({
            "outfit": "薄外套配长裤，内搭透气上衣",
            "accessories": ["轻便运动鞋"],
            "tips": ["天气多变，出门前留意是否会转雨"]
        })
    );
}

#[tokio::test]
async fn test_recommend_collects_every_field_error() {
    let (status, body) = post_json(
        app(UnavailableProvider),
        "/api/recommend",
        json!({"weather": "  ", "temperature": "abc", "windSpeed": "fast"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "errors": {
                "weather": "请输入天气描述",
                "temperature": "请输入有效的数字",
                "windSpeed": "请输入有效的数字"
            }
        })
    );
}

#[tokio::test]
async fn test_recommend_bad_temperature_only() {
    let (status, body) = post_json(
        app(UnavailableProvider),
        "/api/recommend",
        json!({"weather": "雨", "temperature": "abc"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["temperature"], "请输入有效的数字");
    assert!(body["errors"].get("weather").is_none());
    assert!(body["errors"].get("windSpeed").is_none());
}

#[tokio::test]
async fn test_recommend_unparseable_body_reports_missing_weather() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{broken"))
        .unwrap();
    let (status, body) = send(app(UnavailableProvider), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"], json!({"weather": "请输入天气描述"}));
}

#[tokio::test]
async fn test_recommend_form_encoded() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("weather=snowy&temperature=-3&windSpeed="))
        .unwrap();
    let (status, body) = send(app(UnavailableProvider), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["outfit"], "保暖羽绒服或厚呢大衣，内搭羊毛衫与保暖裤");
    assert_eq!(
        body["data"]["accessories"],
        json!(["防滑雪地靴", "保暖手套", "保暖帽", "围巾"])
    );
}

fn oversized_request(content_type: &str, body: String) -> Request<Body> {
    // No Content-Length header, so the limit trips while the body is read.
    Request::builder()
        .method("POST")
        .uri("/api/recommend")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_recommend_oversized_json_body_is_rejected() {
    let body = json!({"weather": "晴", "pad": "x".repeat(70_000)}).to_string();
    let request = oversized_request("application/json", body);
    assert!(request.headers().get(header::CONTENT_LENGTH).is_none());

    let (status, body) = send(app(UnavailableProvider), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body,
        json!({"success": false, "errors": {"general": "请求内容过大"}})
    );
}

#[tokio::test]
async fn test_recommend_oversized_form_body_is_rejected() {
    let body = format!("weather=sunny&pad={}", "x".repeat(70_000));
    let request = oversized_request("application/x-www-form-urlencoded", body);

    let (status, body) = send(app(UnavailableProvider), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["errors"]["general"], "请求内容过大");
    assert!(body["errors"].get("weather").is_none());
}

#[tokio::test]
async fn test_auto_forecast_success() {
    let (status, body) = post_json(
        app(StaticProvider(week_payload())),
        "/api/auto-forecast",
        json!({"latitude": 39.9, "longitude": "116.4"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["location"],
        json!({"latitude": 39.9, "longitude": 116.4, "timezone": "Asia/Shanghai"})
    );

    let days = body["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-05-01");
    assert_eq!(days[0]["weather_text"], "晴");
    assert_eq!(days[0]["weather_code"], 0);

    // Missing max temperature on day 4 degrades to the min value only.
    assert_eq!(days[3]["temperature_max"], Value::Null);
    assert_eq!(days[3]["temperature_min"], 14.0);
    assert_eq!(
        days[3]["recommendation"]["outfit"],
        "针织衫或卫衣外搭中等厚度外套，下装长裤"
    );
}

#[tokio::test]
async fn test_auto_forecast_missing_and_malformed_coordinates() {
    let (status, body) = post_json(
        app(StaticProvider(week_payload())),
        "/api/auto-forecast",
        json!({"longitude": "east"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!({"latitude": "未能获取定位信息", "longitude": "定位数据格式有误"})
    );
}

#[tokio::test]
async fn test_auto_forecast_provider_unavailable() {
    let (status, body) = post_json(
        app(UnavailableProvider),
        "/api/auto-forecast",
        json!({"latitude": 1.0, "longitude": 2.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body,
        json!({"success": false, "errors": {"general": "天气服务暂时不可用，请稍后再试。"}})
    );
}

#[tokio::test]
async fn test_auto_forecast_without_daily_series() {
    let (status, body) = post_json(
        app(StaticProvider(json!({"timezone": "UTC"}))),
        "/api/auto-forecast",
        json!({"latitude": 1.0, "longitude": 2.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["errors"]["general"], "天气服务暂未提供未来七天天气数据。");
}

#[tokio::test]
async fn test_auto_forecast_without_days() {
    let (status, body) = post_json(
        app(StaticProvider(json!({"daily": {"time": []}}))),
        "/api/auto-forecast",
        json!({"latitude": 1.0, "longitude": 2.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["errors"]["general"], "暂未获取到天气数据，请稍后重试。");
}

#[tokio::test]
async fn test_slow_request_times_out() {
    let config = ServerConfig {
        request_timeout_seconds: 1,
        ..ServerConfig::default()
    };
    let app = web::app(&config, AppState::new(SlowProvider));

    let request = Request::builder()
        .method("POST")
        .uri("/api/auto-forecast")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"latitude": 1.0, "longitude": 2.0}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(UnavailableProvider), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], outfit_advisor::VERSION);
}

#[tokio::test]
async fn test_index_page_is_served() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app(UnavailableProvider).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("智能天气穿搭助手"));
}
