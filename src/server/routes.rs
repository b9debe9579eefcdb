use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{from_fn, Next},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Instrument};
use uuid::Uuid;

use crate::llm::MeetingExtractor;
use crate::meeting::MeetingInfo;
use crate::AssistantError;

/// Body of the liveness route.
pub const HEALTH_MESSAGE: &str = "AI Meeting Assistant API is running!";

const REQUEST_ID_HEADER: &str = "x-request-id";

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no extractor could be built at startup.
    pub extractor: Option<Arc<dyn MeetingExtractor>>,
}

#[derive(Debug, Deserialize)]
struct ExtractRequest {
    transcript: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/extract", post(extract))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Run each request in a span tagged with a fresh request id and echo it back.
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("http_request", request_id = %request_id);

    let mut response = next.run(request).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

async fn read_root() -> Json<Value> {
    Json(json!({ "message": HEALTH_MESSAGE }))
}

async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> ApiResult<MeetingInfo> {
    let Some(extractor) = state.extractor.as_ref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "Extraction is not configured: missing LLM API key" })),
        ));
    };

    info!(
        model = %extractor.model(),
        transcript_len = request.transcript.len(),
        "Processing extract request"
    );

    match extractor.extract(&request.transcript).await {
        Ok(info) => {
            info!(action_items = info.action_items.len(), "Extraction finished");
            Ok(Json(info))
        }
        Err(e) => {
            error!("Extraction failed: {}", e);
            Err(error_response(&e))
        }
    }
}

fn error_response(err: &AssistantError) -> ApiError {
    let status = match err {
        AssistantError::Http(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
        AssistantError::Http(_)
        | AssistantError::Provider { .. }
        | AssistantError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        AssistantError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(json!({ "error": err.to_string() })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::ActionItem;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request as HttpRequest};
    use tower::ServiceExt;

    enum Stub {
        Returns(MeetingInfo),
        Provider,
        Malformed,
    }

    #[async_trait]
    impl MeetingExtractor for Stub {
        async fn extract(&self, _transcript: &str) -> crate::Result<MeetingInfo> {
            match self {
                Stub::Returns(info) => Ok(info.clone()),
                Stub::Provider => Err(AssistantError::Provider {
                    status: 429,
                    message: "Resource has been exhausted".to_string(),
                }),
                Stub::Malformed => Err(AssistantError::MalformedResponse(
                    "missing field `owner`".to_string(),
                )),
            }
        }

        fn model(&self) -> &str {
            "stub"
        }
    }

    fn router_with(stub: Option<Stub>) -> Router {
        build_router(AppState {
            extractor: stub.map(|s| Arc::new(s) as Arc<dyn MeetingExtractor>),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn extract_request(body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method(Method::POST)
            .uri("/extract")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_returns_health_message() {
        let response = router_with(None)
            .oneshot(HttpRequest::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(
            body_json(response).await,
            json!({"message": "AI Meeting Assistant API is running!"})
        );
    }

    #[tokio::test]
    async fn root_ignores_headers_and_body() {
        let request = HttpRequest::builder()
            .uri("/")
            .header(header::CONTENT_TYPE, "text/plain")
            .header("x-anything", "1")
            .body(Body::from("ignored"))
            .unwrap();

        let response = router_with(None).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], HEALTH_MESSAGE);
    }

    #[tokio::test]
    async fn extract_returns_meeting_info() {
        let info = MeetingInfo {
            summary: "Phoenix sync.".to_string(),
            action_items: vec![ActionItem {
                task: "Deploy auth service".to_string(),
                owner: "John".to_string(),
                deadline: Some("4 PM".to_string()),
            }],
        };

        let response = router_with(Some(Stub::Returns(info)))
            .oneshot(extract_request(r#"{"transcript": "John: deploying today"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["summary"], "Phoenix sync.");
        assert_eq!(body["action_items"][0]["owner"], "John");
    }

    #[tokio::test]
    async fn extract_without_extractor_is_unavailable() {
        let response = router_with(None)
            .oneshot(extract_request(r#"{"transcript": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_json(response).await["error"]
            .as_str()
            .unwrap()
            .contains("not configured"));
    }

    #[tokio::test]
    async fn provider_failure_maps_to_bad_gateway() {
        let response = router_with(Some(Stub::Provider))
            .oneshot(extract_request(r#"{"transcript": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_json(response).await["error"]
            .as_str()
            .unwrap()
            .contains("429"));
    }

    #[test]
    fn error_statuses_cover_every_variant() {
        let cases = [
            (AssistantError::Config("no key".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AssistantError::Provider {
                    status: 500,
                    message: "boom".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (AssistantError::MalformedResponse("bad".to_string()), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            let (status, Json(body)) = error_response(&err);
            assert_eq!(status, expected);
            assert_eq!(body["error"], err.to_string());
        }
    }

    #[tokio::test]
    async fn malformed_model_output_maps_to_bad_gateway() {
        let response = router_with(Some(Stub::Malformed))
            .oneshot(extract_request(r#"{"transcript": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn extract_rejects_body_without_transcript() {
        let response = router_with(Some(Stub::Provider))
            .oneshot(extract_request(r#"{"text": "hi"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
