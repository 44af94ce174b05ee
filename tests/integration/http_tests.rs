//! HTTP surface tests
//!
//! Drives the actix-web application in process with a recording transport.

#[cfg(test)]
mod tests {
    use crate::common::{RecordingTransport, fixtures};
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use bedrock_broker::core::router::RequestRouter;
    use bedrock_broker::core::transport::{BedrockTransport, TransportError};
    use bedrock_broker::core::types::AgentSettings;
    use bedrock_broker::config::RouterConfig;
    use bedrock_broker::server::{AppState, create_app};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn state(
        config: RouterConfig,
        transport: Arc<dyn BedrockTransport>,
        include_error_details: bool,
    ) -> web::Data<AppState> {
        web::Data::new(AppState::new(
            RequestRouter::new(&config, transport),
            include_error_details,
        ))
    }

    fn titan_state(transport: Arc<RecordingTransport>) -> web::Data<AppState> {
        state(
            fixtures::model_config("amazon.titan-text-express-v1"),
            transport,
            false,
        )
    }

    #[actix_web::test]
    async fn test_health_reports_mode() {
        let app = test::init_service(create_app(titan_state(RecordingTransport::replying("{}"))))
            .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::SERVER).unwrap(), "bedrock-broker");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["mode"], "model");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_chat_returns_model_answer() {
        let transport =
            RecordingTransport::replying(fixtures::titan_response("Running, Pending, Failed"));
        let app = test::init_service(create_app(titan_state(transport.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({
                "message": "List 3 Kubernetes pod states",
                "sessionId": "abc12345-def67890"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Running, Pending, Failed");
        assert_eq!(body["sessionId"], "abc12345-def67890");
        assert!(body.get("implementationStatus").is_none());
        assert!(body["timestamp"].is_string());
        assert_eq!(transport.call_count(), 1);
    }

    #[actix_web::test]
    async fn test_root_path_accepts_chat_and_generates_session() {
        let transport = RecordingTransport::replying(fixtures::titan_response("ok"));
        let app = test::init_service(create_app(titan_state(transport))).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let session_id = body["sessionId"].as_str().unwrap();
        let segments: Vec<&str> = session_id.split('-').collect();
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.len() == 8));
        assert!(session_id.chars().all(|c| c == '-' || c.is_ascii_alphanumeric()));
    }

    #[actix_web::test]
    async fn test_agent_mode_marks_pending() {
        let transport = RecordingTransport::replying("{}");
        let app = test::init_service(create_app(state(
            fixtures::agent_config(AgentSettings::new("A1", "AL1")),
            transport.clone(),
            false,
        )))
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": "hello", "sessionId": "s-1" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "This is a placeholder response...");
        assert_eq!(body["implementationStatus"], "pending");
        assert_eq!(transport.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_missing_message_is_bad_request() {
        let transport = RecordingTransport::replying("{}");
        let app = test::init_service(create_app(titan_state(transport.clone()))).await;

        for payload in [json!({}), json!({ "message": "" }), json!({ "message": "  " })] {
            let req = test::TestRequest::post()
                .uri("/chat")
                .set_json(&payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", payload);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Message is required" }));
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(create_app(titan_state(RecordingTransport::replying("{}"))))
            .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"message\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["error"].as_str().unwrap().starts_with("Invalid request body"),
            "{}",
            body
        );

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": 42 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_router_failure_hides_details() {
        let transport = RecordingTransport::failing(TransportError::Throttled("slow down".into()));
        let app = test::init_service(create_app(titan_state(transport))).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }

    #[actix_web::test]
    async fn test_router_failure_details_when_enabled() {
        let transport = RecordingTransport::failing(TransportError::Throttled("slow down".into()));
        let app = test::init_service(create_app(state(
            fixtures::model_config("amazon.titan-text-express-v1"),
            transport,
            true,
        )))
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(body["details"].as_str().unwrap().contains("slow down"));
    }

    #[actix_web::test]
    async fn test_cors_preflight() {
        let app = test::init_service(create_app(titan_state(RecordingTransport::replying("{}"))))
            .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/chat")
            .insert_header((header::ORIGIN, "https://console.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let headers = resp.headers();
        assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert_eq!(headers.get(header::ACCESS_CONTROL_MAX_AGE).unwrap(), "3600");
        let methods = headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("POST"));
    }
}
