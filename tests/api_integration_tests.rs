// API Integration Tests
//
// Purpose: exercise the JSON endpoints through the full router
// Run with: cargo test --test api_integration_tests

#[cfg(feature = "api")]
mod common;

#[cfg(feature = "api")]
mod api_tests {
    use super::common::*;
    use approx::assert_relative_eq;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app(None).oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Footprint Estimates
    // =========================================================================

    #[tokio::test]
    async fn test_footprint_all_zero() {
        let response = test_app(None).oneshot(get("/api/footprint")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        for category in ["transport", "electricity", "waste", "diet"] {
            assert_eq!(body["breakdown"][category], 0.0, "{}", category);
        }
        assert_eq!(body["total_monthly"], 0.0);
        assert_eq!(body["yearly_tons"], 0.0);
        assert_eq!(body["input"]["transport_mode"], "car");
        assert_eq!(body["status"]["level"], "below_average");
    }

    #[tokio::test]
    async fn test_footprint_query_per_category() {
        let app = test_app(None);

        let cases = [
            ("daily_distance_km=100&transport_mode=car", "transport", 20.0),
            ("monthly_electricity_kwh=200", "electricity", 100.0),
            ("weekly_waste_kg=10", "waste", 3.0),
            ("weekly_meat_kg=10", "diet", 25.0),
            ("daily_distance_km=50&transport_mode=bus", "transport", 4.0),
            ("daily_distance_km=50&transport_mode=train", "transport", 2.0),
        ];

        for (query, category, expected) in cases {
            let response = app
                .clone()
                .oneshot(get(&format!("/api/footprint?{}", query)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", query);
            let body = json_response(response).await;
            assert_relative_eq!(body["breakdown"][category].as_f64().unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn test_footprint_bicycle_zeroes_transport() {
        let response = test_app(None)
            .oneshot(get("/api/footprint?daily_distance_km=500&transport_mode=bicycle"))
            .await
            .unwrap();
        let body = json_response(response).await;
        assert_eq!(body["breakdown"]["transport"], 0.0);
        assert_eq!(body["chart"][0]["share"], 0.0);
    }

    #[tokio::test]
    async fn test_footprint_post_json() {
        let request = post_json(
            "/api/footprint",
            json!({
                "daily_distance_km": 100,
                "transport_mode": "car",
                "monthly_electricity_kwh": 200,
                "weekly_waste_kg": 10,
                "weekly_meat_kg": 10
            }),
        );
        let response = test_app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let total = body["total_monthly"].as_f64().unwrap();
        assert_relative_eq!(total, 148.0);
        assert_eq!(body["yearly_tons"].as_f64().unwrap(), total * 12.0 / 1000.0);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
        assert_eq!(body["chart"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_footprint_status_boundary() {
        let app = test_app(None);

        // 2000 kWh * 0.5 = 1000 kg/month -> 12 t/year
        let above = json_response(
            app.clone()
                .oneshot(get("/api/footprint?monthly_electricity_kwh=2000"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(above["status"]["level"], "above_average");
        assert_eq!(
            above["status"]["message"],
            "Your carbon footprint is above average. Consider our recommendations below."
        );

        // 1000 kWh -> 6 t/year
        let below = json_response(
            app.oneshot(get("/api/footprint?monthly_electricity_kwh=1000"))
                .await
                .unwrap(),
        )
        .await;
        assert_relative_eq!(below["yearly_tons"].as_f64().unwrap(), 6.0);
        assert_eq!(below["status"]["level"], "below_average");
    }

    #[tokio::test]
    async fn test_footprint_is_deterministic() {
        let app = test_app(None);
        let uri = "/api/footprint?daily_distance_km=37.5&transport_mode=train&weekly_meat_kg=1.2";
        let first = json_response(app.clone().oneshot(get(uri)).await.unwrap()).await;
        let second = json_response(app.oneshot(get(uri)).await.unwrap()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_footprint_invalid_mode_is_bad_request() {
        let response = test_app(None)
            .oneshot(get("/api/footprint?transport_mode=rocket"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_footprint_overflow_is_bad_request() {
        let app = test_app(None);
        for uri in [
            "/api/footprint?daily_distance_km=1e308&monthly_electricity_kwh=1e308",
            "/api/footprint?weekly_meat_kg=1e309",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
            let body = json_response(response).await;
            assert!(body["error"].as_str().unwrap().contains("finite"), "{}", uri);
        }

        let response = app
            .oneshot(post_json("/api/footprint", json!({ "monthly_electricity_kwh": 1e308, "weekly_meat_kg": 1e308 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_footprint_malformed_json_is_bad_request() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/footprint")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let response = test_app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // =========================================================================
    // Section 3: Reference Data
    // =========================================================================

    #[tokio::test]
    async fn test_emission_factors() {
        let response = test_app(None).oneshot(get("/api/emission-factors")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["transport_kg_per_km"]["car"], 0.2);
        assert_eq!(body["transport_kg_per_km"]["bus"], 0.08);
        assert_eq!(body["transport_kg_per_km"]["train"], 0.04);
        assert_eq!(body["transport_kg_per_km"]["bicycle"], 0.0);
        assert_eq!(body["electricity_kg_per_kwh"], 0.5);
        assert_eq!(body["waste_kg_per_kg"], 0.3);
        assert_eq!(body["meat_kg_per_kg"], 2.5);
        assert_eq!(body["status_threshold_tons"], 10.0);
    }

    #[tokio::test]
    async fn test_recommendations_list() {
        let response = test_app(None).oneshot(get("/api/recommendations")).await.unwrap();
        let body = json_response(response).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec!["Solar Energy", "Electric Vehicle", "Smart Home Systems", "Wind Energy"]
        );
    }

    // =========================================================================
    // Section 4: Contact Relay
    // =========================================================================

    fn contact_body() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
            "message": "Tell me about rooftop solar."
        })
    }

    #[tokio::test]
    async fn test_contact_success_forwards_payload() {
        let (url, received) = spawn_relay(StatusCode::OK, r#"{"success": true}"#).await;
        let response = test_app(Some(url))
            .oneshot(post_json("/api/contact", contact_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_response(response).await["success"], true);

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], contact_body());
    }

    #[tokio::test]
    async fn test_contact_relay_rejection_is_bad_gateway() {
        let (url, received) = spawn_relay(StatusCode::OK, r#"{"success": false}"#).await;
        let response = test_app(Some(url))
            .oneshot(post_json("/api/contact", contact_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Failed to send message. Please try again.");
        // No retry
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_contact_relay_failures_surface_identically() {
        let (server_error, _) = spawn_relay(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;
        let (garbage, _) = spawn_relay(StatusCode::OK, "<html>not json</html>").await;
        let unreachable = dead_endpoint().await;

        for url in [Some(server_error), Some(garbage), Some(unreachable), None] {
            let response = test_app(url.clone())
                .oneshot(post_json("/api/contact", contact_body()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY, "{:?}", url);
            let body = json_response(response).await;
            assert_eq!(body["error"], "Failed to send message. Please try again.");
        }
    }

    #[tokio::test]
    async fn test_contact_validation() {
        let (url, received) = spawn_relay(StatusCode::OK, r#"{"success": true}"#).await;
        let response = test_app(Some(url))
            .oneshot(post_json(
                "/api/contact",
                json!({ "name": "Ada", "email": "not-an-email", "phone": "1", "message": "hi" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("not a valid email"));
        assert!(received.lock().unwrap().is_empty());
    }
}
