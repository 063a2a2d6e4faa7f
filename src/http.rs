//! HTTP boundary served through AWS Lambda
//!
//! Routes:
//! - `POST /api/calculate`: JSON `{"principal": .., "termMonths": ..}` in,
//!   [`ComparisonResult`] out
//! - `GET /health`: plain-text `ok`
//!
//! Client errors map to 400, internal computation failures to 500. Error
//! bodies are `{"error": <message>, "kind": <ComparisonError::kind>}`.

use crate::comparison::{CalculationRequest, Comparator, ComparisonResult};
use crate::error::ComparisonError;
use lambda_http::http::{header, Method, StatusCode};
use lambda_http::{Body, Error, Request, Response};
use log::{error, info, warn};
use serde::Serialize;

pub const CALCULATE_PATH: &str = "/api/calculate";
pub const HEALTH_PATH: &str = "/health";

/// Error payload returned to the caller
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    kind: &'a str,
}

/// Route and answer a single request
pub async fn handle_request(comparator: &Comparator, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().clone();
    let path = normalize_path(event.uri().path());
    info!("{} {}", method, path);

    match path {
        CALCULATE_PATH if method == Method::POST => calculate(comparator, event.body()),
        HEALTH_PATH if method == Method::GET => text_response(StatusCode::OK, "ok"),
        CALCULATE_PATH | HEALTH_PATH => error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed".to_string(),
            "MethodNotAllowed",
        ),
        _ => error_response(StatusCode::NOT_FOUND, "not found".to_string(), "NotFound"),
    }
}

fn calculate(comparator: &Comparator, body: &Body) -> Result<Response<Body>, Error> {
    match parse_request(body).and_then(|request| comparator.compare_request(&request)) {
        Ok(result) => comparison_response(&result),
        Err(err) => comparison_error_response(&err),
    }
}

fn parse_request(body: &Body) -> Result<CalculationRequest, ComparisonError> {
    let bytes: &[u8] = match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    };
    serde_json::from_slice(bytes).map_err(|e| ComparisonError::MalformedRequest(e.to_string()))
}

fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn comparison_response(result: &ComparisonResult) -> Result<Response<Body>, Error> {
    let payload = serde_json::to_string(result)?;
    json_response(StatusCode::OK, payload)
}

/// Map a comparison error to 400 (client) or 500 (internal)
fn comparison_error_response(err: &ComparisonError) -> Result<Response<Body>, Error> {
    let status = if err.is_client_error() {
        warn!("rejected calculation request: {err}");
        StatusCode::BAD_REQUEST
    } else {
        if let ComparisonError::InternalComputation { detail } = err {
            error!("calculation failed: {detail}");
        }
        StatusCode::INTERNAL_SERVER_ERROR
    };
    error_response(status, err.to_string(), err.kind())
}

fn error_response(status: StatusCode, message: String, kind: &str) -> Result<Response<Body>, Error> {
    let payload = serde_json::to_string(&ErrorBody { error: message, kind })?;
    json_response(status, payload)
}

fn json_response(status: StatusCode, payload: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload))?;
    Ok(response)
}

fn text_response(status: StatusCode, text: &str) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(text))?;
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::Value;

    fn request(method: &str, path: &str, body: &str) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri(path)
            .body(Body::from(body))
            .expect("valid request")
    }

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            Body::Binary(bytes) => String::from_utf8(bytes.clone()).unwrap(),
            Body::Empty => String::new(),
        }
    }

    fn body_json(response: &Response<Body>) -> Value {
        serde_json::from_str(&body_text(response)).expect("json body")
    }

    async fn call(method: &str, path: &str, body: &str) -> Response<Body> {
        handle_request(&Comparator::default(), request(method, path, body))
            .await
            .expect("handler never fails")
    }

    #[tokio::test]
    async fn test_calculate_success() {
        let response = call("POST", "/api/calculate", r#"{"principal": 50000, "termMonths": 60}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let json = body_json(&response);
        assert_eq!(json["recommendedOption"], "A");
        assert_eq!(json["principal"], 50000.0);
        assert_eq!(json["termMonths"], 60);
        assert_eq!(json["optionA"]["label"], "Chevy Plan");
        assert_relative_eq!(json["optionA"]["totalAmount"].as_f64().unwrap(), 58_975.0, max_relative = 1e-12);
        assert_relative_eq!(json["optionB"]["monthlyPayment"].as_f64().unwrap(), 1_215.902_855_817_95, max_relative = 1e-9);
    }

    #[tokio::test]
    async fn test_validation_errors_are_bad_requests() {
        let cases = [
            (r#"{"termMonths": 60}"#, "MissingField"),
            (r#"{"principal": 0, "termMonths": 60}"#, "MissingField"),
            (r#"{"principal": 13999, "termMonths": 60}"#, "PrincipalOutOfRange"),
            (r#"{"principal": 90001, "termMonths": 60}"#, "PrincipalOutOfRange"),
            (r#"{"principal": 50000, "termMonths": 61}"#, "InvalidTerm"),
            (r#"not json"#, "MalformedRequest"),
            (r#"{"principal": "50000", "termMonths": 60}"#, "MalformedRequest"),
            ("", "MalformedRequest"),
        ];

        for (body, kind) in cases {
            let response = call("POST", "/api/calculate", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");
            let json = body_json(&response);
            assert_eq!(json["kind"], kind, "body {body}");
            assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
        }
    }

    #[tokio::test]
    async fn test_missing_field_message() {
        let response = call("POST", "/api/calculate", "{}").await;
        assert_eq!(body_json(&response)["error"], "principal and termMonths are required");
    }

    #[tokio::test]
    async fn test_internal_error_is_500_and_generic() {
        let config = crate::ComparatorConfig { bank_rate_percent: f64::MAX, ..Default::default() };
        let comparator = Comparator::new(config);
        let response = handle_request(
            &comparator,
            request("POST", "/api/calculate", r#"{"principal": 50000, "termMonths": 60}"#),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(&response);
        assert_eq!(json["kind"], "InternalComputationError");
        assert_eq!(json["error"], "error processing the calculation");
    }

    #[tokio::test]
    async fn test_health() {
        let response = call("GET", "/health", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(&response), "ok");

        let response = call("GET", "/health/", "").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_routing_errors() {
        let response = call("GET", "/api/calculate", "").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = call("POST", "/health", "").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = call("GET", "/", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(&response)["kind"], "NotFound");
    }
}
