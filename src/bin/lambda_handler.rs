//! AWS Lambda handler for the planner
//!
//! Accepts assumptions as URL query parameters (the same keys share links
//! use) or as a JSON body, and returns the inputs, the 12-month results and
//! a share query as JSON.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use std::collections::HashMap;

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Serialize;

use seo_planner::report::{to_json_string, ProjectionResponse};
use seo_planner::{share, PlannerState, SimulationInputs};

/// Function URL response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FunctionUrlResponse {
    status_code: u16,
    headers: HashMap<String, String>,
    body: String,
    is_base64_encoded: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn json_response(status_code: u16, body: String) -> FunctionUrlResponse {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

    FunctionUrlResponse {
        status_code,
        headers,
        body,
        is_base64_encoded: false,
    }
}

fn error_response(status_code: u16, message: String) -> FunctionUrlResponse {
    let body = to_json_string(&ErrorBody { error: message.clone() })
        .unwrap_or_else(|_| format!("{{\"error\":{:?}}}", message));
    json_response(status_code, body)
}

/// Defaults, then the JSON body, then query parameters
fn resolve_inputs(body: Option<&str>, is_base64: bool, query: Option<&str>) -> Result<SimulationInputs, String> {
    let mut inputs = match body.map(str::trim).filter(|b| !b.is_empty()) {
        Some(_) if is_base64 => return Err("base64-encoded bodies are not supported".to_string()),
        Some(body) => serde_json::from_str(body).map_err(|e| format!("invalid inputs json: {}", e))?,
        None => SimulationInputs::default(),
    };

    if let Some(query) = query {
        share::apply_query(&mut inputs, query);
    }

    Ok(inputs)
}

fn handle(request: &LambdaFunctionUrlRequest) -> FunctionUrlResponse {
    let inputs = match resolve_inputs(
        request.body.as_deref(),
        request.is_base64_encoded,
        request.raw_query_string.as_deref(),
    ) {
        Ok(inputs) => inputs,
        Err(message) => {
            log::warn!("Rejected request: {}", message);
            return error_response(400, message);
        }
    };

    let (inputs, results) = PlannerState::new(inputs).into_parts();
    log::info!("Projected inputs {:?}, ROI month {:?}", inputs, results.roi_month);

    match to_json_string(&ProjectionResponse::new(inputs, results)) {
        Ok(body) => json_response(200, body),
        Err(e) => error_response(500, e.to_string()),
    }
}

async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<FunctionUrlResponse, Error> {
    Ok(handle(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_body_or_query() {
        let inputs = resolve_inputs(None, false, None).unwrap();
        assert_eq!(inputs, SimulationInputs::default());
    }

    #[test]
    fn test_query_overrides_body() {
        let inputs = resolve_inputs(
            Some(r#"{"cltv": 900, "ramp_up": 3}"#),
            false,
            Some("cltv=1200&monthly_expense=abc"),
        )
        .unwrap();
        assert_eq!(inputs.cltv, 1200.0);
        assert_eq!(inputs.ramp_up, 3.0);
        assert_eq!(inputs.monthly_expense, 0.0);
    }

    #[test]
    fn test_query_with_url_valued_parameter() {
        let inputs = resolve_inputs(None, false, Some("utm_source=https://news.example.com/post&lead_cr=15")).unwrap();
        assert_eq!(inputs.lead_cr, 15.0);
        assert_eq!(inputs.cltv, 1500.0);
    }

    #[test]
    fn test_bad_body_is_rejected() {
        assert!(resolve_inputs(Some("{oops"), false, None).is_err());
        assert!(resolve_inputs(Some("eyJ9"), true, None).is_err());
        assert!(resolve_inputs(Some("   "), false, None).is_ok());
    }

    #[test]
    fn test_error_response_shape() {
        let response = error_response(400, "invalid inputs json".to_string());
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"invalid inputs json"}"#);
        assert_eq!(response.headers["Content-Type"], "application/json");
    }
}
