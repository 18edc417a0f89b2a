use crate::infra::{AppState, SiteContext};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::Utc;
use datapace::calculators::{
    growth, maturity, roi, GrowthProjection, GrowthProjectionInput, MaturityResult, QuizResponse,
    RoiEstimate, RoiInput,
};
use datapace::catalog::{blog, case_studies, faqs, portfolio, services, testimonials};
use datapace::chat;
use datapace::error::AppError;
use datapace::leads::{lead_router, LeadIntakeService, LeadRepository};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Optional follow-up requested alongside an ROI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) enum RoiAction {
    #[serde(rename = "next-steps")]
    NextSteps,
    #[serde(rename = "generate-report")]
    GenerateReport,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoiCalculationRequest {
    #[serde(flatten)]
    pub(crate) input: RoiInput,
    #[serde(default)]
    pub(crate) action: Option<RoiAction>,
    #[serde(default)]
    pub(crate) email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoiCalculationResponse {
    #[serde(flatten)]
    pub(crate) estimate: RoiEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) next_steps: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) report_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MaturityRequest {
    pub(crate) responses: Vec<QuizResponse>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TestimonialQuery {
    pub(crate) industry: Option<String>,
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BlogQuery {
    pub(crate) category: Option<String>,
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FaqQuery {
    pub(crate) category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CaseStudyRequest {
    pub(crate) id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceDetailRequest {
    #[serde(default, rename = "serviceId")]
    pub(crate) service_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    pub(crate) message: Option<String>,
    #[serde(default, rename = "sessionId")]
    pub(crate) session_id: Option<String>,
}

pub(crate) fn with_site_routes<R>(service: Arc<LeadIntakeService<R>>) -> axum::Router
where
    R: LeadRepository + 'static,
{
    lead_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/growth-projection",
            axum::routing::post(growth_projection_endpoint),
        )
        .route(
            "/api/v1/roi-calculator",
            axum::routing::post(roi_calculator_endpoint),
        )
        .route(
            "/api/v1/data-maturity",
            axum::routing::post(data_maturity_endpoint),
        )
        .route("/api/v1/portfolio", axum::routing::get(portfolio_endpoint))
        .route(
            "/api/v1/testimonials",
            axum::routing::get(testimonials_endpoint),
        )
        .route("/api/v1/blog-posts", axum::routing::get(blog_endpoint))
        .route("/api/v1/faqs", axum::routing::get(faqs_endpoint))
        .route(
            "/api/v1/case-studies",
            axum::routing::post(case_study_endpoint),
        )
        .route(
            "/api/v1/service-details",
            axum::routing::post(service_details_endpoint),
        )
        .route(
            "/api/v1/chat-messages",
            axum::routing::post(chat_messages_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn growth_projection_endpoint(
    Json(input): Json<GrowthProjectionInput>,
) -> Result<Json<GrowthProjection>, AppError> {
    let projection = growth::project(&input)?;
    Ok(Json(projection))
}

pub(crate) async fn roi_calculator_endpoint(
    Extension(site): Extension<SiteContext>,
    Json(request): Json<RoiCalculationRequest>,
) -> Result<Json<RoiCalculationResponse>, AppError> {
    let estimate = roi::estimate(&request.input)?;

    let response = match request.action {
        None => RoiCalculationResponse {
            estimate,
            next_steps: None,
            report_url: None,
            message: None,
        },
        Some(RoiAction::NextSteps) => {
            let steps = roi::next_steps(estimate.roi_percent);
            RoiCalculationResponse {
                estimate,
                next_steps: Some(steps),
                report_url: None,
                message: None,
            }
        }
        Some(RoiAction::GenerateReport) => {
            let email_provided = request
                .email
                .as_deref()
                .map(str::trim)
                .is_some_and(|email| !email.is_empty());
            if !email_provided {
                return Err(datapace::calculators::CalculatorError::InvalidInput(
                    "email is required to generate a report".to_string(),
                )
                .into());
            }

            let report_url = format!(
                "{}/reports/roi-{}.pdf",
                site.public_base_url,
                Utc::now().timestamp_millis()
            );
            RoiCalculationResponse {
                estimate,
                next_steps: Some(&roi::REPORT_NEXT_STEPS),
                report_url: Some(report_url),
                message: Some("Your detailed ROI report is ready"),
            }
        }
    };

    Ok(Json(response))
}

pub(crate) async fn data_maturity_endpoint(
    Json(request): Json<MaturityRequest>,
) -> Result<Json<MaturityResult>, AppError> {
    let result = maturity::score(&request.responses)?;
    Ok(Json(result))
}

pub(crate) async fn portfolio_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "items": portfolio::items() }))
}

pub(crate) async fn testimonials_endpoint(
    Query(query): Query<TestimonialQuery>,
) -> Json<serde_json::Value> {
    let limit = query.limit.unwrap_or(testimonials::DEFAULT_LIMIT);
    let entries = testimonials::filter(query.industry.as_deref(), limit);
    Json(json!({ "testimonials": entries }))
}

pub(crate) async fn blog_endpoint(Query(query): Query<BlogQuery>) -> Json<serde_json::Value> {
    let limit = query.limit.unwrap_or(blog::DEFAULT_LIMIT);
    let posts = blog::filter(query.category.as_deref(), limit);
    Json(json!({ "posts": posts }))
}

pub(crate) async fn faqs_endpoint(Query(query): Query<FaqQuery>) -> Json<serde_json::Value> {
    let entries = faqs::filter(query.category.as_deref());
    Json(json!({ "faqs": entries }))
}

pub(crate) async fn case_study_endpoint(Json(request): Json<CaseStudyRequest>) -> Response {
    match case_studies::find(&request.id) {
        Some(study) => Json(study).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Case study not found" })),
        )
            .into_response(),
    }
}

pub(crate) async fn service_details_endpoint(
    Json(request): Json<ServiceDetailRequest>,
) -> Response {
    let service_id = request
        .service_id
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if service_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "serviceId is required" })),
        )
            .into_response();
    }

    match services::find(service_id) {
        Some(detail) => Json(detail).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Service not found" })),
        )
            .into_response(),
    }
}

pub(crate) async fn chat_messages_endpoint(Json(request): Json<ChatRequest>) -> Response {
    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let session_id = request
        .session_id
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if message.is_empty() || session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "message and sessionId are required" })),
        )
            .into_response();
    }

    let reply = chat::auto_reply(message);
    Json(json!({ "response": reply, "sessionId": session_id })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapace::calculators::ServiceLevel;

    fn roi_input() -> RoiInput {
        RoiInput {
            data_volume_gb: 500.0,
            current_efficiency_percent: 30.0,
            service_level: ServiceLevel::Standard,
            industry: None,
        }
    }

    fn site_context() -> Extension<SiteContext> {
        Extension(SiteContext {
            public_base_url: Arc::from("https://datapace.example.com"),
        })
    }

    #[tokio::test]
    async fn roi_calculator_returns_plain_estimate_without_action() {
        let request = RoiCalculationRequest {
            input: roi_input(),
            action: None,
            email: None,
        };

        let Json(body) = roi_calculator_endpoint(site_context(), Json(request))
            .await
            .expect("estimate computes");

        assert_eq!(body.estimate.roi_percent, 614);
        assert!(body.next_steps.is_none());
        assert!(body.report_url.is_none());
    }

    #[tokio::test]
    async fn roi_calculator_report_requires_email() {
        let request = RoiCalculationRequest {
            input: roi_input(),
            action: Some(RoiAction::GenerateReport),
            email: Some("  ".to_string()),
        };

        let result = roi_calculator_endpoint(site_context(), Json(request)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn roi_calculator_report_synthesizes_url() {
        let request = RoiCalculationRequest {
            input: roi_input(),
            action: Some(RoiAction::GenerateReport),
            email: Some("dana@example.com".to_string()),
        };

        let Json(body) = roi_calculator_endpoint(site_context(), Json(request))
            .await
            .expect("estimate computes");

        let url = body.report_url.expect("report url present");
        assert!(url.starts_with("https://datapace.example.com/reports/roi-"));
        assert!(url.ends_with(".pdf"));
        assert_eq!(body.next_steps, Some(&roi::REPORT_NEXT_STEPS[..]));
    }

    #[tokio::test]
    async fn data_maturity_scores_a_full_assessment() {
        let responses = (1..=5)
            .map(|id| QuizResponse { id, answer: 4 })
            .collect::<Vec<_>>();

        let Json(result) = data_maturity_endpoint(Json(MaturityRequest { responses }))
            .await
            .expect("valid assessment");

        assert_eq!(result.total_score, 20);
    }

    #[tokio::test]
    async fn chat_endpoint_requires_message_and_session() {
        let response = chat_messages_endpoint(Json(ChatRequest {
            message: Some("pricing?".to_string()),
            session_id: None,
        }))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_endpoint_echoes_session_id() {
        let response = chat_messages_endpoint(Json(ChatRequest {
            message: Some("do you have a demo?".to_string()),
            session_id: Some("session-9".to_string()),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_case_study_returns_404() {
        let response = case_study_endpoint(Json(CaseStudyRequest {
            id: "unknown-study".to_string(),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn blank_service_id_is_rejected() {
        let response = service_details_endpoint(Json(ServiceDetailRequest {
            service_id: Some("  ".to_string()),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn known_service_id_returns_detail() {
        let response = service_details_endpoint(Json(ServiceDetailRequest {
            service_id: Some("data-warehouse".to_string()),
        }))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
