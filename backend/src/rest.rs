use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{CreateRsvpRequest, CreateRsvpResponse, RsvpListResponse};
use crate::domain::{RsvpService, SubmitError};
use tracing::info;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub rsvp_service: RsvpService,
}

impl AppState {
    pub fn new(rsvp_service: RsvpService) -> Self {
        Self { rsvp_service }
    }
}

/// Axum handler function for POST /api/rsvp
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Json(request): Json<CreateRsvpRequest>,
) -> impl IntoResponse {
    info!("POST /api/rsvp - from: {}", request.name);

    match state.rsvp_service.submit(request).await {
        Ok(record) => {
            let response = CreateRsvpResponse {
                id: record.id,
                success_message: "참석 의사가 성공적으로 전달되었습니다.".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(SubmitError::Validation(e)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Error storing RSVP: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error storing RSVP").into_response()
        }
    }
}

/// Axum handler function for GET /api/rsvps
pub async fn list_rsvps(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/rsvps");

    match state.rsvp_service.list().await {
        Ok(rsvps) => (StatusCode::OK, Json(RsvpListResponse { rsvps })).into_response(),
        Err(e) => {
            tracing::error!("Error listing RSVPs: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing RSVPs").into_response()
        }
    }
}
