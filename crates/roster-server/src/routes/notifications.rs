//! Notification Routes - Recipient resolution

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{non_empty, NotificationRequest, RecipientsResponse};
use crate::AppState;

use super::ApiError;

/// Retrieve the students who should receive a notification
///
/// Recipients are the active students common to `teacher` plus every
/// active student @-mentioned in `notification`.
#[utoipa::path(
    post,
    path = "/retrievefornotifications",
    request_body = NotificationRequest,
    responses(
        (status = 200, description = "Notification recipients", body = RecipientsResponse),
        (status = 400, description = "Missing parameters or request failed", body = String)
    ),
    tag = "Notifications"
)]
pub async fn retrieve_for_notifications(
    State(state): State<AppState>,
    payload: Option<Json<NotificationRequest>>,
) -> Result<Json<RecipientsResponse>, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let teacher = payload.teacher.and_then(|t| t.present());
    let (teacher, notification) = match (teacher, non_empty(payload.notification)) {
        (Some(teacher), Some(notification)) => (teacher, notification),
        (teacher, notification) => {
            return Err(ApiError::missing([
                ("teacher", teacher.is_none()),
                ("notification", notification.is_none()),
            ]))
        }
    };

    let recipients = state
        .notification_service
        .resolve_recipients(&teacher.into_vec(), &notification)
        .await?;

    Ok(Json(RecipientsResponse { recipients }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/retrievefornotifications", post(retrieve_for_notifications))
}
