//! Student Routes - Roster listing, registration and suspension
//!
//! HTTP handlers that check required fields and delegate to the
//! application services.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{non_empty, CommonStudentsResponse, RegisterRequest, SuspendRequest};
use crate::AppState;

use super::ApiError;

/// List students common to the given teachers
///
/// Without any `teacher` parameter every student is listed.
#[utoipa::path(
    get,
    path = "/commonstudents",
    params(
        ("teacher" = Option<Vec<String>>, Query, description = "Teacher email, may be repeated")
    ),
    responses(
        (status = 200, description = "Student emails", body = CommonStudentsResponse),
        (status = 400, description = "Request failed", body = String)
    ),
    tag = "Students"
)]
pub async fn common_students(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<CommonStudentsResponse>, ApiError> {
    let teachers: Vec<String> = params
        .into_iter()
        .filter(|(key, value)| key == "teacher" && !value.is_empty())
        .map(|(_, value)| value)
        .collect();

    let students = if teachers.is_empty() {
        state.roster_service.list_all_students().await?
    } else {
        state
            .roster_service
            .list_students_by_teachers(&teachers)
            .await?
    };

    Ok(Json(CommonStudentsResponse { students }))
}

/// Register students under a teacher
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 204, description = "Students registered"),
        (status = 400, description = "Missing parameters or request failed", body = String)
    ),
    tag = "Students"
)]
pub async fn register_students(
    State(state): State<AppState>,
    payload: Option<Json<RegisterRequest>>,
) -> Result<StatusCode, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let (teacher, students) = match (non_empty(payload.teacher), payload.students) {
        (Some(teacher), Some(students)) => (teacher, students),
        (teacher, students) => {
            return Err(ApiError::missing([
                ("teacher", teacher.is_none()),
                ("students", students.is_none()),
            ]))
        }
    };

    state
        .registration_service
        .assign_students_to_teacher(&students, &teacher)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Suspend a student
#[utoipa::path(
    post,
    path = "/suspend",
    request_body = SuspendRequest,
    responses(
        (status = 204, description = "Student suspended"),
        (status = 400, description = "Missing parameter or request failed", body = String)
    ),
    tag = "Students"
)]
pub async fn suspend_student(
    State(state): State<AppState>,
    payload: Option<Json<SuspendRequest>>,
) -> Result<StatusCode, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let student =
        non_empty(payload.student).ok_or_else(|| ApiError::missing([("student", true)]))?;

    state.suspension_service.suspend_student(&student).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/commonstudents", get(common_students))
        .route("/register", post(register_students))
        .route("/suspend", post(suspend_student))
}
