//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CommonStudentsResponse, NotificationRequest, RecipientsResponse, RegisterRequest,
    SuspendRequest, TeacherSelector,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Student endpoints
        super::students::common_students,
        super::students::register_students,
        super::students::suspend_student,
        // Notification endpoints
        super::notifications::retrieve_for_notifications,
    ),
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Teacher-student roster administration: registration, suspension and notification recipients.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Students", description = "Roster listing, registration and suspension"),
        (name = "Notifications", description = "Notification recipient resolution"),
    ),
    components(
        schemas(
            // Students
            RegisterRequest,
            SuspendRequest,
            CommonStudentsResponse,
            // Notifications
            TeacherSelector,
            NotificationRequest,
            RecipientsResponse,
        )
    )
)]
pub struct ApiDoc;

/// OpenAPI document with every path mounted under `api_prefix`
pub fn api_doc(api_prefix: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let base = api_prefix.trim_end_matches('/');
    doc.paths.paths = std::mem::take(&mut doc.paths.paths)
        .into_iter()
        .map(|(path, item)| (format!("{}{}", base, path), item))
        .collect();
    doc
}
