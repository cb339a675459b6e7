use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::services::activities_service;
use crate::web::SharedDirectory;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub async fn activities_handler(State(directory): State<SharedDirectory>) -> impl IntoResponse {
    Json(activities_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<SharedDirectory>,
) -> Response {
    let Some(email) = query.email else {
        return missing_email();
    };

    match activities_service::sign_up(&directory, &activity_name, &email).await {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<SharedDirectory>,
) -> Response {
    let Some(email) = query.email else {
        return missing_email();
    };

    match activities_service::unregister(&directory, &activity_name, &email).await {
        Ok(confirmation) => Json(confirmation).into_response(),
        Err(e) => e.into_response(),
    }
}

fn missing_email() -> Response {
    tracing::warn!("activity command without email query parameter");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "detail": "Missing required query parameter: email" })),
    )
        .into_response()
}
