//! Standard API response types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Data with a metadata block, used by list endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize, M: Serialize> {
    pub data: T,
    pub meta: M,
}

impl<T: Serialize, M: Serialize> ApiResponse<T, M> {
    pub fn with_meta(data: T, meta: M) -> Self {
        Self { data, meta }
    }
}

impl<T: Serialize, M: Serialize> IntoResponse for ApiResponse<T, M> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Response for single data item
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// 201 with a body
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// 204 without a body
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
