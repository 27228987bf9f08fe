//! Request extractors

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` whose rejection renders as an [`ApiError`] envelope instead of
/// axum's plain-text body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
