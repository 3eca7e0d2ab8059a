// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::webhook_repository::RepositoryError;
use crate::domain::services::dispatch_service::DispatchError;
use crate::domain::services::registration_service::RegistrationError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一渲染为 `{"error": <message>}`。
/// 存储层错误的消息原样返回给调用方。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return rejection.status();
        }

        let repository_error = match self.0.downcast_ref::<RegistrationError>() {
            Some(RegistrationError::MissingField) => return StatusCode::BAD_REQUEST,
            Some(RegistrationError::Repository(e)) => Some(e),
            None => match self.0.downcast_ref::<DispatchError>() {
                Some(DispatchError::Repository(e)) => Some(e),
                None => self.0.downcast_ref::<RepositoryError>(),
            },
        };

        match repository_error {
            Some(RepositoryError::Validation(_)) => StatusCode::BAD_REQUEST,
            Some(RepositoryError::Database(_)) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {}", error_message);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
