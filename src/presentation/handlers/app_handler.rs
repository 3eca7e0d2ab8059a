// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::AppUsage;
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::usage_service::UsageService;
use crate::presentation::errors::AppError;
use axum::{Extension, Json};
use std::sync::Arc;

/// GET /api/apps/usage
pub async fn app_usage<R: WebhookRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<AppUsage>>, AppError> {
    let service = UsageService::new(repo);
    Ok(Json(service.usage().await?))
}
