// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::application::dto::register_webhook_request::RegisterWebhookRequest;
use crate::application::dto::webhook_response::{RegistrationReceipt, TriggerReport};
use crate::domain::models::webhook::{TriggerEvent, WebhookRegistration};
use crate::domain::repositories::webhook_repository::WebhookRepository;
use crate::domain::services::dispatch_service::DispatchService;
use crate::domain::services::registration_service::RegistrationService;
use crate::domain::services::webhook_service::WebhookService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::json_body::JsonBody;
use axum::{extract::rejection::JsonRejection, Extension, Json};
use std::sync::Arc;

/// POST /api/webhooks/register
///
/// 缺少请求体时按空对象处理，返回缺少字段的400
pub async fn register_webhook<R: WebhookRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    payload: Result<JsonBody<RegisterWebhookRequest>, JsonRejection>,
) -> Result<Json<RegistrationReceipt>, AppError> {
    let JsonBody(payload) = payload?;
    let service = RegistrationService::new(repo);
    let receipt = service.register(payload).await?;
    Ok(Json(receipt))
}

/// GET /api/webhooks
pub async fn list_webhooks<R: WebhookRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<WebhookRegistration>>, AppError> {
    let service = RegistrationService::new(repo);
    Ok(Json(service.list().await?))
}

/// POST /api/webhooks/trigger
///
/// 在所有目标投递完成后才返回
pub async fn trigger_webhooks<R, S>(
    Extension(repo): Extension<Arc<R>>,
    Extension(webhook_service): Extension<Arc<S>>,
    payload: Result<JsonBody<TriggerEvent>, JsonRejection>,
) -> Result<Json<TriggerReport>, AppError>
where
    R: WebhookRepository + 'static,
    S: WebhookService + 'static,
{
    let JsonBody(event) = payload?;
    let service = DispatchService::new(repo, webhook_service);
    let report = service.trigger(event).await?;
    Ok(Json(report))
}
