// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::register_webhook_request::RegisterWebhookRequest;
use crate::application::dto::webhook_response::RegistrationReceipt;
use crate::domain::models::webhook::WebhookRegistration;
use crate::domain::repositories::webhook_repository::{RepositoryError, WebhookRepository};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// 注册服务错误类型
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// 缺少 app_name 或 webhook_url
    #[error("Missing app_name or webhook_url")]
    MissingField,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 注册服务
///
/// 注册表写入与读取路径的薄封装
pub struct RegistrationService<R: WebhookRepository> {
    repo: Arc<R>,
}

impl<R: WebhookRepository> RegistrationService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 注册新的回调地址
    ///
    /// 校验失败时不会写入存储
    ///
    /// # 返回值
    ///
    /// * `Ok(RegistrationReceipt)` - 新分配的ID及确认消息
    /// * `Err(RegistrationError)` - 字段缺失或存储失败
    pub async fn register(
        &self,
        request: RegisterWebhookRequest,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        if let Err(errors) = request.validate() {
            debug!("Rejected webhook registration: {}", errors);
            return Err(RegistrationError::MissingField);
        }

        let (Some(app_name), Some(webhook_url)) = (request.app_name, request.webhook_url) else {
            return Err(RegistrationError::MissingField);
        };

        let id = self.repo.insert(&app_name, &webhook_url).await?;
        counter!("webhook_registrations_total").increment(1);
        info!("Registered webhook {} for app {}", id, app_name);

        Ok(RegistrationReceipt::new(id))
    }

    /// 列出全部注册记录，不过滤、不分页
    pub async fn list(&self) -> Result<Vec<WebhookRegistration>, RepositoryError> {
        self.repo.list_all().await
    }
}
