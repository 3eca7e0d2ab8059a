// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::AppUsage;
use crate::domain::repositories::webhook_repository::{RepositoryError, WebhookRepository};
use std::sync::Arc;

/// 应用使用情况服务
pub struct UsageService<R: WebhookRepository> {
    repo: Arc<R>,
}

impl<R: WebhookRepository> UsageService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 每个应用名称一条记录，按名称排序
    pub async fn usage(&self) -> Result<Vec<AppUsage>, RepositoryError> {
        let mut usage = self.repo.usage_by_app().await?;
        usage.sort_by(|a, b| a.app_name.cmp(&b.app_name));
        Ok(usage)
    }
}
