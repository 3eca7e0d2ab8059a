// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::webhook_response::TriggerReport;
use crate::domain::models::webhook::{DeliveryOutcome, TriggerEvent};
use crate::domain::repositories::webhook_repository::{RepositoryError, WebhookRepository};
use crate::domain::services::webhook_service::WebhookService;
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// 分发服务错误类型
///
/// 只有读取注册表失败会中止一次触发，单个目标的失败记录在结果中
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 分发服务
///
/// 把一个事件尽力投递给注册表中的每个目标。目标按列出顺序逐个投递，
/// 上一个请求完成（成功或失败）后才开始下一个；没有重试，也不持久化投递结果。
pub struct DispatchService<R: WebhookRepository, S: WebhookService> {
    repo: Arc<R>,
    webhook_service: Arc<S>,
}

impl<R: WebhookRepository, S: WebhookService> DispatchService<R, S> {
    pub fn new(repo: Arc<R>, webhook_service: Arc<S>) -> Self {
        Self {
            repo,
            webhook_service,
        }
    }

    /// 触发一次广播
    ///
    /// # 参数
    ///
    /// * `event` - 事件名称与负载
    ///
    /// # 返回值
    ///
    /// * `Ok(TriggerReport)` - 每个目标一条结果，顺序与注册表一致
    /// * `Err(DispatchError)` - 读取注册表失败
    pub async fn trigger(&self, event: TriggerEvent) -> Result<TriggerReport, DispatchError> {
        let targets = self.repo.list_all().await?;
        info!(
            "Dispatching event {:?} to {} webhooks",
            event.event,
            targets.len()
        );

        let mut results = Vec::with_capacity(targets.len());
        for target in targets {
            counter!("webhook_delivery_attempts_total").increment(1);
            let start = Instant::now();

            let outcome = match self
                .webhook_service
                .send_webhook(&target.webhook_url, &event)
                .await
            {
                Ok(()) => {
                    counter!("webhook_delivery_success_total").increment(1);
                    DeliveryOutcome::success(target.webhook_url)
                }
                Err(e) => {
                    counter!("webhook_delivery_failed_total").increment(1);
                    warn!("Webhook delivery to {} failed: {}", target.webhook_url, e);
                    DeliveryOutcome::failed(target.webhook_url, e.to_string())
                }
            };

            histogram!("webhook_delivery_duration_seconds").record(start.elapsed().as_secs_f64());
            results.push(outcome);
        }

        Ok(TriggerReport::new(results))
    }
}
