// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{AppUsage, WebhookRegistration};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 必填字段为空，未执行写入
    #[error("{0}")]
    Validation(String),
    /// 数据库错误
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Webhook仓库特质
///
/// 定义注册表的数据访问接口。注册记录只追加，没有更新和删除操作。
#[async_trait]
pub trait WebhookRepository: Send + Sync {
    /// 插入一条注册记录并返回新分配的ID
    ///
    /// 任一字段为空时返回 `RepositoryError::Validation`
    async fn insert(&self, app_name: &str, webhook_url: &str) -> Result<i32, RepositoryError>;
    /// 列出全部注册记录
    async fn list_all(&self) -> Result<Vec<WebhookRegistration>, RepositoryError>;
    /// 按应用名称统计注册数量
    async fn usage_by_app(&self) -> Result<Vec<AppUsage>, RepositoryError>;
}
