// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::{AppUsage, WebhookRegistration};
use crate::domain::repositories::webhook_repository::{RepositoryError, WebhookRepository};
use crate::infrastructure::database::entities::webhook;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// Webhook仓库实现
#[derive(Clone)]
pub struct WebhookRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl WebhookRepoImpl {
    /// 创建新的Webhook仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct AppUsageRow {
    app_name: String,
    webhook_count: i64,
}

#[async_trait]
impl WebhookRepository for WebhookRepoImpl {
    async fn insert(&self, app_name: &str, webhook_url: &str) -> Result<i32, RepositoryError> {
        if app_name.is_empty() || webhook_url.is_empty() {
            return Err(RepositoryError::Validation(
                "app_name and webhook_url cannot be empty".to_string(),
            ));
        }

        let model = webhook::ActiveModel {
            app_name: Set(app_name.to_owned()),
            webhook_url: Set(webhook_url.to_owned()),
            ..Default::default()
        };

        let result = webhook::Entity::insert(model)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn list_all(&self) -> Result<Vec<WebhookRegistration>, RepositoryError> {
        let models = webhook::Entity::find()
            .order_by_asc(webhook::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn usage_by_app(&self) -> Result<Vec<AppUsage>, RepositoryError> {
        let rows = webhook::Entity::find()
            .select_only()
            .column(webhook::Column::AppName)
            .column_as(Expr::col(webhook::Column::Id).count(), "webhook_count")
            .group_by(webhook::Column::AppName)
            .order_by_asc(webhook::Column::AppName)
            .into_model::<AppUsageRow>()
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AppUsage {
                app_name: row.app_name,
                webhook_count: row.webhook_count,
            })
            .collect())
    }
}

impl From<webhook::Model> for WebhookRegistration {
    fn from(model: webhook::Model) -> Self {
        Self {
            id: model.id,
            app_name: model.app_name,
            webhook_url: model.webhook_url,
        }
    }
}
