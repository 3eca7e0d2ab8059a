// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DispatchSettings;
use crate::domain::models::webhook::TriggerEvent;
use crate::domain::services::webhook_service::{DeliveryError, WebhookService};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

/// Webhook服务实现
///
/// 共享一个 HTTP 客户端；未配置超时时沿用客户端默认行为（不超时）
#[derive(Clone)]
pub struct WebhookServiceImpl {
    /// HTTP 客户端
    client: Client,
}

impl WebhookServiceImpl {
    /// 创建新的 Webhook 服务实现
    pub fn new(settings: &DispatchSettings) -> Result<Self, reqwest::Error> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("hookrelay/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl WebhookService for WebhookServiceImpl {
    async fn send_webhook(
        &self,
        webhook_url: &str,
        event: &TriggerEvent,
    ) -> Result<(), DeliveryError> {
        debug!("POST {}", webhook_url);

        let response = self
            .client
            .post(webhook_url)
            .json(event)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Status(status.as_u16()))
        }
    }
}
