// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::TriggerEvent;
use async_trait::async_trait;
use thiserror::Error;

/// 单次投递错误
///
/// 只记录在对应目标的投递结果中，从不向触发调用方传播
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// 连接失败、DNS解析失败、超时等传输层错误
    #[error("{0}")]
    Transport(String),
    /// 目标返回了非2xx状态码
    #[error("Request failed with status code {0}")]
    Status(u16),
}

/// Webhook服务特质
///
/// 定义向单个回调地址发送事件的核心逻辑
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// 发送Webhook事件
    ///
    /// # 参数
    ///
    /// * `webhook_url` - 目标回调地址
    /// * `event` - 触发事件，作为JSON请求体发送
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 目标返回了2xx响应
    /// * `Err(DeliveryError)` - 发送失败
    async fn send_webhook(&self, webhook_url: &str, event: &TriggerEvent)
        -> Result<(), DeliveryError>;
}
