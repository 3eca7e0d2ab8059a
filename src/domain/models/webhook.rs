// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};

/// Webhook注册实体
///
/// 表示一个已登记的回调地址。注册记录只追加、不修改、不删除，
/// `id` 由存储层在插入时分配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRegistration {
    /// 存储层分配的自增标识符
    pub id: i32,
    /// 应用名称，不要求唯一
    pub app_name: String,
    /// 回调URL，不校验格式
    pub webhook_url: String,
}

/// 触发事件
///
/// 序列化结果即为投递给每个目标的请求体：`{"event": ..., "data": ...}`。
/// 两个字段都可以是任意JSON值，请求中缺少的字段不会出现在投递的请求体里。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// 事件标识，通常是字符串
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub event: Option<serde_json::Value>,
    /// 事件负载，原样转发
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<serde_json::Value>,
}

/// 出现的字段（包括显式的 `null`）都是 `Some`，只有缺失的字段是 `None`
fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// 单个目标的投递状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// 目标返回了2xx响应
    Success,
    /// 传输错误或非2xx响应
    Failed,
}

/// 单个目标的投递结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOutcome {
    pub webhook_url: String,
    pub status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeliveryOutcome {
    pub fn success(webhook_url: String) -> Self {
        Self {
            webhook_url,
            status: DeliveryStatus::Success,
            error: None,
        }
    }

    pub fn failed(webhook_url: String, error: String) -> Self {
        Self {
            webhook_url,
            status: DeliveryStatus::Failed,
            error: Some(error),
        }
    }
}

/// 应用使用情况
///
/// 按应用名称聚合的注册数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsage {
    pub app_name: String,
    pub webhook_count: i64,
}
