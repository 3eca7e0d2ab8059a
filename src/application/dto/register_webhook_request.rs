// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 注册请求
///
/// 两个字段都必须存在且非空；缺失时反序列化为 `None`，由校验统一报告。
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct RegisterWebhookRequest {
    #[validate(required, length(min = 1))]
    pub app_name: Option<String>,
    #[validate(required, length(min = 1))]
    pub webhook_url: Option<String>,
}

impl RegisterWebhookRequest {
    pub fn new(app_name: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        Self {
            app_name: Some(app_name.into()),
            webhook_url: Some(webhook_url.into()),
        }
    }
}
