// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::DeliveryOutcome;
use serde::{Deserialize, Serialize};

pub const REGISTERED_MESSAGE: &str = "Webhook registered successfully";
pub const TRIGGERED_MESSAGE: &str = "Webhooks triggered";

/// 注册回执
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub id: i32,
    pub message: String,
}

impl RegistrationReceipt {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            message: REGISTERED_MESSAGE.to_string(),
        }
    }
}

/// 触发报告
///
/// `results` 的顺序与注册表的列出顺序一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerReport {
    pub message: String,
    pub results: Vec<DeliveryOutcome>,
}

impl TriggerReport {
    pub fn new(results: Vec<DeliveryOutcome>) -> Self {
        Self {
            message: TRIGGERED_MESSAGE.to_string(),
            results,
        }
    }
}
