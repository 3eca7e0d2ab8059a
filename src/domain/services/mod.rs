// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 注册服务（registration_service）：校验并登记回调地址，列出注册表
/// - 分发服务（dispatch_service）：把事件逐个投递给所有已注册的目标
/// - 使用情况服务（usage_service）：按应用统计注册数量
/// - Webhook服务（webhook_service）：单次投递的抽象接口
pub mod dispatch_service;
pub mod registration_service;
pub mod usage_service;
pub mod webhook_service;
