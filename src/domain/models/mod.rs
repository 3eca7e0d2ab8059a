// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体：
/// - 网络钩子（webhook）：注册记录、触发事件以及逐目标的投递结果
pub mod webhook;
