// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;
use crate::infrastructure::services::webhook_service_impl::WebhookServiceImpl;
use crate::presentation::handlers::{app_handler, webhook_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，仓库和投递服务需要通过 `Extension` 注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let webhook_routes = Router::new()
        .route(
            "/api/webhooks/register",
            post(webhook_handler::register_webhook::<WebhookRepoImpl>),
        )
        .route(
            "/api/webhooks",
            get(webhook_handler::list_webhooks::<WebhookRepoImpl>),
        )
        .route(
            "/api/webhooks/",
            get(webhook_handler::list_webhooks::<WebhookRepoImpl>),
        )
        .route(
            "/api/webhooks/trigger",
            post(webhook_handler::trigger_webhooks::<WebhookRepoImpl, WebhookServiceImpl>),
        )
        .route(
            "/api/apps/usage",
            get(app_handler::app_usage::<WebhookRepoImpl>),
        );

    Router::new().merge(public_routes).merge(webhook_routes)
}

/// 组装完整应用
///
/// 注入共享的仓库与投递服务，并挂载请求追踪和 CORS 中间件
pub fn app(webhook_repo: Arc<WebhookRepoImpl>, webhook_service: Arc<WebhookServiceImpl>) -> Router {
    routes()
        .layer(Extension(webhook_repo))
        .layer(Extension(webhook_service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 健康检查端点
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
