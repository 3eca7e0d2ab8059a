// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use hookrelay::config::settings::DispatchSettings;
use hookrelay::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;
use hookrelay::infrastructure::services::webhook_service_impl::WebhookServiceImpl;
use hookrelay::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tokio::net::TcpListener;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub webhook_repo: Arc<WebhookRepoImpl>,
}

/// 使用内存 SQLite 数据库创建测试应用
pub async fn create_test_app() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db_pool = Arc::new(db);

    let webhook_repo = Arc::new(WebhookRepoImpl::new(db_pool.clone()));
    let webhook_service = Arc::new(
        WebhookServiceImpl::new(&DispatchSettings::default())
            .expect("Failed to build webhook service"),
    );

    let app = routes::app(webhook_repo.clone(), webhook_service);
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        db_pool,
        webhook_repo,
    }
}

/// 返回一个没有监听者的本地地址，连接会被拒绝
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/webhook", addr)
}
