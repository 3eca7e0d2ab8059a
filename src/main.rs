// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use hookrelay::config::settings::Settings;
use hookrelay::infrastructure::database::connection;
use hookrelay::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;
use hookrelay::infrastructure::services::webhook_service_impl::WebhookServiceImpl;
use hookrelay::presentation::routes;
use hookrelay::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging and metrics
    telemetry::init_telemetry(&settings.log);
    info!("Starting hookrelay...");
    hookrelay::infrastructure::metrics::init_metrics(&settings.metrics)?;

    // 3. Connect to database, opened once and shared for the process lifetime
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    // Schema bootstrap, safe on every startup
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let webhook_repository = Arc::new(WebhookRepoImpl::new(db.clone()));
    let webhook_service = Arc::new(WebhookServiceImpl::new(&settings.dispatch)?);

    // 5. Start HTTP server
    let app = routes::app(webhook_repository, webhook_service);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Webhook service running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
