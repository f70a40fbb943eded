//! Subway - 地铁站点与线路管理服务

use std::sync::Arc;

use subway::application::{LineRepositoryPort, StationRepositoryPort};
use subway::config::{load_config, print_config, AppConfig, DatabaseBackend};
use subway::infrastructure::http::{AppState, HttpServer, ServerConfig};
use subway::infrastructure::memory::{InMemoryLineRepository, InMemoryStationRepository};
use subway::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteLineRepository, SqliteStationRepository,
};

/// 初始化日志（RUST_LOG 优先于配置文件中的级别）
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},subway={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 根据配置创建仓储
async fn create_repositories(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn StationRepositoryPort>, Arc<dyn LineRepositoryPort>)> {
    match config.database.backend {
        DatabaseBackend::Sqlite => {
            // 确保数据目录存在
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            let stations: Arc<dyn StationRepositoryPort> =
                Arc::new(SqliteStationRepository::new(pool.clone()));
            let lines: Arc<dyn LineRepositoryPort> = Arc::new(SqliteLineRepository::new(pool));
            Ok((stations, lines))
        }
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory repositories, data will be lost on shutdown");
            let stations = Arc::new(InMemoryStationRepository::new());
            let lines: Arc<dyn LineRepositoryPort> =
                Arc::new(InMemoryLineRepository::new(stations.clone()));
            let stations: Arc<dyn StationRepositoryPort> = stations;
            Ok((stations, lines))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Subway - 地铁站点与线路管理服务");
    print_config(&config);

    let (station_repo, line_repo) = create_repositories(&config).await?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(station_repo, line_repo);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
