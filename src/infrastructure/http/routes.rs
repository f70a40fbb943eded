//! HTTP Routes
//!
//! API Endpoints:
//! - /ping             GET     健康检查
//! - /stations         POST    创建站点
//! - /stations         GET     站点列表
//! - /stations/:id     DELETE  删除站点
//! - /lines            POST    创建线路
//! - /lines            GET     线路列表
//! - /lines/:id        GET     线路详情
//! - /lines/:id        PUT     修改线路
//! - /lines/:id        DELETE  删除线路

use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(station_routes())
        .merge(line_routes())
}

/// Station 路由
fn station_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/stations",
            get(handlers::show_stations).post(handlers::create_station),
        )
        .route("/stations/:id", delete(handlers::delete_station))
}

/// Line 路由
fn line_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lines", get(handlers::get_lines).post(handlers::create_line))
        .route(
            "/lines/:id",
            get(handlers::get_line)
                .put(handlers::update_line)
                .delete(handlers::delete_line),
        )
}
