//! LineService

use std::sync::Arc;

use crate::application::commands::handlers::{
    CreateLineHandler, DeleteLineHandler, UpdateLineHandler,
};
use crate::application::commands::{CreateLine, DeleteLine, UpdateLine};
use crate::application::dto::{
    LineRequest, LineResponse, LineUpdateRequest, LineWithStationResponse,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::handlers::{GetLineHandler, ListLinesHandler};
use crate::application::queries::{GetLine, ListLines};

/// 线路用例
pub struct LineService {
    create_line_handler: CreateLineHandler,
    update_line_handler: UpdateLineHandler,
    delete_line_handler: DeleteLineHandler,
    get_line_handler: GetLineHandler,
    list_lines_handler: ListLinesHandler,
}

impl LineService {
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            create_line_handler: CreateLineHandler::new(station_repo, line_repo.clone()),
            update_line_handler: UpdateLineHandler::new(line_repo.clone()),
            delete_line_handler: DeleteLineHandler::new(line_repo.clone()),
            get_line_handler: GetLineHandler::new(line_repo.clone()),
            list_lines_handler: ListLinesHandler::new(line_repo),
        }
    }

    pub async fn save_line(&self, request: LineRequest) -> Result<LineResponse, ApplicationError> {
        let command = CreateLine {
            name: request.name,
            color: request.color,
            up_station_id: request.up_station_id,
            down_station_id: request.down_station_id,
        };

        let line = self.create_line_handler.handle(command).await?;
        Ok(LineResponse::from_entity(&line))
    }

    pub async fn get_lines(&self) -> Result<Vec<LineWithStationResponse>, ApplicationError> {
        let lines = self.list_lines_handler.handle(ListLines).await?;
        Ok(lines.iter().map(LineWithStationResponse::from_entity).collect())
    }

    pub async fn get_line(&self, id: i64) -> Result<LineWithStationResponse, ApplicationError> {
        let line = self.get_line_handler.handle(GetLine { line_id: id }).await?;
        Ok(LineWithStationResponse::from_entity(&line))
    }

    pub async fn update_line(
        &self,
        id: i64,
        request: LineUpdateRequest,
    ) -> Result<LineWithStationResponse, ApplicationError> {
        let command = UpdateLine {
            line_id: id,
            name: request.name,
            color: request.color,
        };

        let line = self.update_line_handler.handle(command).await?;
        Ok(LineWithStationResponse::from_entity(&line))
    }

    pub async fn delete_line(&self, id: i64) -> Result<(), ApplicationError> {
        self.delete_line_handler
            .handle(DeleteLine { line_id: id })
            .await
    }
}
