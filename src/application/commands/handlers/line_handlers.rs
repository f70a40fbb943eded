//! Line Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateLine, DeleteLine, UpdateLine};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::domain::{Line, LineColor, LineId, LineName, NewLine, StationId};

// ============================================================================
// CreateLine
// ============================================================================

/// CreateLine Handler
pub struct CreateLineHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl CreateLineHandler {
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            station_repo,
            line_repo,
        }
    }

    pub async fn handle(&self, command: CreateLine) -> Result<Line, ApplicationError> {
        let name = LineName::new(command.name).map_err(ApplicationError::validation)?;
        let color = LineColor::new(command.color).map_err(ApplicationError::validation)?;

        // 两个终点站都必须存在
        let up_station_id = self.require_station(command.up_station_id).await?;
        let down_station_id = self.require_station(command.down_station_id).await?;

        let line = self
            .line_repo
            .save(&NewLine {
                name,
                color,
                up_station_id,
                down_station_id,
            })
            .await?;

        tracing::info!(
            line_id = %line.id(),
            name = %line.name(),
            up_station_id = %up_station_id,
            down_station_id = %down_station_id,
            created_at = %line.created_at(),
            "Line created"
        );

        Ok(line)
    }

    async fn require_station(&self, id: i64) -> Result<StationId, ApplicationError> {
        let station_id = StationId::new(id);
        self.station_repo
            .find_by_id(station_id)
            .await?
            .map(|station| station.id())
            .ok_or_else(|| ApplicationError::not_found("Station", id))
    }
}

// ============================================================================
// UpdateLine
// ============================================================================

/// UpdateLine Handler
pub struct UpdateLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl UpdateLineHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, command: UpdateLine) -> Result<Line, ApplicationError> {
        let name = LineName::new(command.name).map_err(ApplicationError::validation)?;
        let color = LineColor::new(command.color).map_err(ApplicationError::validation)?;

        let mut line = self
            .line_repo
            .find_by_id(LineId::new(command.line_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", command.line_id))?;

        line.update(name, color);
        self.line_repo.update(&line).await?;

        tracing::info!(line_id = %line.id(), name = %line.name(), "Line updated");

        Ok(line)
    }
}

// ============================================================================
// DeleteLine
// ============================================================================

/// DeleteLine Handler
pub struct DeleteLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl DeleteLineHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, command: DeleteLine) -> Result<(), ApplicationError> {
        let line_id = LineId::new(command.line_id);

        if self.line_repo.delete(line_id).await? {
            tracing::info!(line_id = %line_id, "Line deleted");
        }

        Ok(())
    }
}
