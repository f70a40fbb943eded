//! Station Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateStation, DeleteStation};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::domain::{NewStation, Station, StationId, StationName};

// ============================================================================
// CreateStation
// ============================================================================

/// CreateStation Handler
pub struct CreateStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl CreateStationHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, command: CreateStation) -> Result<Station, ApplicationError> {
        let name = StationName::new(command.name).map_err(ApplicationError::validation)?;

        let station = self.station_repo.save(&NewStation::new(name)).await?;

        tracing::info!(
            station_id = %station.id(),
            name = %station.name(),
            created_at = %station.created_at(),
            "Station created"
        );

        Ok(station)
    }
}

// ============================================================================
// DeleteStation
// ============================================================================

/// DeleteStation Handler
///
/// 仍被线路作为终点站引用的站点不允许删除；
/// 删除不存在的站点视为成功
pub struct DeleteStationHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl DeleteStationHandler {
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            station_repo,
            line_repo,
        }
    }

    pub async fn handle(&self, command: DeleteStation) -> Result<(), ApplicationError> {
        let station_id = StationId::new(command.station_id);

        if self.line_repo.exists_by_station(station_id).await? {
            return Err(ApplicationError::conflict(format!(
                "Station {} is an endpoint of an existing line",
                station_id
            )));
        }

        let deleted = self.station_repo.delete(station_id).await?;

        if deleted {
            tracing::info!(station_id = %station_id, "Station deleted");
        } else {
            tracing::debug!(station_id = %station_id, "Station already absent");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::{CreateLine, CreateStation};
    use crate::application::commands::handlers::CreateLineHandler;
    use crate::infrastructure::memory::{InMemoryLineRepository, InMemoryStationRepository};

    fn repos() -> (Arc<InMemoryStationRepository>, Arc<InMemoryLineRepository>) {
        let stations = Arc::new(InMemoryStationRepository::new());
        let lines = Arc::new(InMemoryLineRepository::new(stations.clone()));
        (stations, lines)
    }

    #[tokio::test]
    async fn test_create_station_assigns_id() {
        let (stations, _) = repos();
        let handler = CreateStationHandler::new(stations.clone());

        let first = handler
            .handle(CreateStation { name: "가양역".into() })
            .await
            .unwrap();
        let second = handler
            .handle(CreateStation { name: "증미역".into() })
            .await
            .unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(stations.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_station_rejects_blank_name() {
        let (stations, _) = repos();
        let handler = CreateStationHandler::new(stations);

        let result = handler.handle(CreateStation { name: "  ".into() }).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_station_is_ok() {
        let (stations, lines) = repos();
        let handler = DeleteStationHandler::new(stations, lines);

        assert!(handler.handle(DeleteStation { station_id: 999 }).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_referenced_station_conflicts() {
        let (stations, lines) = repos();
        let create_station = CreateStationHandler::new(stations.clone());
        let up = create_station
            .handle(CreateStation { name: "강남역".into() })
            .await
            .unwrap();
        let down = create_station
            .handle(CreateStation { name: "양재역".into() })
            .await
            .unwrap();

        CreateLineHandler::new(stations.clone(), lines.clone())
            .handle(CreateLine {
                name: "신분당선".into(),
                color: "bg-red-600".into(),
                up_station_id: up.id().value(),
                down_station_id: down.id().value(),
            })
            .await
            .unwrap();

        let handler = DeleteStationHandler::new(stations.clone(), lines);
        let result = handler
            .handle(DeleteStation { station_id: down.id().value() })
            .await;

        assert!(matches!(result, Err(ApplicationError::Conflict(_))));
        assert!(stations.find_by_id(down.id()).await.unwrap().is_some());
    }
}
