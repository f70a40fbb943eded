//! StationService

use std::sync::Arc;

use crate::application::commands::handlers::{CreateStationHandler, DeleteStationHandler};
use crate::application::commands::{CreateStation, DeleteStation};
use crate::application::dto::{StationRequest, StationResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{LineRepositoryPort, StationRepositoryPort};
use crate::application::queries::handlers::ListStationsHandler;
use crate::application::queries::ListStations;

/// 站点用例
pub struct StationService {
    create_station_handler: CreateStationHandler,
    delete_station_handler: DeleteStationHandler,
    list_stations_handler: ListStationsHandler,
}

impl StationService {
    pub fn new(
        station_repo: Arc<dyn StationRepositoryPort>,
        line_repo: Arc<dyn LineRepositoryPort>,
    ) -> Self {
        Self {
            create_station_handler: CreateStationHandler::new(station_repo.clone()),
            delete_station_handler: DeleteStationHandler::new(station_repo.clone(), line_repo),
            list_stations_handler: ListStationsHandler::new(station_repo),
        }
    }

    pub async fn save_station(
        &self,
        request: StationRequest,
    ) -> Result<StationResponse, ApplicationError> {
        let station = self
            .create_station_handler
            .handle(CreateStation { name: request.name })
            .await?;
        Ok(StationResponse::from_entity(&station))
    }

    pub async fn find_all_stations(&self) -> Result<Vec<StationResponse>, ApplicationError> {
        let stations = self.list_stations_handler.handle(ListStations).await?;
        Ok(stations.iter().map(StationResponse::from_entity).collect())
    }

    pub async fn delete_station(&self, id: i64) -> Result<(), ApplicationError> {
        self.delete_station_handler
            .handle(DeleteStation { station_id: id })
            .await
    }
}
