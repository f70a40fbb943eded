//! Station Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::StationRepositoryPort;
use crate::application::queries::ListStations;
use crate::domain::Station;

/// ListStations Handler
pub struct ListStationsHandler {
    station_repo: Arc<dyn StationRepositoryPort>,
}

impl ListStationsHandler {
    pub fn new(station_repo: Arc<dyn StationRepositoryPort>) -> Self {
        Self { station_repo }
    }

    pub async fn handle(&self, _query: ListStations) -> Result<Vec<Station>, ApplicationError> {
        Ok(self.station_repo.find_all().await?)
    }
}
