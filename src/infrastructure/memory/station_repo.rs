//! In-Memory Station Repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{RepositoryError, StationRepositoryPort};
use crate::domain::{NewStation, Station, StationId};

/// 站点及其被线路引用的次数
struct StoredStation {
    station: Station,
    refs: usize,
}

/// 内存站点仓储
///
/// 引用计数与站点存放在同一条目中，增减与删除都在条目锁内完成，
/// 被线路引用的站点无法删除
pub struct InMemoryStationRepository {
    stations: DashMap<StationId, StoredStation>,
    next_id: AtomicI64,
}

impl InMemoryStationRepository {
    pub fn new() -> Self {
        Self {
            stations: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 登记一次线路引用，站点不存在时返回 ConstraintViolation
    pub(crate) fn acquire(&self, id: StationId) -> Result<Station, RepositoryError> {
        match self.stations.get_mut(&id) {
            Some(mut stored) => {
                stored.refs += 1;
                Ok(stored.station.clone())
            }
            None => Err(RepositoryError::ConstraintViolation(format!(
                "Station {} does not exist",
                id
            ))),
        }
    }

    /// 撤销一次线路引用
    pub(crate) fn release(&self, id: StationId) {
        if let Some(mut stored) = self.stations.get_mut(&id) {
            stored.refs = stored.refs.saturating_sub(1);
        }
    }

    pub(crate) fn is_referenced(&self, id: StationId) -> bool {
        self.stations.get(&id).is_some_and(|s| s.refs > 0)
    }
}

impl Default for InMemoryStationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StationRepositoryPort for InMemoryStationRepository {
    async fn save(&self, station: &NewStation) -> Result<Station, RepositoryError> {
        let id = StationId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let saved = Station::new(id, station.name.clone(), Utc::now());
        self.stations.insert(
            id,
            StoredStation {
                station: saved.clone(),
                refs: 0,
            },
        );
        tracing::debug!(station_id = %id, "Station stored in memory");
        Ok(saved)
    }

    async fn find_by_id(&self, id: StationId) -> Result<Option<Station>, RepositoryError> {
        Ok(self.stations.get(&id).map(|s| s.station.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Station>, RepositoryError> {
        let mut stations: Vec<Station> =
            self.stations.iter().map(|e| e.station.clone()).collect();
        stations.sort_by_key(|s| s.id());
        Ok(stations)
    }

    async fn delete(&self, id: StationId) -> Result<bool, RepositoryError> {
        if self.stations.remove_if(&id, |_, s| s.refs == 0).is_some() {
            return Ok(true);
        }

        if self.is_referenced(id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Station {} is referenced by a line",
                id
            )));
        }
        Ok(false)
    }
}
