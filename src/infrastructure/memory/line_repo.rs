//! In-Memory Line Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use super::InMemoryStationRepository;
use crate::application::ports::{LineRepositoryPort, RepositoryError, StationRepositoryPort};
use crate::domain::{Line, LineColor, LineId, LineName, NewLine, Station, StationId};

/// 存储形态：终点站只保存 id，读取时再解析
#[derive(Debug, Clone)]
struct LineEntry {
    name: LineName,
    color: LineColor,
    up_station_id: StationId,
    down_station_id: StationId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// 内存线路仓储
///
/// 线路名称唯一；保存时在站点仓储中登记两个终点站的引用，
/// 删除线路时撤销，与 SQLite 外键约束的效果一致
pub struct InMemoryLineRepository {
    lines: DashMap<LineId, LineEntry>,
    names: DashMap<String, LineId>,
    stations: Arc<InMemoryStationRepository>,
    next_id: AtomicI64,
}

impl InMemoryLineRepository {
    pub fn new(stations: Arc<InMemoryStationRepository>) -> Self {
        Self {
            lines: DashMap::new(),
            names: DashMap::new(),
            stations,
            next_id: AtomicI64::new(1),
        }
    }

    async fn station(&self, id: StationId) -> Result<Station, RepositoryError> {
        self.stations
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Station {}", id)))
    }

    async fn assemble(&self, id: LineId, entry: LineEntry) -> Result<Line, RepositoryError> {
        let up = self.station(entry.up_station_id).await?;
        let down = self.station(entry.down_station_id).await?;
        Ok(Line::new(
            id,
            entry.name,
            entry.color,
            up,
            down,
            entry.created_at,
            entry.updated_at,
        ))
    }

    fn release_endpoints(&self, up: StationId, down: StationId) {
        self.stations.release(up);
        self.stations.release(down);
    }

    fn entry(&self, id: LineId) -> Option<LineEntry> {
        self.lines.get(&id).map(|e| e.value().clone())
    }
}

#[async_trait]
impl LineRepositoryPort for InMemoryLineRepository {
    async fn save(&self, line: &NewLine) -> Result<Line, RepositoryError> {
        let up = self.stations.acquire(line.up_station_id)?;
        let down = match self.stations.acquire(line.down_station_id) {
            Ok(station) => station,
            Err(e) => {
                self.stations.release(line.up_station_id);
                return Err(e);
            }
        };

        let id = match self.names.entry(line.name.as_str().to_string()) {
            Entry::Occupied(_) => {
                self.release_endpoints(line.up_station_id, line.down_station_id);
                return Err(RepositoryError::Duplicate(format!(
                    "Line name already exists: {}",
                    line.name
                )));
            }
            Entry::Vacant(vacant) => {
                let id = LineId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
                vacant.insert(id);
                id
            }
        };

        let now = Utc::now();
        let entry = LineEntry {
            name: line.name.clone(),
            color: line.color.clone(),
            up_station_id: line.up_station_id,
            down_station_id: line.down_station_id,
            created_at: now,
            updated_at: now,
        };
        self.lines.insert(id, entry.clone());

        Ok(Line::new(
            id,
            entry.name,
            entry.color,
            up,
            down,
            entry.created_at,
            entry.updated_at,
        ))
    }

    async fn find_by_id(&self, id: LineId) -> Result<Option<Line>, RepositoryError> {
        match self.entry(id) {
            Some(entry) => self.assemble(id, entry).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Line>, RepositoryError> {
        let mut entries: Vec<(LineId, LineEntry)> = self
            .lines
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);

        let mut lines = Vec::with_capacity(entries.len());
        for (id, entry) in entries {
            lines.push(self.assemble(id, entry).await?);
        }
        Ok(lines)
    }

    async fn update(&self, line: &Line) -> Result<(), RepositoryError> {
        let current = self
            .entry(line.id())
            .ok_or_else(|| RepositoryError::NotFound(format!("Line {}", line.id())))?;

        if current.name != *line.name() {
            match self.names.entry(line.name().as_str().to_string()) {
                Entry::Occupied(_) => {
                    return Err(RepositoryError::Duplicate(format!(
                        "Line name already exists: {}",
                        line.name()
                    )))
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(line.id());
                }
            }
            self.names.remove(current.name.as_str());
        }

        if let Some(mut stored) = self.lines.get_mut(&line.id()) {
            stored.name = line.name().clone();
            stored.color = line.color().clone();
            stored.updated_at = line.updated_at();
        }
        Ok(())
    }

    async fn delete(&self, id: LineId) -> Result<bool, RepositoryError> {
        match self.lines.remove(&id) {
            Some((_, entry)) => {
                self.names.remove(entry.name.as_str());
                self.release_endpoints(entry.up_station_id, entry.down_station_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists_by_station(&self, station_id: StationId) -> Result<bool, RepositoryError> {
        Ok(self.stations.is_referenced(station_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewStation, StationName};

    async fn setup() -> (InMemoryLineRepository, Station, Station) {
        let stations = Arc::new(InMemoryStationRepository::new());
        let up = stations
            .save(&NewStation::new(StationName::new("강남역").unwrap()))
            .await
            .unwrap();
        let down = stations
            .save(&NewStation::new(StationName::new("양재역").unwrap()))
            .await
            .unwrap();
        (InMemoryLineRepository::new(stations), up, down)
    }

    fn new_line(name: &str, up: &Station, down: &Station) -> NewLine {
        NewLine {
            name: LineName::new(name).unwrap(),
            color: LineColor::new("bg-red-600").unwrap(),
            up_station_id: up.id(),
            down_station_id: down.id(),
        }
    }

    #[tokio::test]
    async fn test_save_resolves_endpoints() {
        let (repo, up, down) = setup().await;
        let line = repo.save(&new_line("신분당선", &up, &down)).await.unwrap();

        assert_eq!(line.up_endpoint(), &up);
        assert_eq!(line.down_endpoint(), &down);
        assert!(repo.exists_by_station(up.id()).await.unwrap());
        assert!(!repo.exists_by_station(StationId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let (repo, up, down) = setup().await;
        repo.save(&new_line("신분당선", &up, &down)).await.unwrap();

        let result = repo.save(&new_line("신분당선", &down, &up)).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_delete_releases_name() {
        let (repo, up, down) = setup().await;
        let line = repo.save(&new_line("신분당선", &up, &down)).await.unwrap();

        assert!(repo.delete(line.id()).await.unwrap());
        assert!(repo.save(&new_line("신분당선", &up, &down)).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_station_violates_constraint() {
        let (repo, up, _) = setup().await;
        let ghost = Station::new(
            StationId::new(77),
            StationName::new("유령역").unwrap(),
            Utc::now(),
        );

        let result = repo.save(&new_line("2호선", &up, &ghost)).await;
        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
        // 失败的保存不残留引用
        assert!(!repo.exists_by_station(up.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_endpoint_deletion_blocked_until_line_deleted() {
        let stations = Arc::new(InMemoryStationRepository::new());
        let repo = InMemoryLineRepository::new(stations.clone());
        let up = stations
            .save(&NewStation::new(StationName::new("강남역").unwrap()))
            .await
            .unwrap();
        let down = stations
            .save(&NewStation::new(StationName::new("양재역").unwrap()))
            .await
            .unwrap();
        let line = repo.save(&new_line("신분당선", &up, &down)).await.unwrap();

        let result = stations.delete(down.id()).await;
        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));

        // 重名失败不增加引用
        assert!(repo.save(&new_line("신분당선", &up, &down)).await.is_err());
        assert!(repo.delete(line.id()).await.unwrap());
        assert!(!repo.exists_by_station(down.id()).await.unwrap());
        assert!(stations.delete(down.id()).await.unwrap());
        assert!(stations.delete(up.id()).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_save_and_station_delete_never_orphan() {
        for round in 0..200 {
            let stations = Arc::new(InMemoryStationRepository::new());
            let repo = Arc::new(InMemoryLineRepository::new(stations.clone()));
            let up = stations
                .save(&NewStation::new(StationName::new("가양역").unwrap()))
                .await
                .unwrap();
            let down = stations
                .save(&NewStation::new(StationName::new("증미역").unwrap()))
                .await
                .unwrap();

            let saver = {
                let repo = repo.clone();
                let line = new_line("9호선", &up, &down);
                tokio::spawn(async move { repo.save(&line).await })
            };
            let deleter = {
                let stations = stations.clone();
                let id = down.id();
                tokio::spawn(async move { stations.delete(id).await })
            };

            let saved = saver.await.unwrap();
            let deleted = deleter.await.unwrap();
            assert!(
                !(saved.is_ok() && matches!(deleted, Ok(true))),
                "round {}: line saved while its endpoint was deleted",
                round
            );
            assert!(repo.find_all().await.is_ok(), "round {}", round);
        }
    }
}
