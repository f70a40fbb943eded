//! SQLite Station Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{RepositoryError, StationRepositoryPort};
use crate::domain::{NewStation, Station, StationId, StationName};

/// SQLite Station Repository
pub struct SqliteStationRepository {
    pool: DbPool,
}

impl SqliteStationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StationRow {
    id: i64,
    name: String,
    created_at: String,
}

impl TryFrom<StationRow> for Station {
    type Error = RepositoryError;

    fn try_from(row: StationRow) -> Result<Self, Self::Error> {
        Ok(Station::new(
            StationId::new(row.id),
            StationName::new(row.name)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        ))
    }
}

#[async_trait]
impl StationRepositoryPort for SqliteStationRepository {
    async fn save(&self, station: &NewStation) -> Result<Station, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO stations (name, created_at) VALUES (?, ?)")
            .bind(station.name.as_str())
            .bind(created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Station::new(
            StationId::new(result.last_insert_rowid()),
            station.name.clone(),
            created_at,
        ))
    }

    async fn find_by_id(&self, id: StationId) -> Result<Option<Station>, RepositoryError> {
        let row: Option<StationRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stations WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        row.map(Station::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Station>, RepositoryError> {
        let rows: Vec<StationRow> =
            sqlx::query_as("SELECT id, name, created_at FROM stations ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        rows.into_iter().map(Station::try_from).collect()
    }

    async fn delete(&self, id: StationId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM stations WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteStationRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteStationRepository::new(pool)
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = repo().await;
        let saved = repo
            .save(&NewStation::new(StationName::new("강남역").unwrap()))
            .await
            .unwrap();

        let found = repo.find_by_id(saved.id()).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.name().as_str(), "강남역");
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = repo().await;
        for name in ["가양역", "증미역", "등촌역"] {
            repo.save(&NewStation::new(StationName::new(name).unwrap()))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["가양역", "증미역", "등촌역"]);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let repo = repo().await;
        let saved = repo
            .save(&NewStation::new(StationName::new("등촌역").unwrap()))
            .await
            .unwrap();

        assert!(repo.delete(saved.id()).await.unwrap());
        assert!(!repo.delete(saved.id()).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_referenced_station_violates_constraint() {
        use crate::application::ports::LineRepositoryPort;
        use crate::domain::{LineColor, LineName, NewLine};
        use crate::infrastructure::persistence::sqlite::SqliteLineRepository;

        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let stations = SqliteStationRepository::new(pool.clone());
        let lines = SqliteLineRepository::new(pool);

        let up = stations
            .save(&NewStation::new(StationName::new("강남역").unwrap()))
            .await
            .unwrap();
        let down = stations
            .save(&NewStation::new(StationName::new("양재역").unwrap()))
            .await
            .unwrap();
        let line = lines
            .save(&NewLine {
                name: LineName::new("신분당선").unwrap(),
                color: LineColor::new("bg-red-600").unwrap(),
                up_station_id: up.id(),
                down_station_id: down.id(),
            })
            .await
            .unwrap();

        let result = stations.delete(down.id()).await;
        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
        assert!(stations.find_by_id(down.id()).await.unwrap().is_some());

        assert!(lines.delete(line.id()).await.unwrap());
        assert!(stations.delete(down.id()).await.unwrap());
    }
}
