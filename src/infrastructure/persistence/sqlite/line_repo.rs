//! SQLite Line Repository
//!
//! 读取时通过 JOIN 一次性取回上行/下行终点站

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{LineRepositoryPort, RepositoryError};
use crate::domain::{
    Line, LineColor, LineId, LineName, NewLine, Station, StationId, StationName,
};

const SELECT_LINE: &str = r#"
    SELECT
        l.id, l.name, l.color, l.created_at, l.updated_at,
        u.id AS up_id, u.name AS up_name, u.created_at AS up_created_at,
        d.id AS down_id, d.name AS down_name, d.created_at AS down_created_at
    FROM lines l
    JOIN stations u ON u.id = l.up_station_id
    JOIN stations d ON d.id = l.down_station_id
"#;

/// SQLite Line Repository
pub struct SqliteLineRepository {
    pool: DbPool,
}

impl SqliteLineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LineRow {
    id: i64,
    name: String,
    color: String,
    created_at: String,
    updated_at: String,
    up_id: i64,
    up_name: String,
    up_created_at: String,
    down_id: i64,
    down_name: String,
    down_created_at: String,
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

fn station(id: i64, name: String, created_at: &str) -> Result<Station, RepositoryError> {
    Ok(Station::new(
        StationId::new(id),
        StationName::new(name).map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
        parse_time(created_at)?,
    ))
}

impl TryFrom<LineRow> for Line {
    type Error = RepositoryError;

    fn try_from(row: LineRow) -> Result<Self, Self::Error> {
        let up = station(row.up_id, row.up_name, &row.up_created_at)?;
        let down = station(row.down_id, row.down_name, &row.down_created_at)?;

        Ok(Line::new(
            LineId::new(row.id),
            LineName::new(row.name).map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            LineColor::new(row.color)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            up,
            down,
            parse_time(&row.created_at)?,
            parse_time(&row.updated_at)?,
        ))
    }
}

#[async_trait]
impl LineRepositoryPort for SqliteLineRepository {
    async fn save(&self, line: &NewLine) -> Result<Line, RepositoryError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO lines (name, color, up_station_id, down_station_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(line.name.as_str())
        .bind(line.color.as_str())
        .bind(line.up_station_id.value())
        .bind(line.down_station_id.value())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let id = LineId::new(result.last_insert_rowid());
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Line {}", id)))
    }

    async fn find_by_id(&self, id: LineId) -> Result<Option<Line>, RepositoryError> {
        let row: Option<LineRow> = sqlx::query_as(&format!("{} WHERE l.id = ?", SELECT_LINE))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Line::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Line>, RepositoryError> {
        let rows: Vec<LineRow> = sqlx::query_as(&format!("{} ORDER BY l.id ASC", SELECT_LINE))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(Line::try_from).collect()
    }

    async fn update(&self, line: &Line) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE lines
            SET name = ?, color = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(line.name().as_str())
        .bind(line.color().as_str())
        .bind(line.updated_at().to_rfc3339())
        .bind(line.id().value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Line {}", line.id())));
        }

        Ok(())
    }

    async fn delete(&self, id: LineId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM lines WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_station(&self, station_id: StationId) -> Result<bool, RepositoryError> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM lines WHERE up_station_id = ?1 OR down_station_id = ?1)",
        )
        .bind(station_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(exists != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::StationRepositoryPort;
    use crate::domain::NewStation;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteStationRepository,
    };

    struct Fixture {
        stations: SqliteStationRepository,
        lines: SqliteLineRepository,
        up: Station,
        down: Station,
    }

    async fn fixture() -> Fixture {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let stations = SqliteStationRepository::new(pool.clone());
        let up = stations
            .save(&NewStation::new(StationName::new("강남역").unwrap()))
            .await
            .unwrap();
        let down = stations
            .save(&NewStation::new(StationName::new("양재역").unwrap()))
            .await
            .unwrap();

        Fixture {
            stations,
            lines: SqliteLineRepository::new(pool),
            up,
            down,
        }
    }

    fn new_line(name: &str, up: StationId, down: StationId) -> NewLine {
        NewLine {
            name: LineName::new(name).unwrap(),
            color: LineColor::new("bg-red-600").unwrap(),
            up_station_id: up,
            down_station_id: down,
        }
    }

    #[tokio::test]
    async fn test_save_joins_endpoints() {
        let f = fixture().await;
        let line = f
            .lines
            .save(&new_line("신분당선", f.up.id(), f.down.id()))
            .await
            .unwrap();

        assert_eq!(line.name().as_str(), "신분당선");
        assert_eq!(line.up_endpoint().name().as_str(), "강남역");
        assert_eq!(line.down_endpoint().name().as_str(), "양재역");

        let all = f.lines.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], line);
    }

    #[tokio::test]
    async fn test_unique_name_maps_to_duplicate() {
        let f = fixture().await;
        f.lines
            .save(&new_line("신분당선", f.up.id(), f.down.id()))
            .await
            .unwrap();

        let result = f.lines.save(&new_line("신분당선", f.down.id(), f.up.id())).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let f = fixture().await;

        let result = f.lines.save(&new_line("2호선", f.up.id(), StationId::new(999))).await;
        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));

        f.lines
            .save(&new_line("신분당선", f.up.id(), f.down.id()))
            .await
            .unwrap();
        assert!(f.lines.exists_by_station(f.down.id()).await.unwrap());

        // 终点站被引用时数据库层拒绝删除
        let result = f.stations.delete(f.down.id()).await;
        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let f = fixture().await;
        let mut line = f
            .lines
            .save(&new_line("신분당선", f.up.id(), f.down.id()))
            .await
            .unwrap();

        line.update(
            LineName::new("분당선").unwrap(),
            LineColor::new("bg-yellow-600").unwrap(),
        );
        f.lines.update(&line).await.unwrap();

        let stored = f.lines.find_by_id(line.id()).await.unwrap().unwrap();
        assert_eq!(stored.name().as_str(), "분당선");
        assert_eq!(stored.color().as_str(), "bg-yellow-600");

        assert!(f.lines.delete(line.id()).await.unwrap());
        assert!(f.lines.find_by_id(line.id()).await.unwrap().is_none());
        assert!(!f.lines.exists_by_station(f.up.id()).await.unwrap());
    }
}
