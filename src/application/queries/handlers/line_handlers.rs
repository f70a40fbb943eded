//! Line Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LineRepositoryPort;
use crate::application::queries::{GetLine, ListLines};
use crate::domain::{Line, LineId};

/// GetLine Handler
pub struct GetLineHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl GetLineHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, query: GetLine) -> Result<Line, ApplicationError> {
        self.line_repo
            .find_by_id(LineId::new(query.line_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("Line", query.line_id))
    }
}

/// ListLines Handler
pub struct ListLinesHandler {
    line_repo: Arc<dyn LineRepositoryPort>,
}

impl ListLinesHandler {
    pub fn new(line_repo: Arc<dyn LineRepositoryPort>) -> Self {
        Self { line_repo }
    }

    pub async fn handle(&self, _query: ListLines) -> Result<Vec<Line>, ApplicationError> {
        Ok(self.line_repo.find_all().await?)
    }
}
