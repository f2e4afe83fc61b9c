//! Task Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SongGeneratorPort;
use crate::application::queries::GetTask;
use crate::domain::GenerationTask;

/// GetTask Handler
pub struct GetTaskHandler {
    generator: Arc<dyn SongGeneratorPort>,
}

impl GetTaskHandler {
    pub fn new(generator: Arc<dyn SongGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, query: GetTask) -> Result<GenerationTask, ApplicationError> {
        let task_id = query.task_id.trim();
        if task_id.is_empty() {
            return Err(ApplicationError::validation("task id cannot be empty"));
        }

        Ok(self.generator.get_task(task_id).await?)
    }
}
