//! Task Queries

/// 查询上游生成任务
#[derive(Debug, Clone)]
pub struct GetTask {
    pub task_id: String,
}
