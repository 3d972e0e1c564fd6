#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub status: String,
    pub time_spent: f64,
}

/// Task row joined with the name of its project, for listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskWithProject {
    #[sqlx(flatten)]
    pub task: Task,
    pub project_name: String,
}

impl std::ops::Deref for TaskWithProject {
    type Target = Task;
    fn deref(&self) -> &Self::Target {
        &self.task
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub status: String,
    pub time_spent: f64,
    pub project_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskChanges {
    pub name: String,
    pub status: String,
    pub time_spent: f64,
}
