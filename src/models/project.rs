use super::Task;

/// Stored placeholder for a project created without a URL.
pub const NO_URL: &str = "Aucune";
/// Stored placeholder for a project created without a hosting server.
pub const NO_HOSTING: &str = "Aucun";

pub const STATUS_IN_PROGRESS: &str = "En cours";
pub const STATUS_DONE: &str = "Terminé";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub user_id: i64,
    pub client_id: i64,
    pub name: String,
    pub description: String,
    pub url: String,
    pub hosting_server: String,
    pub status: String,
    pub hourly_rate: f64,
}

impl Project {
    pub fn total_cost(&self, total_time: f64) -> f64 {
        total_time * self.hourly_rate
    }
}

/// Sum of the hours logged on `tasks`.
pub fn total_time(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.time_spent).sum()
}

/// Project row with its task hours aggregated in SQL, for listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectOverview {
    #[sqlx(flatten)]
    pub project: Project,
    pub client_name: String,
    pub total_time: f64,
}

impl ProjectOverview {
    pub fn total_cost(&self) -> f64 {
        self.project.total_cost(self.total_time)
    }
}

impl std::ops::Deref for ProjectOverview {
    type Target = Project;
    fn deref(&self) -> &Self::Target {
        &self.project
    }
}

/// Validated project fields, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub url: String,
    pub hosting_server: String,
    pub status: String,
    pub hourly_rate: f64,
    pub client_id: i64,
}
