use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub students: i64,
    pub teachers: i64,
    pub cohorts: i64,
}
