use crate::config::jwt::JwtConfig;
use crate::modules::accounts::model::Role;
use crate::modules::dashboard::model::DashboardResponse;
use crate::store::{CohortRepo, StudentRepo, TeacherRepo};
use crate::utils::access;
use crate::utils::errors::AppError;

const VIEW: &[Role] = &[Role::Admin];

pub struct DashboardService;

impl DashboardService {
    pub async fn summary<S>(
        store: &S,
        jwt_config: &JwtConfig,
        token: &str,
    ) -> Result<DashboardResponse, AppError>
    where
        S: StudentRepo + TeacherRepo + CohortRepo,
    {
        access::require_role(jwt_config, token, VIEW)?;

        Ok(DashboardResponse {
            students: store.count_students().await?,
            teachers: store.count_teachers().await?,
            cohorts: store.count_cohorts().await?,
        })
    }
}
