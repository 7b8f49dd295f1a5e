use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthDto {
    /// `"ok"` when every dependency is reachable, `"degraded"` otherwise.
    pub status: String,
    /// `"up"` or `"down"`.
    pub database: String,
}
