use axum::Json;

use crate::impact::dashboard::{ImpactReport, TRIAL_STATS};

/// GET /api/v1/impact
pub async fn handle_impact() -> Json<ImpactReport> {
    Json(TRIAL_STATS.report())
}
