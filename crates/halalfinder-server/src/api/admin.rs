//! GET /api/v1/admin/data-health: data-quality diagnostics for sheet editors.

use axum::{extract::State, Extension, Json};
use halalfinder_core::{data_health_report, CheckStatus, DataHealthReport};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct DataHealthResponse {
    overall: CheckStatus,
    sheet_configured: bool,
    #[serde(flatten)]
    report: DataHealthReport,
}

pub(super) async fn get_data_health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<DataHealthResponse>> {
    let loaded = state.load().await;
    let report = data_health_report(&loaded.data);
    tracing::debug!(
        missing_slugs = report.missing_slugs.len(),
        duplicate_slugs = report.duplicate_slugs.len(),
        "built data-health report"
    );
    ApiResponse::loaded(
        DataHealthResponse {
            overall: report.overall(),
            sheet_configured: state.sheet_url.is_some(),
            report,
        },
        req_id.0,
        loaded.source,
    )
}
