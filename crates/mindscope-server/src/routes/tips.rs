use axum::extract::State;
use axum::Json;

use mindscope_core::models::tip::WellnessTip;
use mindscope_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_tips(State(state): State<AppState>) -> Result<Json<Vec<WellnessTip>>, ApiError> {
    Ok(Json(records::load_tips(state.data_dir()).await?))
}
