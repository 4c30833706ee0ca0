use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;

use mindscope_core::models::mood::MoodEntry;
use mindscope_core::models::screening::ScreeningResult;
use mindscope_core::models::tip::WellnessTip;
use mindscope_instruments::wellness::{WellnessIndex, DEFAULT_MOOD_WINDOW};
use mindscope_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const RECENT_SCREENINGS: usize = 5;
const DASHBOARD_TIPS: usize = 3;

#[derive(Serialize)]
pub struct DashboardView {
    wellness: WellnessIndex,
    recent_screenings: Vec<ScreeningResult>,
    recent_moods: Vec<MoodEntry>,
    tips: Vec<WellnessTip>,
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardView>, ApiError> {
    let root = state.data_dir();
    let recent_screenings = records::list_screenings(root, &user.sub, Some(RECENT_SCREENINGS)).await?;
    let recent_moods = records::list_moods(root, &user.sub, Some(DEFAULT_MOOD_WINDOW)).await?;
    let mut tips = records::load_tips(root).await?;
    tips.truncate(DASHBOARD_TIPS);

    let wellness = WellnessIndex::from_records(&recent_moods, &recent_screenings, DEFAULT_MOOD_WINDOW);

    Ok(Json(DashboardView {
        wellness,
        recent_screenings,
        recent_moods,
        tips,
    }))
}
