use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::{Extension, Form, Json};
use serde::Serialize;
use tracing::warn;

use mindscope_core::models::screening::ScreeningResult;
use mindscope_instruments::form::answers_from_form;
use mindscope_instruments::{get_instrument, record_screening};
use mindscope_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::ListQuery;
use crate::state::AppState;

/// A stored screening plus the guidance for its severity tier.
#[derive(Serialize)]
pub struct ScreeningSubmission {
    result: ScreeningResult,
    recommendations: Vec<String>,
    warnings: Vec<String>,
}

/// Score a submitted form (`q1..qN`) and store the result.
pub async fn submit_screening(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Json<ScreeningSubmission>, ApiError> {
    let instrument = get_instrument(&id)?;
    let answers = answers_from_form(instrument, &fields);

    let warnings: Vec<String> = instrument
        .validate_answers(&answers)
        .into_iter()
        .map(|v| v.message)
        .collect();
    for warning in &warnings {
        warn!(user = %user.sub, instrument = instrument.id(), "{warning}");
    }

    let result = record_screening(instrument.kind(), &user.sub, &answers);
    records::save_screening(state.data_dir(), &result).await?;

    let recommendations = instrument.classify(result.total_score).recommendations.clone();
    Ok(Json(ScreeningSubmission {
        result,
        recommendations,
        warnings,
    }))
}

/// The caller's screenings, newest first.
pub async fn list_screenings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ScreeningResult>>, ApiError> {
    let results = records::list_screenings(state.data_dir(), &user.sub, query.limit).await?;
    Ok(Json(results))
}
