use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use mindscope_instruments::scoring::{AnswerRange, Item, SeverityTier};
use mindscope_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    code: String,
    name: String,
    item_count: usize,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    code: String,
    name: String,
    instructions: String,
    answer_range: AnswerRange,
    answer_labels: Vec<String>,
    items: Vec<Item>,
    tiers: Vec<SeverityTier>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            code: i.kind().code().to_string(),
            name: i.name().to_string(),
            item_count: i.item_count(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        code: instrument.kind().code().to_string(),
        name: instrument.name().to_string(),
        instructions: instrument.instructions().to_string(),
        answer_range: instrument.answer_range(),
        answer_labels: instrument.answer_labels().to_vec(),
        items: instrument.items().to_vec(),
        tiers: instrument.tiers().to_vec(),
    }))
}
