//! Postal-code lookup handler.

use axum::Json;
use axum::extract::{Path, State};

use newsdesk_integration::Address;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/address/{cep}
pub async fn get_address(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> ApiResult<Json<Address>> {
    let address = state.get_address.perform(&cep).await?;
    Ok(Json(address))
}
