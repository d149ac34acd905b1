//! Auth services - Emissione dei token di accesso

use crate::core::{AppError, AppState, encode_jwt};
use axum::extract::{Json, State};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// DTO di risposta per l'emissione di un token
#[derive(Serialize)]
pub struct TokenDTO {
    pub token: String,
}

/// GET /jwt - emette un token nuovo ad ogni chiamata.
/// Nessun token viene mai persistito: la validità è solo firma + scadenza.
#[instrument(skip(state))]
pub async fn get_jwt(State(state): State<Arc<AppState>>) -> Result<Json<TokenDTO>, AppError> {
    let token = encode_jwt(&state.token_secret)?;
    info!("Issued new access token");
    Ok(Json(TokenDTO { token }))
}
