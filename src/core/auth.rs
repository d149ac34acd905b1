//! Autenticazione JWT - emissione, verifica e middleware di protezione
//!
//! I token non trasportano identità: l'unico contenuto sono i metadati di
//! emissione e scadenza. Un token scaduto ma firmato correttamente NON viene
//! rifiutato: la richiesta passa e il client riceve un token nuovo
//! nell'header `Authorization` della risposta (rotazione trasparente).

use crate::core::{AppError, AppState};
use axum::{
    body::Body,
    extract::{Request, State},
    http,
    http::Response,
    middleware::Next,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Durata di validità di ogni token emesso
pub const TOKEN_TTL_SECS: i64 = 3600;

// struct che codifica il contenuto del token jwt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
}

/// Esito della verifica di un token in ingresso
#[derive(Debug)]
pub enum TokenCheck {
    /// Firma valida e non scaduto: la richiesta procede con le claims
    Valid(Claims),
    /// Firma valida ma oltre la scadenza: la richiesta procede con rotazione
    Expired,
    /// Qualsiasi altro fallimento di verifica
    Invalid,
}

/// Emette un nuovo token firmato con scadenza a `TOKEN_TTL_SECS` da adesso
#[instrument(skip(secret))]
pub fn encode_jwt(secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    debug!("Encoding JWT token");
    let now = Utc::now();
    let claims = Claims {
        iat: now.timestamp() as usize,
        exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifica un token e lo classifica senza mai fallire:
/// la scadenza è l'unico errore distinto da tutti gli altri
pub fn check_jwt(jwt_token: &str, secret: &str) -> TokenCheck {
    match decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => TokenCheck::Valid(data.claims),
        Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => TokenCheck::Expired,
        Err(_) => TokenCheck::Invalid,
    }
}

#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    // 1. Estrarre il token dall'header Authorization (formato "Bearer <token>")
    // 2. Header mancante o senza segmento token -> 401
    // 3. Token con firma non valida -> 403
    // 4. Token scaduto ma firmato correttamente -> emettere subito un token
    //    sostitutivo, far procedere la richiesta e allegare il nuovo token
    //    all'header Authorization della risposta (senza prefisso "Bearer")
    // 5. Token valido -> inserire le claims nelle extensions e procedere
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.split_whitespace().nth(1));

    let Some(token) = token else {
        warn!("Missing bearer token");
        return Err(AppError::unauthorized("Missing bearer token"));
    };

    match check_jwt(token, &state.token_secret) {
        TokenCheck::Valid(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        TokenCheck::Expired => {
            // Il token sostitutivo va calcolato PRIMA di eseguire l'handler:
            // condivide la stessa risposta in uscita
            let renewed = encode_jwt(&state.token_secret)?;
            let renewed_value = http::HeaderValue::from_str(&renewed)
                .map_err(|_| AppError::internal_server_error("Internal server error"))?;

            info!("Expired token accepted, replacement issued");
            let mut response = next.run(req).await;
            response
                .headers_mut()
                .insert(http::header::AUTHORIZATION, renewed_value);
            Ok(response)
        }
        TokenCheck::Invalid => {
            warn!("Token signature verification failed");
            Err(AppError::forbidden("Invalid token"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "un segreto di test lungo a sufficienza";

    /// Firma un token con iat/exp arbitrari (per costruire token scaduti)
    fn sign_with(secret: &str, iat: i64, exp: i64) -> String {
        encode(
            &Header::default(),
            &Claims {
                iat: iat as usize,
                exp: exp as usize,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to sign test token")
    }

    #[test]
    fn test_issued_token_is_immediately_valid() {
        let token = encode_jwt(SECRET).unwrap();

        match check_jwt(&token, SECRET) {
            TokenCheck::Valid(claims) => {
                assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS as usize);
            }
            other => panic!("Expected Valid, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_is_classified_expired() {
        // Scaduto da due ore, ben oltre il leeway di default di jsonwebtoken
        let now = Utc::now().timestamp();
        let token = sign_with(SECRET, now - 3600 * 3, now - 3600 * 2);

        assert!(matches!(check_jwt(&token, SECRET), TokenCheck::Expired));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = encode_jwt("un altro segreto").unwrap();

        assert!(matches!(check_jwt(&token, SECRET), TokenCheck::Invalid));
    }

    #[test]
    fn test_expired_and_wrong_secret_is_invalid_not_expired() {
        // La firma sbagliata vince sempre sulla scadenza
        let now = Utc::now().timestamp();
        let token = sign_with("un altro segreto", now - 3600 * 3, now - 3600 * 2);

        assert!(matches!(check_jwt(&token, SECRET), TokenCheck::Invalid));
    }

    #[test]
    fn test_tampered_signature_is_invalid() {
        let token = encode_jwt(SECRET).unwrap();
        let mut tampered = token[..token.len() - 2].to_string();
        tampered.push_str("xx");

        assert!(matches!(check_jwt(&tampered, SECRET), TokenCheck::Invalid));
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert!(matches!(
            check_jwt("non-sono-un-jwt", SECRET),
            TokenCheck::Invalid
        ));
    }

    #[test]
    fn test_renewed_token_expires_later_than_original() {
        let now = Utc::now().timestamp();
        let old_exp = now - 3600 * 2;
        let renewed = encode_jwt(SECRET).unwrap();

        match check_jwt(&renewed, SECRET) {
            TokenCheck::Valid(claims) => assert!(claims.exp as i64 > old_exp),
            other => panic!("Expected Valid, got {:?}", other),
        }
    }
}
