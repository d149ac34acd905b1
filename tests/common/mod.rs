use axum_test::TestServer;
use magazzino::core::AppState;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Secret usato da tutti i test
pub const TEST_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool MySQL
///
/// # Returns
/// Arc<AppState> configurato con il token secret di test
pub fn create_test_state(pool: MySqlPool) -> Arc<AppState> {
    Arc::new(AppState::new(
        pool,
        TEST_SECRET.to_string(),
        std::env::temp_dir().join("magazzino-test-uploads"),
    ))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = magazzino::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Pool "pigro" verso un database irraggiungibile: non apre mai una
/// connessione finché un handler non la chiede. Serve ai test del gate di
/// autenticazione, che devono funzionare anche senza MySQL (gli endpoint
/// che toccano lo storage rispondono 500, ma la decisione del gate e
/// l'header di rotazione restano osservabili).
#[allow(dead_code)]
pub fn unreachable_lazy_pool() -> MySqlPool {
    MySqlPoolOptions::new()
        .acquire_timeout(Duration::from_secs(1))
        .connect_lazy("mysql://nessuno@127.0.0.1:1/non_esiste")
        .expect("Failed to build lazy pool")
}

/// Genera un JWT per testing con iat/exp arbitrari
///
/// # Arguments
/// * `jwt_secret` - Secret key per firmare il token
/// * `iat_offset_secs` - Offset in secondi (anche negativo) per l'issued-at
/// * `exp_offset_secs` - Offset in secondi (anche negativo) per la scadenza
///
/// # Returns
/// Token JWT firmato con le claims richieste
#[allow(dead_code)]
pub fn create_test_jwt(jwt_secret: &str, iat_offset_secs: i64, exp_offset_secs: i64) -> String {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        exp: usize,
        iat: usize,
    }

    let now = Utc::now().timestamp();
    let claims = Claims {
        iat: (now + iat_offset_secs) as usize,
        exp: (now + exp_offset_secs) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Boundary fisso per i body multipart costruiti a mano nei test
#[allow(dead_code)]
pub const MULTIPART_BOUNDARY: &str = "XtestXboundaryX";

/// Costruisce a mano un body multipart/form-data con soli campi testuali.
/// Ritorna i byte del body; il content type va passato come
/// `multipart/form-data; boundary=MULTIPART_BOUNDARY`.
#[allow(dead_code)]
pub fn multipart_text_body(fields: &[(&str, &str)]) -> Vec<u8> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            MULTIPART_BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", MULTIPART_BOUNDARY));
    body.into_bytes()
}

/// Come `multipart_text_body`, ma aggiunge anche un file part `foto`
#[allow(dead_code)]
pub fn multipart_body_with_foto(
    fields: &[(&str, &str)],
    foto_filename: &str,
    foto_content_type: &str,
    foto_bytes: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                MULTIPART_BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"foto\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            MULTIPART_BOUNDARY, foto_filename, foto_content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(foto_bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

/// Content type completo per i body multipart dei test
#[allow(dead_code)]
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY)
}
