//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository, lo storage delle foto e il segreto condiviso
//! necessario per emettere e verificare i token.

use crate::core::uploads::FotoStorage;
use crate::repositories::ItemRepository;
use sqlx::MySqlPool;
use std::path::PathBuf;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli articoli
    pub item: ItemRepository,

    /// Storage su disco per le foto caricate
    pub foto: FotoStorage,

    /// Secret key per JWT token (immutabile dopo l'avvio)
    pub token_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando repository e storage
    /// con il pool di connessioni fornito, la token secret e la directory
    /// di upload.
    pub fn new(pool: MySqlPool, token_secret: String, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            item: ItemRepository::new(pool),
            foto: FotoStorage::new(upload_dir),
            token_secret,
        }
    }
}
