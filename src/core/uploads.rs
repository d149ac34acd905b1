//! FotoStorage - Salvataggio su disco delle foto caricate
//!
//! Il chiamante riceve solo il nome file generato, che diventa il
//! riferimento stabile memorizzato nella colonna `foto`.

use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, instrument};

pub struct FotoStorage {
    dir: PathBuf,
}

impl FotoStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Scrive i byte caricati in un file con nome univoco
    /// `foto-<millis>-<random>.<ext>` e ritorna il nome generato.
    /// L'estensione viene presa dal content type del campo multipart.
    #[instrument(skip(self, data))]
    pub async fn save(&self, content_type: Option<&str>, data: &[u8]) -> std::io::Result<String> {
        let ext = content_type
            .and_then(|ct| ct.split('/').nth(1))
            .unwrap_or("bin");
        let filename = format!(
            "foto-{}-{}.{}",
            Utc::now().timestamp_millis(),
            rand::random::<u32>(),
            ext
        );

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&filename), data).await?;

        debug!("Saved uploaded file as {}", filename);
        Ok(filename)
    }
}
