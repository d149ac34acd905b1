//! Item entity - Articolo di magazzino

use serde::{Deserialize, Serialize};

/// Riga della tabella `items`. `nama` è inteso univoco, ma il vincolo viene
/// fatto rispettare dallo store con un insert ignore-on-conflict, non con un
/// errore.
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    /// Riferimento al file foto salvato su disco (nullable)
    pub foto: Option<String>,
    pub nama: String,
    pub harga_beli: f64,
    pub harga_jual: f64,
    pub stok: i32,
}
