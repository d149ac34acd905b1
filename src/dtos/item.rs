//! Item DTOs - Data Transfer Objects per gli articoli
//!
//! Qui vive anche la costruzione dell'update parziale: da un insieme sparso
//! di campi forniti si ricava la lista ordinata minima di assegnamenti
//! (colonna, valore) da passare al repository.

use crate::entities::Item;
use serde::{Deserialize, Serialize};

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug)]
pub struct ItemDTO {
    pub id: i32,
    pub foto: Option<String>,
    pub nama: String,
    pub harga_beli: f64,
    pub harga_jual: f64,
    pub stok: i32,
}

impl From<Item> for ItemDTO {
    fn from(value: Item) -> Self {
        Self {
            id: value.id,
            foto: value.foto,
            nama: value.nama,
            harga_beli: value.harga_beli,
            harga_jual: value.harga_jual,
            stok: value.stok,
        }
    }
}

/// DTO per creare un nuovo articolo (senza id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateItemDTO {
    pub foto: Option<String>,
    pub nama: String,
    pub harga_beli: f64,
    pub harga_jual: f64,
    pub stok: i32,
}

/// DTO per l'update parziale: ogni campo può essere presente o assente,
/// assente significa "lascia invariato"
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateItemDTO {
    pub foto: Option<String>,
    pub nama: Option<String>,
    pub harga_beli: Option<f64>,
    pub harga_jual: Option<f64>,
    pub stok: Option<i32>,
}

/// Valore tipizzato di un singolo assegnamento, pronto per il bind
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Double(f64),
    Int(i32),
}

impl UpdateItemDTO {
    /// Costruisce la lista ordinata di assegnamenti (colonna, valore).
    ///
    /// Regole di presenza, diverse per tipo di campo:
    /// - `foto` e `nama` contano solo se non vuoti;
    /// - per i campi numerici basta che siano stati forniti: lo zero è un
    ///   aggiornamento valido.
    ///
    /// Una lista vuota indica che non c'è nulla da aggiornare: il chiamante
    /// risponde con successo senza toccare lo storage. L'id del record non
    /// compare mai qui, lo aggiunge il repository come chiave di match.
    pub fn assignments(&self) -> Vec<(&'static str, FieldValue)> {
        let mut sets = Vec::new();

        if let Some(foto) = &self.foto {
            if !foto.is_empty() {
                sets.push(("foto", FieldValue::Text(foto.clone())));
            }
        }

        if let Some(nama) = &self.nama {
            if !nama.is_empty() {
                sets.push(("nama", FieldValue::Text(nama.clone())));
            }
        }

        if let Some(harga_beli) = self.harga_beli {
            sets.push(("harga_beli", FieldValue::Double(harga_beli)));
        }

        if let Some(harga_jual) = self.harga_jual {
            sets.push(("harga_jual", FieldValue::Double(harga_jual)));
        }

        if let Some(stok) = self.stok {
            sets.push(("stok", FieldValue::Int(stok)));
        }

        sets
    }
}

impl From<UpdateItemDTO> for CreateItemDTO {
    /// Per la creazione i campi mancanti degradano al valore di default:
    /// nessuna validazione di formato, come da contratto dell'API
    fn from(value: UpdateItemDTO) -> Self {
        Self {
            foto: value.foto,
            nama: value.nama.unwrap_or_default(),
            harga_beli: value.harga_beli.unwrap_or_default(),
            harga_jual: value.harga_jual.unwrap_or_default(),
            stok: value.stok.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_stok_zero_yields_one_assignment() {
        // Lo zero NON deve essere trattato come assente per i campi numerici
        let dto = UpdateItemDTO {
            stok: Some(0),
            ..Default::default()
        };

        let sets = dto.assignments();
        assert_eq!(sets, vec![("stok", FieldValue::Int(0))]);
    }

    #[test]
    fn test_empty_nama_is_treated_as_absent() {
        let dto = UpdateItemDTO {
            nama: Some(String::new()),
            ..Default::default()
        };

        assert!(dto.assignments().is_empty());
    }

    #[test]
    fn test_empty_foto_is_treated_as_absent() {
        let dto = UpdateItemDTO {
            foto: Some(String::new()),
            ..Default::default()
        };

        assert!(dto.assignments().is_empty());
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let dto = UpdateItemDTO {
            foto: Some("foto-123.png".to_string()),
            nama: Some("Beras 5kg".to_string()),
            harga_beli: Some(60000.0),
            harga_jual: Some(68000.0),
            stok: Some(25),
        };

        let sets = dto.assignments();
        let columns: Vec<&str> = sets.iter().map(|(col, _)| *col).collect();
        assert_eq!(
            columns,
            vec!["foto", "nama", "harga_beli", "harga_jual", "stok"]
        );
    }

    #[test]
    fn test_no_fields_yields_empty_list() {
        let dto = UpdateItemDTO::default();

        assert!(dto.assignments().is_empty());
    }

    #[test]
    fn test_numeric_zero_prices_are_present() {
        let dto = UpdateItemDTO {
            harga_beli: Some(0.0),
            harga_jual: Some(0.0),
            ..Default::default()
        };

        let sets = dto.assignments();
        assert_eq!(
            sets,
            vec![
                ("harga_beli", FieldValue::Double(0.0)),
                ("harga_jual", FieldValue::Double(0.0)),
            ]
        );
    }
}
