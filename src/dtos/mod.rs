//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod item;

// Re-exports per facilitare l'import
pub use item::{CreateItemDTO, FieldValue, ItemDTO, UpdateItemDTO};
