//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod item;

// Re-exports per facilitare l'import
pub use item::Item;
