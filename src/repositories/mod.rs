//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono costruite con l'API runtime di sqlx (query/query_as e
//! QueryBuilder): l'update parziale è SQL dinamico, quindi le macro con
//! verifica a compile time non sono utilizzabili qui. I valori passano
//! SEMPRE come parametri bindati, mai formattati dentro la stringa SQL.

pub mod item;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use item::ItemRepository;
