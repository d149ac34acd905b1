//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione e JWT
//! - Configurazione
//! - Gestione errori
//! - Stato applicazione
//! - Storage degli upload

pub mod auth;
pub mod config;
pub mod error;
pub mod state;
pub mod uploads;

// Re-exports per facilitare l'import
pub use auth::{Claims, TokenCheck, authentication_middleware, check_jwt, encode_jwt};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
pub use uploads::FotoStorage;
