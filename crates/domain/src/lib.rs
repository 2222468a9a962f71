//! Domain layer for the voice gateway
//!
//! Contains the core entities of a voice exchange, value types for audio,
//! and domain errors. This layer has no external-service dependencies and
//! defines the ubiquitous language.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::DomainError;
