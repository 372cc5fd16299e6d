//! # IO Module
//!
//! The boundary between the domain services and the UI collaborator. The UI
//! speaks the DTOs of the `shared` crate; the mappers here translate those
//! requests into domain commands and domain results back into DTOs.

pub mod mappers;

pub use mappers::*;
