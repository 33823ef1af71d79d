//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into submit/list/stats use-cases.
//! - Keep the HTTP boundary decoupled from storage details.

pub mod mood_service;
pub mod mood_store;
