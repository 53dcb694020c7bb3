//! Core use-case services.
//!
//! # Responsibility
//! - Expose store operations to transport layers through a narrow API.
//! - Keep transport code decoupled from storage details.

pub mod bank_service;
