//! # hf-core
//!
//! Core types, static catalog, and validation for homefix.
//!
//! This crate provides the foundational types shared across all homefix crates:
//! - Entity structs for diagnoses, saved records, technicians, chat turns
//! - Closed enums (appliances, cost levels, technician status transitions)
//! - The compiled-in catalog of appliances, symptoms, and canned diagnoses
//! - Caller-side input validation gates
//! - ID prefix constants and cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod validation;
