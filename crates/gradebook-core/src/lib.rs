//! gradebook-core — Student entity, roster manager, and grade statistics.
//!
//! This crate defines the in-memory data layer that the gradebook CLI (or
//! any other driver) builds on: validated student records, an
//! insertion-ordered roster with CRUD and ranking, and per-class
//! aggregation.

pub mod error;
pub mod model;
pub mod roster;
pub mod statistics;
