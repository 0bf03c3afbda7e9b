//! # gestion-salles-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SalleRepository` — CRUD and filtered queries for rooms
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SalleService` — save, update, delete, find by id, availability or capacity
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `gestion-salles-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
