//! # gestion-salles-domain
//!
//! Pure domain model for the room-management system.
//!
//! ## Responsibilities
//! - Foundational types: the typed room identifier and error conventions
//! - Define the **Salle** record (a bookable room: name, capacity, floor, availability)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod salle;
