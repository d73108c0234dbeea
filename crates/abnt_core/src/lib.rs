/*
SPDX-License-Identifier: MPL-2.0
*/

//! Core data model for the ABNT formatting engine.
//!
//! This crate defines the reference record and its type enumeration, shared
//! by the processor and the CLI. It carries no formatting logic of its own.

pub mod reference;

pub use reference::{ReferenceRecord, ReferenceType};
