//! # stackform-compose
//!
//! Cross-reference resolver and stack composer.
//!
//! Handles:
//! - **Registry**: name-keyed resource registry with referential integrity.
//! - **Scope**: parameter scopes with explicit parent-to-child threading.
//! - **Graph**: dependency graph construction and topological resolution.
//! - **Group**: deployable group tree, composition, and flattening.
//! - **Synth**: rendering a composed tree into the provisioning document.
//!
//! Composition is a single synchronous construction pass: it either
//! produces a fully resolved group tree or fails on the first unresolved
//! reference, duplicate declaration, or cycle.

pub mod graph;
pub mod group;
pub mod registry;
pub mod scope;
pub mod synth;
