//! Domains module containing business logic organized by bounded contexts.
//!
//! The server has a single domain: documentation resources.

pub mod resources;
