//! Recache Core Types
//!
//! This crate provides the data model the mutation engine operates on:
//! - Identity types (Id)
//! - Value types (the Value enum with scalar, list and record variants)
//! - Records (ordered field maps carrying a `__typename` discriminator)
//! - Collections and the Store snapshot
//! - The typename tagger
//! - JSON interop and common error types

mod error;
mod id;
mod json;
mod record;
mod store;
mod typename;
mod value;

pub use error::*;
pub use id::*;
pub use record::*;
pub use store::*;
pub use typename::*;
pub use value::*;
