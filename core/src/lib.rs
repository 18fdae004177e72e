//! TQL Core Types
//!
//! This crate provides the identity types shared by every TQL pattern crate:
//! - References (concept, value, label and anonymous variable identities)
//! - Variables (the slot a statement holds for each reference)
//! - Constant values used as predicate operands
//! - Reference validation errors

mod error;
mod reference;
mod value;
mod variable;

pub use error::*;
pub use reference::*;
pub use value::*;
pub use variable::*;
