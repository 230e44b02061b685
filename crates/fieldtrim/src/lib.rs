//! Derive-driven whitespace trimming for the text members of plain structs.
//!
//! ## Crate layout
//! - `core`: member models, introspection, guards and the trim orchestrator.
//! - `Trimmable` (derive): generates the static member table for a struct.
//!
//! ```ignore
//! use fieldtrim::prelude::*;
//!
//! #[derive(Trimmable)]
//! struct User {
//!     id: u64,
//!     #[trim(rename = "FirstName")]
//!     first_name: String,
//!     nickname: Option<String>,
//! }
//!
//! trim_member(&mut user, "firstname")?;
//! trim_all_members_in(&mut users)?;
//! ```

pub use fieldtrim_core as core;

// generated code refers to `::fieldtrim::core`
extern crate self as fieldtrim;

pub use fieldtrim_core::{
    BlankPolicy, ConfigError, ErrorClass, TrimConfig, TrimError, Trimmer, introspect,
    traits::{Target, Trimmable},
    trim_all_members, trim_all_members_in, trim_member, trim_member_in,
};
pub use fieldtrim_derive::Trimmable;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        model::{MemberKind, MemberModel, TypeModel},
        traits::Trimmable as _,
        trim::{Trimmer, trim_all_members, trim_all_members_in, trim_member, trim_member_in},
    };
    pub use fieldtrim_derive::Trimmable;
}
