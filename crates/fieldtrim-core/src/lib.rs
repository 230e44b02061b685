//! Core runtime for fieldtrim: member models, introspection, argument guards
//! and the trim orchestrator.
#![warn(unreachable_pub)]

// generated code refers to `::fieldtrim_core`, including in our own tests
extern crate self as fieldtrim_core;

pub mod config;
pub mod error;
pub mod guard;
pub mod introspect;
pub mod model;
pub mod traits;
pub mod trim;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use config::{BlankPolicy, ConfigError, TrimConfig};
pub use error::{ErrorClass, TrimError};
pub use trim::{Trimmer, trim_all_members, trim_all_members_in, trim_member, trim_member_in};

///
/// Prelude
///
/// Domain vocabulary only; errors and config stay at the crate root.
///

pub mod prelude {
    pub use crate::{
        model::{MemberKind, MemberModel, TypeModel},
        traits::Trimmable,
        trim::{Trimmer, trim_all_members, trim_all_members_in, trim_member, trim_member_in},
    };
}
