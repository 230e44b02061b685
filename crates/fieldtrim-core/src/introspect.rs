//! Member discovery against a type's static model.
//!
//! Resolution is recomputed on every call; nothing here caches.

use crate::{
    error::TrimError,
    guard,
    model::{MemberKind, MemberModel, TypeModel},
    traits::Trimmable,
};

/// Every text member of `model`, in declaration order.
#[must_use]
pub fn list_text_members(model: &TypeModel) -> Vec<&MemberModel> {
    model
        .members
        .iter()
        .filter(|member| is_text_type(member.kind))
        .collect()
}

/// Resolve a member by case-insensitive name, regardless of its kind.
pub fn find_member_by_name<'m>(
    model: &'m TypeModel,
    name: &str,
) -> Result<Option<&'m MemberModel>, TrimError> {
    let name = guard::require_non_blank(name, "name")?;

    Ok(model
        .members
        .iter()
        .find(|member| names_match(member.name, name)))
}

#[must_use]
pub const fn is_text_type(kind: MemberKind) -> bool {
    kind.is_text()
}

/// `list_text_members` against `T::MODEL`.
#[must_use]
pub fn text_members<T: Trimmable>() -> Vec<&'static MemberModel> {
    list_text_members(T::MODEL)
}

/// `find_member_by_name` against `T::MODEL`.
pub fn member_by_name<T: Trimmable>(name: &str) -> Result<Option<&'static MemberModel>, TrimError> {
    find_member_by_name(T::MODEL, name)
}

// Ordinal, char by char. A char folds only when its uppercase form is a
// single char, so `ß` never matches `SS`.
fn names_match(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left.chars().map(fold_char).eq(right.chars().map(fold_char))
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

///
/// TESTS
///
