///
/// TypeModel
/// Static member table for a `Trimmable` type.
///

#[derive(Debug, Eq, PartialEq)]
pub struct TypeModel {
    /// Type name as written on the struct, or its `#[trim(name)]` override.
    pub name: &'static str,

    /// Every declared member, in declaration order.
    pub members: &'static [MemberModel],
}

impl TypeModel {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

///
/// MemberModel
/// Runtime metadata for one declared member.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MemberModel {
    /// Name used for lookup; compared case-insensitively.
    pub name: &'static str,

    /// Position in `TypeModel::members`, also the accessor key.
    pub index: usize,

    pub kind: MemberKind,
}

///
/// MemberKind
///
/// Lossy projection of a member's declared type.
/// Only `String` and `Option<String>` count as text; aliases and newtypes
/// over `String` land in `Other`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberKind {
    Text,
    NullableText,

    /// Declared type, as source text.
    Other(&'static str),
}

impl MemberKind {
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::NullableText)
    }
}

///
/// TextSlot
/// Mutable handle on a text member, handed out by `Trimmable::text_slot`.
///

#[derive(Debug)]
pub enum TextSlot<'a> {
    Text(&'a mut String),
    Nullable(&'a mut Option<String>),
}

impl<'a> TextSlot<'a> {
    /// Current value; `None` when a nullable member holds no value.
    #[must_use]
    pub fn get(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Nullable(value) => value.as_deref(),
        }
    }

    /// The underlying string, if one is present.
    #[must_use]
    pub fn into_text(self) -> Option<&'a mut String> {
        match self {
            Self::Text(value) => Some(value),
            Self::Nullable(value) => value.as_mut(),
        }
    }
}

///
/// TESTS
///
