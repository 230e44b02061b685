use crate::{
    config::{BlankPolicy, TrimConfig},
    error::TrimError,
    guard, introspect,
    model::MemberModel,
    traits::{Target, Trimmable},
};
use tracing::{debug, trace};

///
/// Trimmer
///
/// Strips leading and trailing whitespace from the text members of
/// `Trimmable` values. Holds only its config, so one instance can be
/// shared freely.
///
/// Every entry point validates its arguments before reading any member.
/// A name that resolves to nothing, or to a non-text member, is a no-op.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Trimmer {
    config: TrimConfig,
}

impl Trimmer {
    #[must_use]
    pub const fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &TrimConfig {
        &self.config
    }

    /// Trim one named member of `item`.
    pub fn trim_member<'a, T, I>(&self, item: I, member: &str) -> Result<(), TrimError>
    where
        T: Trimmable + 'a,
        I: Target<'a, T>,
    {
        let item = guard::require_non_null(item.into_target(), "item")?;
        let member = guard::require_non_blank(member, "member")?;

        if let Some(member) = eligible_member::<T>(member)? {
            self.apply_trim(item, member);
        }

        Ok(())
    }

    /// Trim every text member of `item`.
    pub fn trim_all_members<'a, T, I>(&self, item: I) -> Result<(), TrimError>
    where
        T: Trimmable + 'a,
        I: Target<'a, T>,
    {
        let item = guard::require_non_null(item.into_target(), "item")?;

        for member in introspect::text_members::<T>() {
            self.apply_trim(item, member);
        }

        Ok(())
    }

    /// Trim one named member on every element of `items`.
    /// The name is resolved once for the whole collection.
    pub fn trim_member_in<'a, T, I>(&self, items: I, member: &str) -> Result<(), TrimError>
    where
        T: Trimmable + 'a,
        I: Target<'a, [T]>,
    {
        let items = guard::require_non_empty(items.into_target(), "items")?;
        let member = guard::require_non_blank(member, "member")?;

        if let Some(member) = eligible_member::<T>(member)? {
            let mut written = 0_usize;

            for item in items.iter_mut() {
                if self.apply_trim(item, member) {
                    written += 1;
                }
            }

            debug!(
                ty = T::MODEL.name,
                member = member.name,
                items = items.len(),
                written,
                "trimmed member across collection"
            );
        }

        Ok(())
    }

    /// Trim every text member on every element of `items`.
    pub fn trim_all_members_in<'a, T, I>(&self, items: I) -> Result<(), TrimError>
    where
        T: Trimmable + 'a,
        I: Target<'a, [T]>,
    {
        let items = guard::require_non_empty(items.into_target(), "items")?;
        let members = introspect::text_members::<T>();

        for item in items.iter_mut() {
            for member in &members {
                self.apply_trim(item, member);
            }
        }

        Ok(())
    }

    // Returns whether the member was rewritten.
    fn apply_trim<T: Trimmable>(&self, item: &mut T, member: &MemberModel) -> bool {
        let Some(value) = item.text_slot(member.index).and_then(|slot| slot.into_text()) else {
            return false;
        };

        if value.is_empty() {
            return false;
        }

        let trimmed = value.trim();

        if trimmed.len() == value.len()
            || (trimmed.is_empty() && self.config.blank == BlankPolicy::Preserve)
        {
            return false;
        }

        *value = trimmed.to_owned();
        trace!(member = member.name, "trimmed member");

        true
    }
}

/// Resolved and text-typed.
#[must_use]
pub const fn is_eligible(member: Option<&MemberModel>) -> bool {
    match member {
        Some(member) => introspect::is_text_type(member.kind),
        None => false,
    }
}

fn eligible_member<T: Trimmable>(name: &str) -> Result<Option<&'static MemberModel>, TrimError> {
    let member = introspect::member_by_name::<T>(name)?;

    if is_eligible(member) {
        return Ok(member);
    }

    match member {
        Some(member) => debug!(
            ty = T::MODEL.name,
            member = member.name,
            kind = ?member.kind,
            "member is not text, skipping"
        ),
        None => debug!(ty = T::MODEL.name, name, "no member matches name, skipping"),
    }

    Ok(None)
}

//
// Default-config entry points
//

/// Trim one named member of `item` with the default config.
pub fn trim_member<'a, T, I>(item: I, member: &str) -> Result<(), TrimError>
where
    T: Trimmable + 'a,
    I: Target<'a, T>,
{
    Trimmer::default().trim_member(item, member)
}

/// Trim every text member of `item` with the default config.
pub fn trim_all_members<'a, T, I>(item: I) -> Result<(), TrimError>
where
    T: Trimmable + 'a,
    I: Target<'a, T>,
{
    Trimmer::default().trim_all_members(item)
}

/// Trim one named member on every element of `items` with the default config.
pub fn trim_member_in<'a, T, I>(items: I, member: &str) -> Result<(), TrimError>
where
    T: Trimmable + 'a,
    I: Target<'a, [T]>,
{
    Trimmer::default().trim_member_in(items, member)
}

/// Trim every text member on every element of `items` with the default config.
pub fn trim_all_members_in<'a, T, I>(items: I) -> Result<(), TrimError>
where
    T: Trimmable + 'a,
    I: Target<'a, [T]>,
{
    Trimmer::default().trim_all_members_in(items)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeUser, Numbers, init_tracing};

    fn users() -> Vec<FakeUser> {
        vec![
            FakeUser::new(1, "Luke  ", "  Skywalker  "),
            FakeUser::new(2, "  Boba  ", "Fett  "),
        ]
    }

    #[test]
    fn trim_member_trims_only_named_member() {
        init_tracing();
        let mut user = FakeUser::new(1, "Luke  ", "  Skywalker  ");

        trim_member(&mut user, "first_name").unwrap();

        assert_eq!(user.first_name, "Luke");
        assert_eq!(user.last_name, "  Skywalker  ");
    }

    #[test]
    fn trim_member_resolves_name_case_insensitively() {
        let mut user = FakeUser::new(1, "Luke  ", "  Skywalker  ");

        trim_member(&mut user, "LAST_NAME").unwrap();

        assert_eq!(user.first_name, "Luke  ");
        assert_eq!(user.last_name, "Skywalker");
    }

    #[test]
    fn trim_member_rejects_null_before_blank_name() {
        let err = trim_member(None::<&mut FakeUser>, "").unwrap_err();

        assert!(err.is_null_reference());
        assert_eq!(err.argument, "item");
    }

    #[test]
    fn trim_member_rejects_blank_name() {
        let mut user = FakeUser::new(1, "Luke  ", "");

        for name in ["", " ", "\t"] {
            let err = trim_member(&mut user, name).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(err.argument, "member");
        }

        assert_eq!(user.first_name, "Luke  ");
    }

    #[test]
    fn trim_member_ignores_unknown_and_non_text_members() {
        init_tracing();
        let mut user = FakeUser::new(1, " Luke ", " Skywalker ");
        let before = user.clone();

        trim_member(&mut user, "id").unwrap();
        trim_member(&mut user, "test").unwrap();

        assert_eq!(user, before);
    }

    #[test]
    fn trim_member_leaves_empty_value() {
        let mut user = FakeUser::new(1, "", " Skywalker ");

        trim_member(&mut user, "first_name").unwrap();

        assert_eq!(user.first_name, "");
    }

    #[test]
    fn whitespace_only_collapses_by_default() {
        let mut user = FakeUser::new(1, "   ", "x");

        trim_member(&mut user, "first_name").unwrap();

        assert_eq!(user.first_name, "");
    }

    #[test]
    fn whitespace_only_is_kept_under_preserve() {
        let trimmer = Trimmer::new(TrimConfig::new(BlankPolicy::Preserve));
        let mut user = FakeUser::new(1, "   ", " Skywalker ");

        trimmer.trim_all_members(&mut user).unwrap();

        assert_eq!(user.first_name, "   ");
        assert_eq!(user.last_name, "Skywalker");
    }

    #[test]
    fn nullable_members_trim_when_present_and_skip_when_absent() {
        let mut user = FakeUser::new(1, "a", "b");

        user.nickname = None;
        trim_member(&mut user, "nickname").unwrap();
        assert_eq!(user.nickname, None);

        user.nickname = Some("  Red Five ".to_string());
        trim_member(&mut user, "nickname").unwrap();
        assert_eq!(user.nickname.as_deref(), Some("Red Five"));
    }

    #[test]
    fn trim_all_members_trims_every_text_member() {
        let mut user = FakeUser::new(7, "Luke  ", "  Skywalker  ");
        user.nickname = Some("\tWormie\n".to_string());
        user.tags = vec![" jedi ".to_string()];

        trim_all_members(&mut user).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Luke");
        assert_eq!(user.last_name, "Skywalker");
        assert_eq!(user.nickname.as_deref(), Some("Wormie"));
        assert_eq!(user.tags, [" jedi "]);
    }

    #[test]
    fn trim_all_members_rejects_null() {
        let err = trim_all_members(None::<&mut FakeUser>).unwrap_err();

        assert!(err.is_null_reference());
    }

    #[test]
    fn trim_all_members_without_text_is_a_noop() {
        let mut numbers = Numbers { count: 3, ratio: 0.5 };

        trim_all_members(&mut numbers).unwrap();

        assert_eq!(numbers.count, 3);
        assert!((numbers.ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn trim_member_in_trims_each_element() {
        let mut users = users();

        trim_member_in(&mut users, "first_name").unwrap();

        assert_eq!(users[0].first_name, "Luke");
        assert_eq!(users[1].first_name, "Boba");
        assert_eq!(users[1].last_name, "Fett  ");
    }

    #[test]
    fn trim_member_in_accepts_slices() {
        let mut users = users();

        trim_member_in(&mut users[1..], "first_name").unwrap();

        assert_eq!(users[0].first_name, "Luke  ");
        assert_eq!(users[1].first_name, "Boba");
    }

    #[test]
    fn trim_member_in_rejects_empty_and_null_collections() {
        let mut empty: Vec<FakeUser> = Vec::new();

        let err = trim_member_in(&mut empty, "first_name").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument, "items");

        let err = trim_member_in(None::<&mut Vec<FakeUser>>, "first_name").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn trim_member_in_rejects_blank_name_without_mutating() {
        let mut users = users();
        let before = users.clone();

        let err = trim_member_in(&mut users, "").unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(users, before);
    }

    #[test]
    fn trim_member_in_ignores_non_text_member() {
        let mut users = users();
        let before = users.clone();

        trim_member_in(&mut users, "Id").unwrap();

        assert_eq!(users, before);
    }

    #[test]
    fn trim_all_members_in_trims_every_element() {
        let mut users = users();

        trim_all_members_in(&mut users).unwrap();

        assert_eq!(users[0].first_name, "Luke");
        assert_eq!(users[0].last_name, "Skywalker");
        assert_eq!(users[1].first_name, "Boba");
        assert_eq!(users[1].last_name, "Fett");
    }

    #[test]
    fn trim_all_members_in_rejects_empty() {
        let mut empty: Vec<FakeUser> = Vec::new();

        let err = trim_all_members_in(&mut empty).unwrap_err();

        assert!(err.is_invalid_argument());
    }

    #[test]
    fn eligibility_requires_resolved_text_member() {
        assert!(!is_eligible(None));
        assert!(is_eligible(member_of("first_name")));
        assert!(is_eligible(member_of("nickname")));
        assert!(!is_eligible(member_of("id")));
        assert!(!is_eligible(member_of("tags")));
    }

    fn member_of(name: &str) -> Option<&'static MemberModel> {
        introspect::member_by_name::<FakeUser>(name).unwrap()
    }
}
