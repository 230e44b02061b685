use crate::model::{TextSlot, TypeModel};

///
/// Trimmable
///
/// Compile-time replacement for runtime member reflection.
/// Normally generated by `#[derive(Trimmable)]`; hand-written impls must keep
/// `text_slot` consistent with `MODEL`: it returns a slot for exactly the
/// members whose kind is text, keyed by `MemberModel::index`.
///

pub trait Trimmable {
    const MODEL: &'static TypeModel;

    /// Mutable access to the text member at `index`, `None` for anything else.
    fn text_slot(&mut self, index: usize) -> Option<TextSlot<'_>>;
}

///
/// Target
///
/// Argument conversion for trim entry points.
/// Plain references are always present; the `Option` forms model a null
/// argument so the guards can reject it.
///

pub trait Target<'a, T: ?Sized> {
    fn into_target(self) -> Option<&'a mut T>;
}

impl<'a, T: ?Sized> Target<'a, T> for &'a mut T {
    fn into_target(self) -> Option<&'a mut T> {
        Some(self)
    }
}

impl<'a, T: ?Sized> Target<'a, T> for Option<&'a mut T> {
    fn into_target(self) -> Option<&'a mut T> {
        self
    }
}

impl<'a, T> Target<'a, [T]> for &'a mut Vec<T> {
    fn into_target(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, T> Target<'a, [T]> for Option<&'a mut Vec<T>> {
    fn into_target(self) -> Option<&'a mut [T]> {
        self.map(Vec::as_mut_slice)
    }
}
