use proc_macro::TokenStream;

mod paths;
mod trimmable;
mod util;

/// Generate a `Trimmable` impl for a struct with named fields.
///
/// Field attributes: `#[trim(rename = "...")]`, `#[trim(skip)]`.
/// Container attribute: `#[trim(name = "...")]`.
#[proc_macro_derive(Trimmable, attributes(trim))]
pub fn derive_trimmable(input: TokenStream) -> TokenStream {
    trimmable::derive_trimmable(input.into()).into()
}
