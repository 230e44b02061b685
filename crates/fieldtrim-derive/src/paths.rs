use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

// Crates that depend on `fieldtrim-core` directly rather than through the facade.
const INTERNAL_CRATES: &[&str] = &["fieldtrim-core"];

const CORE_CRATE_ENV: &str = "FIELDTRIM_CORE_CRATE";

// A crate path from the override variable; unset or unparsable values are ignored.
fn override_path() -> Option<TokenStream> {
    let raw = std::env::var(CORE_CRATE_ENV).ok()?;
    let path: Path = syn::parse_str(raw.trim()).ok()?;

    Some(quote!(#path))
}

///
/// CratePaths
///
/// Resolves the core crate root for generated code. Internal crates use
/// `::fieldtrim_core`; everyone else goes through the `::fieldtrim` facade.
/// `FIELDTRIM_CORE_CRATE` overrides both, for crates that rename the
/// dependency.
///

#[derive(Clone, Debug)]
pub struct CratePaths {
    pub core: TokenStream,
}

impl CratePaths {
    #[must_use]
    pub fn new() -> Self {
        let pkg = std::env::var("CARGO_PKG_NAME").unwrap_or_default();

        let core = if INTERNAL_CRATES.contains(&pkg.as_str()) {
            quote!(::fieldtrim_core)
        } else {
            quote!(::fieldtrim::core)
        };

        Self {
            core: override_path().unwrap_or(core),
        }
    }
}

///
/// TESTS
///
