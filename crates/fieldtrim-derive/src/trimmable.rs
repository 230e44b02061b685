use crate::{
    paths::CratePaths,
    util::{FieldShape, classify_field, fold_name},
};
use darling::{Error as DarlingError, FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Type, ext::IdentExt};

// derive_trimmable
pub fn derive_trimmable(input: TokenStream) -> TokenStream {
    expand(input, &CratePaths::new())
}

fn expand(input: TokenStream, paths: &CratePaths) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let input = match TrimmableInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    input
        .generate(paths)
        .unwrap_or_else(DarlingError::write_errors)
}

///
/// TrimmableInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(trim), supports(struct_named))]
struct TrimmableInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, TrimmableField>,

    /// Overrides the type name recorded in the model.
    #[darling(default)]
    name: Option<String>,
}

impl TrimmableInput {
    fn generate(&self, paths: &CratePaths) -> Result<TokenStream, DarlingError> {
        let fields = self.members()?;
        self.validate(&fields)?;

        let core = &paths.core;
        let ident = &self.ident;
        let type_name = self
            .name
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let members = fields.iter().enumerate().map(|(index, field)| {
            let name = field.member_name();
            let kind = field.kind_expr(core);

            quote! {
                #core::model::MemberModel {
                    name: #name,
                    index: #index,
                    kind: #kind,
                }
            }
        });

        let slot_arms = fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| field.slot_arm(core, index));

        Ok(quote! {
            impl #impl_generics #core::traits::Trimmable for #ident #ty_generics #where_clause {
                const MODEL: &'static #core::model::TypeModel = &#core::model::TypeModel {
                    name: #type_name,
                    members: &[#(#members),*],
                };

                #[allow(clippy::match_single_binding)]
                fn text_slot(
                    &mut self,
                    index: usize,
                ) -> ::core::option::Option<#core::model::TextSlot<'_>> {
                    match index {
                        #(#slot_arms)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        })
    }

    // Declared fields minus `#[trim(skip)]`, in declaration order.
    fn members(&self) -> Result<Vec<&TrimmableField>, DarlingError> {
        let fields = self
            .data
            .as_ref()
            .take_struct()
            .ok_or_else(|| DarlingError::unsupported_shape("enum"))?;

        Ok(fields.fields.into_iter().filter(|field| !field.skip).collect())
    }

    // Lookup is case-insensitive, so names must stay unique after folding.
    fn validate(&self, fields: &[&TrimmableField]) -> Result<(), DarlingError> {
        let mut errors = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            errors.push(
                DarlingError::custom("type name cannot be blank").with_span(&self.ident),
            );
        }

        for field in fields {
            let name = field.member_name();

            if name.trim().is_empty() {
                errors.push(field.error("member name cannot be blank"));
                continue;
            }

            let folded = fold_name(&name);
            if seen.contains(&folded) {
                errors.push(field.error(format!(
                    "member name '{name}' collides with another member (names are case-insensitive)"
                )));
            } else {
                seen.push(folded);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DarlingError::multiple(errors))
        }
    }
}

///
/// TrimmableField
///

#[derive(FromField)]
#[darling(attributes(trim))]
struct TrimmableField {
    ident: Option<Ident>,
    ty: Type,

    /// Name used for lookup instead of the field ident.
    #[darling(default)]
    rename: Option<String>,

    /// Leave the field out of the model entirely.
    #[darling(default)]
    skip: bool,
}

impl TrimmableField {
    fn member_name(&self) -> String {
        match (&self.rename, &self.ident) {
            (Some(rename), _) => rename.clone(),
            (None, Some(ident)) => ident.unraw().to_string(),
            (None, None) => String::new(),
        }
    }

    fn kind_expr(&self, core: &TokenStream) -> TokenStream {
        match classify_field(&self.ty) {
            FieldShape::Text => quote!(#core::model::MemberKind::Text),
            FieldShape::NullableText => quote!(#core::model::MemberKind::NullableText),
            FieldShape::Other => {
                let ty = &self.ty;
                let source = quote!(#ty).to_string();

                quote!(#core::model::MemberKind::Other(#source))
            }
        }
    }

    fn slot_arm(&self, core: &TokenStream, index: usize) -> Option<TokenStream> {
        let ident = self.ident.as_ref()?;

        let slot = match classify_field(&self.ty) {
            FieldShape::Text => quote!(#core::model::TextSlot::Text(&mut self.#ident)),
            FieldShape::NullableText => quote!(#core::model::TextSlot::Nullable(&mut self.#ident)),
            FieldShape::Other => return None,
        };

        Some(quote! {
            #index => ::core::option::Option::Some(#slot),
        })
    }

    fn error(&self, message: impl std::fmt::Display) -> DarlingError {
        let err = DarlingError::custom(message);

        match &self.ident {
            Some(ident) => err.with_span(ident),
            None => err.with_span(&self.ty),
        }
    }
}

///
/// TESTS
///
