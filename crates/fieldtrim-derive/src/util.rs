use syn::{GenericArgument, PathArguments, Type};

///
/// FieldShape
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldShape {
    Text,
    NullableText,
    Other,
}

pub fn classify_field(ty: &Type) -> FieldShape {
    if is_string(ty) {
        FieldShape::Text
    } else if option_inner(ty).is_some_and(is_string) {
        FieldShape::NullableText
    } else {
        FieldShape::Other
    }
}

// `String`, `std::string::String` or `alloc::string::String`
fn is_string(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    if path.qself.is_some() {
        return false;
    }

    let segments: Vec<_> = path.path.segments.iter().collect();
    let Some((last, prefix)) = segments.split_last() else {
        return false;
    };

    if last.ident != "String" || !last.arguments.is_none() {
        return false;
    }

    match prefix {
        [] => true,
        [krate, module] => (krate.ident == "std" || krate.ident == "alloc") && module.ident == "string",
        _ => false,
    }
}

// `Option`, `std::option::Option` or `core::option::Option`, with one type argument
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    if path.qself.is_some() {
        return None;
    }

    let segments: Vec<_> = path.path.segments.iter().collect();
    let (last, prefix) = segments.split_last()?;

    if last.ident != "Option" {
        return None;
    }

    let std_prefix = match prefix {
        [] => true,
        [krate, module] => {
            (krate.ident == "std" || krate.ident == "core") && module.ident == "option"
        }
        _ => false,
    };
    if !std_prefix {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };

    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

/// Lookup key for a member name: each char replaced by its uppercase form
/// when that form is a single char. Must agree with the runtime name match.
pub fn fold_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();

            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

///
/// TESTS
///
