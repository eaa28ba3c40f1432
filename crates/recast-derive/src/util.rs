use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type, WhereClause};

/// Extend an optional where clause with extra predicates.
pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause.map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    if let Some(wc) = where_clause {
        let preds = &wc.predicates;
        if preds.is_empty() {
            quote!(where #(#bounds),*)
        } else {
            quote!(where #preds, #(#bounds),*)
        }
    } else {
        quote!(where #(#bounds),*)
    }
}

/// `Option<T>` by last path segment, so `std::option::Option<T>` counts too.
pub fn is_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }

    type_path.path.segments.last().is_some_and(|segment| {
        segment.ident == "Option"
            && matches!(
                &segment.arguments,
                PathArguments::AngleBracketed(args)
                    if args.args.len() == 1
                        && matches!(args.args.first(), Some(GenericArgument::Type(_)))
            )
    })
}

///
/// TESTS
///
