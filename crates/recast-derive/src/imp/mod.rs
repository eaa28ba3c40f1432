mod construct;
mod record;
mod validate;

#[cfg(test)]
mod tests;

use crate::{node::Record, util::where_clause_with_bounds};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

///
/// derive_construct
///
/// Parse, check, then emit `Record`, `Validate`, `Construct` and the
/// inherent `new`/`put`. Attribute errors become `compile_error!`s.
///
pub fn derive_construct(input: TokenStream) -> TokenStream {
    let input = match syn::parse2::<DeriveInput>(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let node = match Record::from_derive_input(&input) {
        Ok(node) => node,
        Err(err) => return err.write_errors(),
    };

    if let Err(err) = node.validate() {
        return err.write_errors();
    }

    let record = record::expand(&node);
    let validate = validate::expand(&node);
    let construct = construct::expand(&node);

    quote! {
        #record
        #validate
        #construct
    }
}

///
/// ImplHeader
///
/// Shared `impl<...> Trait for Type<...> where ...` pieces. Every field type
/// gets a `FieldValue` bound when the struct is generic.
///

pub(crate) struct ImplHeader {
    pub impl_generics: TokenStream,
    pub ty: TokenStream,
    pub where_clause: TokenStream,
}

impl ImplHeader {
    pub fn new(node: &Record) -> Self {
        let (impl_generics, ty_generics, where_clause) = node.generics.split_for_impl();
        let ident = &node.ident;

        let bounds: Vec<TokenStream> = if node.generics.params.is_empty() {
            Vec::new()
        } else {
            node.fields()
                .iter()
                .map(|field| {
                    let ty = &field.ty;
                    quote!(#ty: ::recast::traits::FieldValue)
                })
                .collect()
        };

        Self {
            impl_generics: quote!(#impl_generics),
            ty: quote!(#ident #ty_generics),
            where_clause: where_clause_with_bounds(where_clause, &bounds),
        }
    }
}
