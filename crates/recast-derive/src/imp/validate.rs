use crate::{imp::ImplHeader, node::Record};
use proc_macro2::TokenStream;
use quote::quote;

// Validate: identity unless a hook is named; nothing for `manual_validate`.
pub fn expand(node: &Record) -> TokenStream {
    if node.manual_validate {
        return quote!();
    }

    let ImplHeader {
        impl_generics,
        ty,
        where_clause,
    } = ImplHeader::new(node);

    let error = node.error_type();
    let body = node.hook().map(|hook| {
        quote! {
            fn validate(self) -> ::core::result::Result<Self, Self::Error> {
                #hook(self)
            }
        }
    });

    quote! {
        impl #impl_generics ::recast::traits::Validate for #ty #where_clause {
            type Error = #error;

            #body
        }
    }
}
