use crate::{imp::ImplHeader, node::Record};
use proc_macro2::TokenStream;
use quote::quote;

pub fn expand(node: &Record) -> TokenStream {
    let ImplHeader {
        impl_generics,
        ty,
        where_clause,
    } = ImplHeader::new(node);

    let strategy = match node.strategy_path() {
        Ok(strategy) => strategy,
        Err(err) => return err.write_errors(),
    };

    let construct = quote! {
        impl #impl_generics ::recast::traits::Construct for #ty #where_clause {
            type Strategy = #strategy;
        }
    };

    if node.skip_inherent {
        return construct;
    }

    let vis = &node.vis;

    quote! {
        #construct

        impl #impl_generics #ty #where_clause {
            /// Build from declared defaults plus `input`, then validate.
            #vis fn new(
                input: impl ::core::convert::Into<::recast::input::Input>,
            ) -> ::core::result::Result<Self, <Self as ::recast::traits::Validate>::Error> {
                <Self as ::recast::traits::Construct>::new(input)
            }

            /// Copy `self`, apply `input`, then validate. `self` is unchanged.
            #vis fn put(
                &self,
                input: impl ::core::convert::Into<::recast::input::Input>,
            ) -> ::core::result::Result<Self, <Self as ::recast::traits::Validate>::Error> {
                <Self as ::recast::traits::Construct>::put(self, input)
            }
        }
    }
}
