use crate::{imp::ImplHeader, node::Record};
use proc_macro2::TokenStream;
use quote::quote;

// Record: static model plus slot conversions.
pub fn expand(node: &Record) -> TokenStream {
    let ImplHeader {
        impl_generics,
        ty,
        where_clause,
    } = ImplHeader::new(node);

    let name = node.ident.to_string();
    let fields = node.fields();

    let field_models = fields.iter().map(|field| {
        let name = field.name();
        let key = field.key();
        let field_ty = &field.ty;
        let required = field.is_required();
        let has_default = field.has_default();
        let skip = field.skip;

        quote! {
            ::recast::model::FieldModel {
                name: #name,
                key: #key,
                family: <#field_ty as ::recast::traits::FieldValue>::FAMILY,
                required: #required,
                has_default: #has_default,
                skip: #skip,
            }
        }
    });

    let default_slots = fields.iter().map(|field| field.default_slot());

    let to_slots = fields.iter().map(|field| {
        let ident = field.ident();
        let field_ty = &field.ty;

        quote! {
            ::core::option::Option::Some(
                <#field_ty as ::recast::traits::FieldValue>::to_value(&self.#ident)
            )
        }
    });

    let from_slots = if fields.is_empty() {
        quote! {
            fn from_slots(
                _slots: ::recast::model::Slots,
            ) -> ::core::result::Result<Self, ::recast::ConstructError> {
                ::core::result::Result::Ok(Self {})
            }
        }
    } else {
        let assignments = fields.iter().enumerate().map(|(index, field)| {
            let ident = field.ident();
            let field_ty = &field.ty;

            quote!(#ident: slots.take::<#field_ty>(Self::MODEL, #index)?)
        });

        quote! {
            fn from_slots(
                mut slots: ::recast::model::Slots,
            ) -> ::core::result::Result<Self, ::recast::ConstructError> {
                ::core::result::Result::Ok(Self {
                    #(#assignments),*
                })
            }
        }
    };

    quote! {
        impl #impl_generics ::recast::traits::Record for #ty #where_clause {
            const MODEL: &'static ::recast::model::RecordModel = &::recast::model::RecordModel {
                path: ::core::concat!(::core::module_path!(), "::", #name),
                fields: &[#(#field_models),*],
            };

            fn default_slots() -> ::recast::model::Slots {
                ::recast::model::Slots::from_values(::std::vec![#(#default_slots),*])
            }

            fn to_slots(&self) -> ::recast::model::Slots {
                ::recast::model::Slots::from_values(::std::vec![#(#to_slots),*])
            }

            #from_slots
        }
    }
}
