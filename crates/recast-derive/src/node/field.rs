use crate::util::is_option;
use darling::{Error as DarlingError, FromField, FromMeta};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Expr, ExprLit, Ident, Lit, Type};

///
/// DefaultArg
///
/// `#[construct(default)]` uses `Default::default()`;
/// `#[construct(default = expr)]` evaluates `expr` as the field type.
///

#[derive(Clone, Debug)]
pub enum DefaultArg {
    Trait,
    Expr(Expr),
}

impl FromMeta for DefaultArg {
    fn from_word() -> darling::Result<Self> {
        Ok(Self::Trait)
    }

    // Keep string literals as literals; darling would otherwise parse them
    // as expressions.
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        Ok(Self::Expr(expr.clone()))
    }
}

///
/// Field
///

#[derive(Clone, Debug, FromField)]
#[darling(attributes(construct))]
pub struct Field {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub required: bool,

    #[darling(default)]
    pub default: Option<DefaultArg>,

    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub skip: bool,

    /// Copied from the struct-level `default` flag after parsing.
    #[darling(skip, default)]
    pub type_default: bool,
}

impl Field {
    pub fn ident(&self) -> Ident {
        self.ident
            .clone()
            .unwrap_or_else(|| format_ident!("__unnamed"))
    }

    pub fn name(&self) -> String {
        self.ident().to_string()
    }

    /// Input key: the rename if present, else the field name.
    pub fn key(&self) -> String {
        self.rename.clone().unwrap_or_else(|| self.name())
    }

    pub fn is_optional(&self) -> bool {
        is_option(&self.ty)
    }

    pub const fn has_default(&self) -> bool {
        self.default.is_some() || self.type_default
    }

    /// Required when asked for, or when nothing else can fill the slot.
    pub fn is_required(&self) -> bool {
        self.required || !(self.has_default() || self.is_optional())
    }

    pub fn validate(&self) -> Result<(), DarlingError> {
        let span = self.ident();

        if self.required && self.default.is_some() {
            return Err(
                DarlingError::custom("a field cannot be both `required` and `default`")
                    .with_span(&span),
            );
        }

        if self.skip && self.is_required() {
            return Err(DarlingError::custom(
                "a skipped field needs a default or an `Option` type",
            )
            .with_span(&span));
        }

        if let Some(rename) = &self.rename
            && rename.is_empty()
        {
            return Err(DarlingError::custom("`rename` must not be empty").with_span(&span));
        }

        Ok(())
    }

    /// Initial slot expression for `Record::default_slots`.
    pub fn default_slot(&self) -> TokenStream {
        let ty = &self.ty;
        let to_value = quote!(<#ty as ::recast::traits::FieldValue>::to_value(&value));

        if self.required {
            return quote!(::core::option::Option::None);
        }

        let init = match &self.default {
            Some(DefaultArg::Expr(Expr::Lit(ExprLit {
                lit: lit @ Lit::Str(_),
                ..
            }))) => quote!(::core::convert::Into::into(#lit)),
            Some(DefaultArg::Expr(expr)) => quote!(#expr),
            Some(DefaultArg::Trait) => quote!(::core::default::Default::default()),
            None if self.is_optional() => {
                return quote!(::core::option::Option::Some(::recast::value::Value::Null));
            }
            None if self.type_default => quote!(::core::default::Default::default()),
            None => return quote!(::core::option::Option::None),
        };

        quote! {
            ::core::option::Option::Some({
                let value: #ty = #init;
                #to_value
            })
        }
    }
}
