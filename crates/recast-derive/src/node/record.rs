use crate::node::Field;
use darling::{Error as DarlingError, FromDeriveInput, ast::Data, util::Override};
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::BTreeSet;
use syn::{Generics, Ident, Path, Type, Visibility};

///
/// Record
///
/// A `#[derive(Construct)]` target: a struct with named fields plus its
/// `#[construct(...)]` options.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(construct), supports(struct_named))]
pub struct Record {
    pub ident: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub data: Data<(), Field>,

    #[darling(default)]
    pub strategy: Option<String>,

    #[darling(default)]
    pub validate: Option<Override<Path>>,

    #[darling(default)]
    pub error: Option<Type>,

    #[darling(default)]
    pub manual_validate: bool,

    #[darling(default, rename = "default")]
    pub type_default: bool,

    #[darling(default)]
    pub skip_inherent: bool,
}

impl Record {
    /// Named fields with struct-level options applied.
    pub fn fields(&self) -> Vec<Field> {
        let Data::Struct(fields) = &self.data else {
            return Vec::new();
        };

        fields
            .iter()
            .cloned()
            .map(|mut field| {
                field.type_default = self.type_default;
                field
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), DarlingError> {
        let mut errors = DarlingError::accumulator();

        if self.manual_validate && (self.validate.is_some() || self.error.is_some()) {
            errors.push(
                DarlingError::custom("`manual_validate` cannot be combined with `validate` or `error`")
                    .with_span(&self.ident),
            );
        }

        if let Err(err) = self.strategy_path() {
            errors.push(err);
        }

        let mut keys = BTreeSet::new();
        for field in self.fields() {
            if let Err(err) = field.validate() {
                errors.push(err);
            }

            if !field.skip && !keys.insert(field.key()) {
                errors.push(
                    DarlingError::custom(format!("duplicate input key '{}'", field.key()))
                        .with_span(&field.ident()),
                );
            }
        }

        errors.finish()
    }

    /// Strategy type named by `strategy`, `Native` when absent.
    pub fn strategy_path(&self) -> Result<TokenStream, DarlingError> {
        match self.strategy.as_deref() {
            None | Some("native") => Ok(quote!(::recast::strategy::Native)),
            Some("lenient") => Ok(quote!(::recast::strategy::Lenient)),
            Some(other) => syn::parse_str::<Path>(other)
                .ok()
                .filter(|path| !is_bare_lowercase(path))
                .map(|path| quote!(#path))
                .ok_or_else(|| {
                    DarlingError::custom(format!(
                        "unknown strategy '{other}': expected \"native\", \"lenient\" or a type path"
                    ))
                    .with_span(&self.ident)
                }),
        }
    }

    /// Path of the validation hook, if any.
    pub fn hook(&self) -> Option<TokenStream> {
        self.validate.as_ref().map(|hook| match hook {
            Override::Inherit => quote!(Self::validate_struct),
            Override::Explicit(path) => quote!(#path),
        })
    }

    pub fn error_type(&self) -> TokenStream {
        self.error
            .as_ref()
            .map_or_else(|| quote!(::recast::ConstructError), |ty| quote!(#ty))
    }
}

// A single lowercase segment reads as a misspelt strategy name, not a type.
fn is_bare_lowercase(path: &Path) -> bool {
    path.leading_colon.is_none()
        && path.segments.len() == 1
        && path
            .segments
            .first()
            .is_some_and(|segment| {
                segment
                    .ident
                    .to_string()
                    .starts_with(|c: char| c.is_ascii_lowercase())
            })
}
