use proc_macro::TokenStream;

mod imp;
mod node;
mod util;

///
/// Construct
///
/// Generates `new` and `put` for a named-field struct.
///
/// Struct attributes, all under `#[construct(...)]`:
/// - `strategy = "native" | "lenient" | "path::To::Strategy"`
/// - `validate` or `validate = "path::to::fn"`: hook taking `Self` by value
/// - `error = "Type"`: error type returned by `new`/`put`
/// - `manual_validate`: implement `Validate` by hand
/// - `default`: fields without an explicit default use `Default::default()`
/// - `skip_inherent`: only implement the traits
///
/// Field attributes: `required`, `default` / `default = expr`,
/// `rename = "key"`, `skip`.
///
#[proc_macro_derive(Construct, attributes(construct))]
pub fn derive_construct(input: TokenStream) -> TokenStream {
    imp::derive_construct(input.into()).into()
}
