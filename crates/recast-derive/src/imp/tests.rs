use super::derive_construct;
use quote::quote;

fn expand(input: proc_macro2::TokenStream) -> String {
    derive_construct(input).to_string()
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    squash(haystack).contains(&squash(needle))
}

#[test]
fn plain_struct_gets_all_impls() {
    let out = expand(quote! {
        pub struct Point {
            x: i64,
            y: i64,
            z: Option<i64>,
        }
    });

    assert!(contains(&out, "impl ::recast::traits::Record for Point"));
    assert!(contains(&out, "impl ::recast::traits::Validate for Point"));
    assert!(contains(&out, "type Error = ::recast::ConstructError;"));
    assert!(contains(
        &out,
        "type Strategy = ::recast::strategy::Native;"
    ));
    assert!(contains(&out, "pub fn new("));
    assert!(contains(&out, "pub fn put("));
    assert!(!out.contains("compile_error"));
}

#[test]
fn optional_fields_default_to_null_and_others_are_required() {
    let out = expand(quote! {
        struct Point {
            x: i64,
            z: Option<i64>,
        }
    });

    assert!(contains(&out, "name: \"x\", key: \"x\""));
    assert!(contains(&out, "required: true, has_default: false, skip: false"));
    assert!(contains(
        &out,
        "::core::option::Option::Some(::recast::value::Value::Null)"
    ));
}

#[test]
fn hook_and_error_are_wired() {
    let out = expand(quote! {
        #[construct(validate = "check_point", error = "PointError")]
        struct Point { x: i64 }
    });

    assert!(contains(&out, "type Error = PointError;"));
    assert!(contains(&out, "check_point(self)"));

    let inherit = expand(quote! {
        #[construct(validate)]
        struct Point { x: i64 }
    });
    assert!(contains(&inherit, "Self::validate_struct(self)"));
}

#[test]
fn manual_validate_emits_no_validate_impl() {
    let out = expand(quote! {
        #[construct(manual_validate)]
        struct Point { x: i64 }
    });

    assert!(!contains(&out, "traits::Validate for Point"));
    assert!(contains(&out, "traits::Construct for Point"));
}

#[test]
fn lenient_and_custom_strategies_resolve() {
    let lenient = expand(quote! {
        #[construct(strategy = "lenient")]
        struct Person { first_name: String }
    });
    assert!(contains(&lenient, "type Strategy = ::recast::strategy::Lenient;"));

    let custom = expand(quote! {
        #[construct(strategy = "crate::Prefixed")]
        struct Person { first_name: String }
    });
    assert!(contains(&custom, "type Strategy = crate::Prefixed;"));

    let local = expand(quote! {
        #[construct(strategy = "Dotted")]
        struct Person { first_name: String }
    });
    assert!(contains(&local, "type Strategy = Dotted;"));
}

#[test]
fn rename_default_and_skip_shape_the_model() {
    let out = expand(quote! {
        struct Account {
            #[construct(rename = "userName")]
            user_name: String,
            #[construct(default = "guest")]
            role: String,
            #[construct(skip, default = 1)]
            revision: u64,
        }
    });

    assert!(contains(&out, "name: \"user_name\", key: \"userName\""));
    assert!(contains(&out, "::core::convert::Into::into(\"guest\")"));
    assert!(contains(&out, "let value: u64 = 1;"));
    assert!(contains(&out, "skip: true"));
}

#[test]
fn struct_level_default_fills_plain_fields() {
    let out = expand(quote! {
        #[construct(default)]
        struct Counter { hits: u64 }
    });

    assert!(contains(&out, "required: false, has_default: true"));
    assert!(contains(&out, "let value: u64 = ::core::default::Default::default();"));
}

#[test]
fn skip_inherent_leaves_only_traits() {
    let out = expand(quote! {
        #[construct(skip_inherent)]
        struct Point { x: i64 }
    });

    assert!(!out.contains("fn new"));
    assert!(contains(&out, "traits::Construct for Point"));
}

#[test]
fn generic_structs_bound_field_types() {
    let out = expand(quote! {
        struct Wrapper<T> { inner: T }
    });

    assert!(contains(&out, "impl<T> ::recast::traits::Record for Wrapper<T>"));
    assert!(contains(&out, "where T: ::recast::traits::FieldValue"));
}

#[test]
fn empty_struct_materializes_without_slots() {
    let out = expand(quote! {
        struct Unit {}
    });

    assert!(contains(&out, "fn from_slots(_slots: ::recast::model::Slots"));
}

#[test]
fn invalid_attributes_become_compile_errors() {
    let cases = [
        quote! {
            #[construct(manual_validate, validate)]
            struct A { x: i64 }
        },
        quote! {
            struct B {
                #[construct(required, default = 1)]
                x: i64,
            }
        },
        quote! {
            struct C {
                #[construct(skip)]
                x: i64,
            }
        },
        quote! {
            struct D {
                a: i64,
                #[construct(rename = "a")]
                b: i64,
            }
        },
        quote! {
            #[construct(strategy = "not a path")]
            struct E { x: i64 }
        },
        quote! {
            #[construct(strategy = "strict")]
            struct E2 { x: i64 }
        },
        quote! {
            struct F(i64);
        },
        quote! {
            enum G { A }
        },
    ];

    let strict = expand(cases[5].clone());
    assert!(strict.contains("unknown strategy 'strict'"), "{strict}");

    for case in cases {
        let out = expand(case.clone());
        assert!(out.contains("compile_error"), "expected error for {case}");
    }
}
