use crate::prelude::*;

///
/// Person
///
/// Lenient record: any key spelling, unknown keys dropped, values coerced.
///

#[derive(Clone, Construct, Debug, PartialEq)]
#[construct(strategy = "lenient")]
pub struct Person {
    pub first_name: String,
    pub last_name: Option<String>,

    #[construct(default = 0)]
    pub age: u32,

    #[construct(default)]
    pub active: bool,

    pub nicknames: Vec<String>,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Person {
        Person::new(input! { "firstName" => "Ada", "nicknames" => Vec::<String>::new() })
            .expect("ada")
    }

    #[test]
    fn camel_case_keys_reach_snake_case_fields() {
        let p = ada();

        assert_eq!(p.first_name, "Ada");
        assert_eq!(p.last_name, None);
        assert_eq!(p.age, 0);
        assert!(!p.active);
    }

    #[test]
    fn other_conventions_resolve_too() {
        let p = Person::new(input! {
            "FIRST_NAME" => "Grace",
            "last-name" => "Hopper",
            "Nicknames" => vec!["Amazing Grace"],
        })
        .expect("person");

        assert_eq!(p.first_name, "Grace");
        assert_eq!(p.last_name.as_deref(), Some("Hopper"));
        assert_eq!(p.nicknames, ["Amazing Grace"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let p = Person::new(input! {
            "firstName" => "Ada",
            "nicknames" => Vec::<String>::new(),
            "favouriteColour" => "green",
        });

        assert_eq!(p, Ok(ada()));
    }

    #[test]
    fn text_and_floats_coerce_into_numbers_and_bools() {
        let p = ada()
            .put(input! { "age" => "42", "active" => "TRUE" })
            .expect("coerced");
        assert_eq!(p.age, 42);
        assert!(p.active);

        let p = ada().put(input! { "age" => 36.0 }).expect("integral float");
        assert_eq!(p.age, 36);
    }

    #[test]
    fn numbers_coerce_into_text() {
        let p = ada().put(input! { "lastName" => 1815 }).expect("text");

        assert_eq!(p.last_name.as_deref(), Some("1815"));
    }

    #[test]
    fn uncoercible_values_still_fail_typing() {
        let err = ada().put(input! { "age" => "forty" }).expect_err("not a number");

        assert!(matches!(
            err,
            ConstructError::FieldType {
                field: "age",
                expected: recast::ValueFamily::Uint,
                actual: recast::ValueFamily::Text,
                ..
            }
        ));
    }

    #[test]
    fn two_spellings_of_one_field_collide() {
        let err = Person::new(input! {
            "first_name" => "Ada",
            "firstName" => "Ada",
            "nicknames" => Vec::<String>::new(),
        })
        .expect_err("collision");

        assert!(matches!(err, ConstructError::DuplicateKey { .. }));
    }

    #[test]
    fn required_fields_still_apply() {
        let err = Person::new(input! { "firstName" => "Ada" }).expect_err("nicknames missing");

        assert_eq!(err.field(), Some("nicknames"));
    }
}
