//! Construction driver shared by `new` and `put`.
//!
//! Both calls follow the same pipeline: seed slots, merge input through a
//! strategy, check required fields, materialize, then run the validation
//! hook. They differ only in how slots are seeded.

use crate::{
    error::ConstructError,
    input::Input,
    model::Slots,
    obs::{
        MetricsEvent,
        sink::{ConstructKind, Outcome, Span, record},
    },
    strategy::{MergeStrategy, merge_input},
    traits::{Record, Validate},
};

///
/// new_with
///
/// Build a fresh `R` from declared defaults plus `input`.
///
pub fn new_with<R, S>(strategy: &S, input: impl Into<Input>) -> Result<R, R::Error>
where
    R: Record + Validate,
    S: MergeStrategy + ?Sized,
{
    run::<R, S>(ConstructKind::New, R::default_slots(), strategy, input.into())
}

///
/// put_with
///
/// Build a new `R` from the fields of `existing` plus `input`.
/// `existing` is left untouched.
///
pub fn put_with<R, S>(existing: &R, strategy: &S, input: impl Into<Input>) -> Result<R, R::Error>
where
    R: Record + Validate,
    S: MergeStrategy + ?Sized,
{
    run::<R, S>(ConstructKind::Put, existing.to_slots(), strategy, input.into())
}

fn run<R, S>(kind: ConstructKind, slots: Slots, strategy: &S, input: Input) -> Result<R, R::Error>
where
    R: Record + Validate,
    S: MergeStrategy + ?Sized,
{
    let span = Span::new(kind, R::MODEL.path);

    let built = match assemble::<R, S>(slots, strategy, input) {
        Ok(built) => built,
        Err(err) => {
            span.finish(Outcome::Failed);
            return Err(R::Error::from(err));
        }
    };

    match built.validate() {
        Ok(valid) => {
            span.finish(Outcome::Built);
            Ok(valid)
        }
        Err(err) => {
            span.finish(Outcome::Rejected);
            Err(err)
        }
    }
}

// Merge, required-field check, and materialization.
fn assemble<R, S>(mut slots: Slots, strategy: &S, input: Input) -> Result<R, ConstructError>
where
    R: Record,
    S: MergeStrategy + ?Sized,
{
    let model = R::MODEL;

    merge_input(strategy, model, &mut slots, input)?;

    if let Some(field) = slots.first_missing(model) {
        record(MetricsEvent::MissingRequired {
            record_path: model.path,
            field: field.name,
        });

        return Err(ConstructError::MissingRequiredField {
            record: model.path,
            field: field.name,
        });
    }

    R::from_slots(slots)
}

///
/// TESTS
///
