//! Validation of filter input against the fixed vocabulary.

mod validators;

pub use validators::{
    Level, validate_activity, validate_layer, validate_level, validate_member,
    validate_skill_name,
};
