//! Fuzz target for the filter validators.
//!
//! This fuzzer tests that validation:
//! 1. Never panics on any input
//! 2. Only accepts exact vocabulary members
//! 3. Echoes the rejected value back in the error

#![no_main]

use competenties::validation::{
    validate_activity, validate_layer, validate_level, validate_skill_name,
};
use competenties::{ACTIVITIES, CompetentiesError, LAYERS, LEVELS, SKILLS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);
    let input: &str = &lossy;

    assert_eq!(validate_skill_name(&input).is_ok(), SKILLS.contains(&input));
    assert_eq!(validate_layer(&input).is_ok(), LAYERS.contains(&input));
    assert_eq!(validate_activity(&input).is_ok(), ACTIVITIES.contains(&input));

    match validate_level(&input) {
        Ok(level) => assert!(LEVELS.contains(&level.key().as_str())),
        Err(CompetentiesError::InvalidLevel { value }) => assert_eq!(value, input),
        Err(other) => panic!("unexpected error: {other}"),
    }
});
