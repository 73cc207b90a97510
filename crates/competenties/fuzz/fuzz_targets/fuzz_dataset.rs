//! Fuzz target for dataset loading and reduction.
//!
//! Arbitrary bytes are written as a skills data file and queried. Loading may
//! fail, but it must fail with an error rather than a panic.

#![no_main]

use std::io::Write;

use competenties::{SkillFilter, skills_in};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Keep inputs small enough to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let Ok(mut file) = std::fs::File::create(dir.path().join("vaardigheden-nl.json")) else {
        return;
    };
    if file.write_all(data).is_err() {
        return;
    }

    let engine = skills_in(dir.path());
    let _ = engine.query(&SkillFilter::new());
    let _ = engine.query(&SkillFilter::new().skill("Plannen").level("2"));
});
