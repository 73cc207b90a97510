//! Property-based tests for filter validation and reduction.
//!
//! These tests use proptest to generate filter combinations and verify that
//! the query engines keep their invariants under all of them.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **Conjunction**: combined filters equal the intersection of single filters
//! 2. **Collapse**: a filtered dimension has exactly one key, an open one keeps all
//! 3. **Exact match**: case and whitespace variants are always rejected
//! 4. **Determinism**: the same query yields byte-identical JSON
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p competenties --test property_tests
//!
//! # With more cases
//! PROPTEST_CASES=10000 cargo test -p competenties --test property_tests
//! ```

use std::path::Path;
use std::sync::OnceLock;

use proptest::prelude::*;

use competenties::{
    ACTIVITIES, LAYERS, LEVELS, SKILLS, SkillDataset, SkillFilter, SkillQueryEngine,
    TaskDataset, TaskFilter, TaskQueryEngine, skills_in, tasks_in,
    validation::{validate_activity, validate_layer, validate_level, validate_skill_name},
};

// =============================================================================
// Fixtures
// =============================================================================

fn fixtures() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn skill_data() -> &'static SkillDataset {
    static DATA: OnceLock<SkillDataset> = OnceLock::new();
    DATA.get_or_init(|| skills_in(fixtures()).load().unwrap().data)
}

fn task_data() -> &'static TaskDataset {
    static DATA: OnceLock<TaskDataset> = OnceLock::new();
    DATA.get_or_init(|| tasks_in(fixtures()).load().unwrap().data)
}

fn skill_engine() -> SkillQueryEngine {
    skills_in(fixtures())
}

fn task_engine() -> TaskQueryEngine {
    tasks_in(fixtures())
}

// =============================================================================
// Test Strategies
// =============================================================================

fn member(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(values).prop_map(str::to_string))
}

fn skill_filter() -> impl Strategy<Value = SkillFilter> {
    (member(SKILLS), member(LEVELS)).prop_map(|(skill, level)| SkillFilter { skill, level })
}

fn task_filter() -> impl Strategy<Value = TaskFilter> {
    (member(LAYERS), member(ACTIVITIES), member(LEVELS)).prop_map(|(layer, activity, level)| {
        TaskFilter {
            layer,
            activity,
            level,
        }
    })
}

/// A value that differs from `value` only in case or surrounding whitespace.
fn near_miss(value: &'static str) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(value.to_lowercase()),
        Just(value.to_uppercase()),
        Just(format!(" {value}")),
        Just(format!("{value} ")),
        Just(format!("{value}\t")),
    ]
    .prop_filter("must differ from the original", move |v| v != value)
}

fn intersect_tasks(a: &TaskDataset, b: &TaskDataset) -> TaskDataset {
    a.iter()
        .filter_map(|(layer, activities)| {
            let other = b.get(layer)?;
            let kept: indexmap::IndexMap<_, _> = activities
                .iter()
                .filter_map(|(activity, levels)| {
                    let other = other.get(activity)?;
                    let kept: indexmap::IndexMap<_, _> = levels
                        .iter()
                        .filter(|(level, record)| other.get(*level) == Some(*record))
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                    (!kept.is_empty()).then(|| (activity.clone(), kept))
                })
                .collect();
            (!kept.is_empty()).then(|| (layer.clone(), kept))
        })
        .collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn skill_filters_collapse_exactly_the_filtered_dimensions(filter in skill_filter()) {
        let result = skill_engine().filter(skill_data(), &filter).unwrap();

        match &filter.skill {
            Some(skill) => {
                prop_assert_eq!(result.keys().collect::<Vec<_>>(), vec![skill]);
            }
            None => {
                prop_assert_eq!(result.len(), SKILLS.len());
            }
        }
        for levels in result.values() {
            match &filter.level {
                Some(level) => {
                    prop_assert_eq!(levels.keys().collect::<Vec<_>>(), vec![level]);
                }
                None => {
                    prop_assert_eq!(levels.len(), LEVELS.len());
                }
            }
        }
    }

    #[test]
    fn task_filters_collapse_exactly_the_filtered_dimensions(filter in task_filter()) {
        let result = task_engine().filter(task_data(), &filter).unwrap();

        prop_assert_eq!(result.len(), if filter.layer.is_some() { 1 } else { LAYERS.len() });
        for activities in result.values() {
            prop_assert_eq!(
                activities.len(),
                if filter.activity.is_some() { 1 } else { ACTIVITIES.len() }
            );
            for levels in activities.values() {
                prop_assert_eq!(
                    levels.len(),
                    if filter.level.is_some() { 1 } else { LEVELS.len() }
                );
            }
        }
    }

    #[test]
    fn task_filters_are_conjunctive(filter in task_filter()) {
        let engine = task_engine();
        let data = task_data();
        let combined = engine.filter(data, &filter).unwrap();

        let single = [
            TaskFilter { layer: filter.layer.clone(), ..TaskFilter::default() },
            TaskFilter { activity: filter.activity.clone(), ..TaskFilter::default() },
            TaskFilter { level: filter.level.clone(), ..TaskFilter::default() },
        ];
        let intersection = single
            .iter()
            .map(|f| engine.filter(data, f).unwrap())
            .reduce(|acc, next| intersect_tasks(&acc, &next))
            .unwrap();

        prop_assert_eq!(combined, intersection);
    }

    #[test]
    fn skill_filters_are_conjunctive(filter in skill_filter()) {
        let engine = skill_engine();
        let data = skill_data();
        let combined = engine.filter(data, &filter).unwrap();

        let by_skill = engine
            .filter(data, &SkillFilter { skill: filter.skill.clone(), level: None })
            .unwrap();
        let by_level = engine
            .filter(data, &SkillFilter { skill: None, level: filter.level.clone() })
            .unwrap();

        for (skill, levels) in &combined {
            for (level, record) in levels {
                prop_assert_eq!(by_skill.get(skill).and_then(|l| l.get(level)), Some(record));
                prop_assert_eq!(by_level.get(skill).and_then(|l| l.get(level)), Some(record));
            }
        }
        let expected: usize = by_skill
            .iter()
            .map(|(skill, levels)| {
                levels
                    .keys()
                    .filter(|level| by_level.get(skill).is_some_and(|l| l.contains_key(*level)))
                    .count()
            })
            .sum();
        let actual: usize = combined.values().map(|l| l.len()).sum();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn repeated_queries_are_byte_identical(filter in task_filter()) {
        let engine = task_engine();
        let first = serde_json::to_string_pretty(&engine.query(&filter).unwrap()).unwrap();
        let second = serde_json::to_string_pretty(&engine.query(&filter).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn near_miss_skills_are_rejected(
        value in proptest::sample::select(SKILLS).prop_flat_map(near_miss)
    ) {
        prop_assert!(validate_skill_name(&value).is_err());
    }

    #[test]
    fn near_miss_layers_are_rejected(
        value in proptest::sample::select(LAYERS).prop_flat_map(near_miss)
    ) {
        prop_assert!(validate_layer(&value).is_err());
    }

    #[test]
    fn near_miss_activities_are_rejected(
        value in proptest::sample::select(ACTIVITIES).prop_flat_map(near_miss)
    ) {
        prop_assert!(validate_activity(&value).is_err());
    }

    #[test]
    fn validators_never_panic(input in "\\PC{0,40}") {
        let _ = validate_skill_name(&input);
        let _ = validate_layer(&input);
        let _ = validate_activity(&input);
        let _ = validate_level(&input);
    }

    #[test]
    fn only_known_level_keys_parse(input in "[0-9 +\\-]{0,4}") {
        prop_assert_eq!(validate_level(&input).is_ok(), LEVELS.contains(&input.as_str()));
    }
}
