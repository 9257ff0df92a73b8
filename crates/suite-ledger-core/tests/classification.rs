// crates/suite-ledger-core/tests/classification.rs
// ============================================================================
// Module: Classification Tests
// Description: First-match classification and destination naming.
// Purpose: Pin rule ordering, ignore lists, and the two renaming branches.
// Dependencies: suite-ledger-core, proptest
// ============================================================================
//! ## Overview
//! Classification must be deterministic and order-sensitive; renaming must
//! follow the stem/strip policy exactly.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::path::PathBuf;

use proptest::prelude::*;
use suite_ledger_core::Classification;
use suite_ledger_core::CorpusEntry;
use suite_ledger_core::GroupRule;
use suite_ledger_core::runtime::classified_test;
use suite_ledger_core::runtime::classify;
use suite_ledger_core::runtime::destination_filename;

fn entry(relative: &str) -> CorpusEntry {
    CorpusEntry::new(relative, PathBuf::from("/corpus").join(relative))
}

fn matched_group(classification: Classification<'_>) -> Option<String> {
    match classification {
        Classification::Matched(rule) => Some(rule.group.clone()),
        Classification::Ignored => None,
    }
}

// ============================================================================
// SECTION: Classification
// ============================================================================

#[test]
fn entry_splits_filename_from_relative_path() {
    let entry = entry("test/parallel/test-fs-read.js");
    assert_eq!(entry.filename, "test-fs-read.js");
    assert_eq!(entry.relative_path, "test/parallel/test-fs-read.js");
}

#[test]
fn first_matching_rule_wins_over_more_specific_prefix() {
    let rules = vec![
        GroupRule::new("fs", "test/parallel/test-fs"),
        GroupRule::new("fs-read", "test/parallel/test-fs-read"),
    ];
    let result = classify(&entry("test/parallel/test-fs-read.js"), &rules);
    assert_eq!(matched_group(result).as_deref(), Some("fs"));
}

#[test]
fn swapping_rule_order_changes_the_winner() {
    let rules = vec![
        GroupRule::new("fs-read", "test/parallel/test-fs-read"),
        GroupRule::new("fs", "test/parallel/test-fs"),
    ];
    let result = classify(&entry("test/parallel/test-fs-read.js"), &rules);
    assert_eq!(matched_group(result).as_deref(), Some("fs-read"));
}

#[test]
fn ignored_filename_falls_through_to_next_rule() {
    let rules = vec![
        GroupRule::new("fs", "test/parallel/test-fs").ignoring("test-fs-read.js"),
        GroupRule::new("parallel", "test/parallel/"),
    ];
    let result = classify(&entry("test/parallel/test-fs-read.js"), &rules);
    assert_eq!(matched_group(result).as_deref(), Some("parallel"));
}

#[test]
fn entry_ignored_by_every_matching_rule_is_ignored() {
    let rules = vec![
        GroupRule::new("fs", "test/parallel/test-fs").ignoring("test-fs-read.js"),
        GroupRule::new("fs-again", "test/parallel/test-fs-").ignoring("test-fs-read.js"),
    ];
    let result = classify(&entry("test/parallel/test-fs-read.js"), &rules);
    assert_eq!(result, Classification::Ignored);
}

#[test]
fn entry_matching_no_prefix_is_ignored() {
    let rules = vec![GroupRule::new("fs", "test/parallel/test-fs")];
    assert_eq!(classify(&entry("test/sequential/test-net.js"), &rules), Classification::Ignored);
}

#[test]
fn ignore_list_compares_whole_filenames() {
    let rules = vec![GroupRule::new("fs", "test/parallel/test-fs").ignoring("read.js")];
    let result = classify(&entry("test/parallel/test-fs-read.js"), &rules);
    assert_eq!(matched_group(result).as_deref(), Some("fs"));
}

// ============================================================================
// SECTION: Naming
// ============================================================================

#[test]
fn prefix_ending_in_dash_strips_shared_segment() {
    let rule = GroupRule::new("fs", "test/parallel/test-fs-");
    let test = classified_test(&rule, &entry("test/parallel/test-fs-read.js"));
    assert_eq!(test.destination(), "fs/read.js");
}

#[test]
fn prefix_without_joiner_strips_segment_plus_one() {
    let rule = GroupRule::new("fs", "test/parallel/test-fs");
    assert_eq!(destination_filename(&rule, "test-fs-read.js"), "read.js");
    assert_eq!(destination_filename(&rule, "test-fs_stat.mjs"), "stat.mjs");
}

#[test]
fn prefix_naming_the_file_uses_group_name() {
    let rule = GroupRule::new("timers", "test/pummel/test-timers");
    let test = classified_test(&rule, &entry("test/pummel/test-timers.js"));
    assert_eq!(test.destination(), "timers/timers.js");
}

#[test]
fn prefix_naming_the_file_keeps_its_extension() {
    let rule = GroupRule::new("esm", "test/es-module/test-esm");
    assert_eq!(destination_filename(&rule, "test-esm.mjs"), "esm.mjs");
}

#[test]
fn directory_prefix_strips_one_character() {
    let rule = GroupRule::new("parallel", "test/parallel/");
    assert_eq!(destination_filename(&rule, "xtest-net.js"), "test-net.js");
}

#[test]
fn trailing_segment_is_text_after_last_slash() {
    assert_eq!(GroupRule::new("fs", "test/parallel/test-fs-").trailing_segment(), "test-fs-");
    assert_eq!(GroupRule::new("fs", "test-fs").trailing_segment(), "test-fs");
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn classification_is_first_acceptable_rule(
        prefixes in prop::collection::vec("test/(a|b)/t-[a-c]{0,2}", 1 .. 6),
        name in "t-[a-c]{1,4}",
        ignored_index in 0_usize .. 6,
    ) {
        let rules: Vec<GroupRule> = prefixes
            .iter()
            .enumerate()
            .map(|(index, prefix)| {
                let rule = GroupRule::new(format!("g{index}"), prefix.clone());
                if index == ignored_index { rule.ignoring(format!("{name}.js")) } else { rule }
            })
            .collect();
        let candidate = entry(&format!("test/a/{name}.js"));
        let expected = rules.iter().position(|rule| {
            candidate.relative_path.starts_with(&rule.prefix) && !rule.ignores(&candidate.filename)
        });
        let actual = match classify(&candidate, &rules) {
            Classification::Matched(rule) => rules.iter().position(|other| std::ptr::eq(other, rule)),
            Classification::Ignored => None,
        };
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn non_joiner_segment_strips_len_plus_one(
        segment in "test-[a-z]{1,6}",
        rest in "[a-z]{1,8}",
    ) {
        let rule = GroupRule::new("group", format!("test/parallel/{segment}"));
        let filename = format!("{segment}-{rest}.js");
        let expected = filename[segment.len() + 1 ..].to_string();
        prop_assert_eq!(destination_filename(&rule, &filename), expected);
    }
}
