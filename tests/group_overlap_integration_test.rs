//! End-to-end tests for parsing group files and counting repeated pairs.

mod common;

use common::{create_test_file, fixture, round};
use indoc::indoc;
use pretty_assertions::assert_eq;
use regroup::analysis::{aggregate_pairs, aggregate_pairs_parallel, OverlapReport};
use regroup::parse::{parse_group_file_with, ParseOptions, TableOptions};
use regroup::{
    count_dup_member_pairs, parse_group_file, parse_member_file, Error, FormatError, GroupId,
    Member, MemberId,
};

#[test]
fn test_swapped_groups_fixture_counts_two() {
    let rounds = parse_group_file(&fixture("swapped_groups.csv")).unwrap();
    assert_eq!(rounds.len(), 2);
    assert_eq!(count_dup_member_pairs(&rounds).unwrap(), 2);
}

#[test]
fn test_fresh_groups_fixture_counts_zero() {
    let rounds = parse_group_file(&fixture("fresh_groups.csv")).unwrap();
    assert_eq!(count_dup_member_pairs(&rounds).unwrap(), 0);
}

#[test]
fn test_parsed_rounds_match_hand_built_rounds() {
    let rounds = parse_group_file(&fixture("swapped_groups.csv")).unwrap();
    let expected = vec![
        round(&[(1, &["alice", "bob"]), (2, &["carol", "dave"])]),
        round(&[(1, &["carol", "dave"]), (2, &["alice", "bob"])]),
    ];
    assert_eq!(rounds, expected);
}

#[test]
fn test_missing_cell_fixture_is_format_error() {
    let err = parse_group_file(&fixture("missing_cell.csv")).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::RaggedRow {
            row: 3,
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_missing_name_fixture_names_column() {
    let err = parse_group_file(&fixture("missing_name.csv")).unwrap_err();
    assert_eq!(err.to_string(), "failed to find NAME column");
}

#[test]
fn test_duplicate_name_fixture_is_user_fixable_format_error() {
    let err = parse_group_file(&fixture("duplicate_name.csv")).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::DuplicateName {
            row: 4,
            first_row: 2,
            ref name,
        }) if name == "alice"
    ));
    assert!(err.is_user_fixable());
}

#[test]
fn test_padded_header_fixture_is_missing_column_by_default() {
    let err = parse_group_file(&fixture("padded_header.csv")).unwrap_err();
    assert!(matches!(
        err,
        Error::Format(FormatError::MissingColumn(ref column)) if column == "NAME"
    ));
}

#[test]
fn test_padded_header_fixture_parses_with_trim() {
    let options = ParseOptions {
        table: TableOptions {
            trim: true,
            ..TableOptions::default()
        },
        ..ParseOptions::default()
    };
    let rounds = parse_group_file_with(&fixture("padded_header.csv"), &options).unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(count_dup_member_pairs(&rounds).unwrap(), 0);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = parse_group_file(&fixture("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(!err.is_user_fixable());
}

#[test]
fn test_empty_file_is_format_error() {
    let (_dir, path) = create_test_file("", "csv");
    let err = parse_group_file(&path).unwrap_err();
    assert!(matches!(err, Error::Format(FormatError::Empty)));
}

#[test]
fn test_three_rounds_with_uneven_groups() {
    let (_dir, path) = create_test_file(
        indoc! {"
            NAME,mon,tue,wed
            ann,1,1,3
            ben,1,2,3
            cat,1,1,3
            dan,2,2,1
            eve,2,1,1
        "},
        "csv",
    );
    let rounds = parse_group_file(&path).unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0].group(GroupId(1)).unwrap().len(), 3);

    // mon: ann-ben ann-cat ben-cat dan-eve
    // tue: ann-cat ann-eve cat-eve ben-dan
    // wed: ann-ben ann-cat ben-cat dan-eve
    // ann-cat x3, ann-ben x2, ben-cat x2, dan-eve x2
    assert_eq!(count_dup_member_pairs(&rounds).unwrap(), 5);

    let counts = aggregate_pairs(&rounds).unwrap();
    let report = OverlapReport::new(&rounds, &counts, 2);
    assert_eq!(report.members, 5);
    assert_eq!(report.repeated_pairs, 4);
    assert_eq!(report.excess, 5);
    assert_eq!(report.top[0].members, ("cat".to_string(), "ann".to_string()));
    assert_eq!(report.top[0].count, 3);
}

#[test]
fn test_semicolon_delimited_with_custom_name_column() {
    let (_dir, path) = create_test_file("who;r1;r2\nann;1;1\nben;1;1\n", "csv");
    let options = ParseOptions {
        name_column: "who".to_string(),
        table: TableOptions {
            delimiter: b';',
            trim: true,
        },
    };
    let rounds = parse_group_file_with(&path, &options).unwrap();
    assert_eq!(count_dup_member_pairs(&rounds).unwrap(), 1);
}

#[test]
fn test_pipeline_is_idempotent() {
    let path = fixture("swapped_groups.csv");
    let first = count_dup_member_pairs(&parse_group_file(&path).unwrap()).unwrap();
    let second = count_dup_member_pairs(&parse_group_file(&path).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_aggregation_matches_on_fixture() {
    let rounds = parse_group_file(&fixture("swapped_groups.csv")).unwrap();
    assert_eq!(
        aggregate_pairs(&rounds).unwrap(),
        aggregate_pairs_parallel(&rounds).unwrap()
    );
}

#[test]
fn test_member_roster_fixture() {
    let members = parse_member_file(&fixture("members.csv"), &TableOptions::default()).unwrap();
    assert_eq!(members.len(), 4);
    assert_eq!(members[2], Member::with_id("carol", MemberId(3)));
}
