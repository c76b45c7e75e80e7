use branchgate::regions::RegionSet;
use branchgate_test_utils::init_tracing;

#[test]
fn double_star_crosses_directories() {
    init_tracing();

    let regions = RegionSet::parse("src/**/*.go");
    assert!(regions.matches_any("src/pkg/sub/file.go"));
    assert!(regions.matches_any("src/file.go"));
    assert!(!regions.matches_any("README.md"));
    assert!(!regions.matches_any("other/src/file.go"));
}

#[test]
fn single_star_stays_within_one_directory() {
    init_tracing();

    // No implicit recursive descent without `**`.
    let regions = RegionSet::parse("*.txt");
    assert!(regions.matches_any("notes.txt"));
    assert!(!regions.matches_any("dir/notes.txt"));
}

#[test]
fn question_mark_matches_exactly_one_character() {
    init_tracing();

    let regions = RegionSet::parse("docs/page?.md");
    assert!(regions.matches_any("docs/page1.md"));
    assert!(!regions.matches_any("docs/page.md"));
    assert!(!regions.matches_any("docs/page12.md"));
    // The separator is not "one character".
    assert!(!regions.matches_any("docs/page/.md"));
}

#[test]
fn matching_is_case_sensitive_and_anchored() {
    init_tracing();

    let regions = RegionSet::parse("docs/readme.md");
    assert!(regions.matches_any("docs/readme.md"));
    assert!(!regions.matches_any("docs/README.md"));
    // Whole path must match, not a substring.
    assert!(!regions.matches_any("sub/docs/readme.md"));
}

#[test]
fn trailing_slash_matches_whole_subtree() {
    init_tracing();

    let regions = RegionSet::parse("docs/");
    assert!(regions.matches_any("docs/readme.md"));
    assert!(regions.matches_any("docs/guide/intro.md"));
    assert!(!regions.matches_any("src/main.go"));
}

#[test]
fn parse_trims_lines_and_drops_blanks() {
    init_tracing();

    let regions = RegionSet::parse("  docs/**  \n\n   \n src/**/*.rs\n");
    let patterns: Vec<&str> = regions.patterns().collect();
    assert_eq!(patterns, vec!["docs/**", "src/**/*.rs"]);

    // Only blank lines: the set is empty.
    assert!(RegionSet::parse("\n   \n\t\n").is_empty());
    assert!(RegionSet::parse("").is_empty());
}

#[test]
fn first_match_honours_input_order() {
    init_tracing();

    let regions = RegionSet::parse("docs/**\n**");
    let hit = regions.first_match("docs/readme.md").expect("should match");
    assert_eq!(hit.pattern(), "docs/**");

    let hit = regions.first_match("src/main.rs").expect("should match");
    assert_eq!(hit.pattern(), "**");
}

#[test]
fn invalid_pattern_is_kept_but_never_matches() {
    init_tracing();

    // "a{b" is not a valid glob; the entry stays in the list (the region set
    // is still non-empty) but cannot match anything.
    let regions = RegionSet::parse("a{b");
    assert!(!regions.is_empty());
    assert_eq!(regions.len(), 1);
    assert!(!regions.matches_any("a{b"));
    assert!(!regions.matches_any("ab"));
}
