use branchgate::decision::exclusion::intersect_by_revision;
use branchgate::types::RevisionId;
use branchgate_test_utils::builders::changeset;
use branchgate_test_utils::init_tracing;

#[test]
fn keeps_the_intersection_by_revision_id() {
    init_tracing();

    // Base {A, B, C} against reference {B, C, D} keeps {B, C} — never {A}.
    let base = vec![
        changeset("A", &["a.rs"]),
        changeset("B", &["b.rs"]),
        changeset("C", &["c.rs"]),
    ];
    let reference = vec![
        changeset("B", &["b.rs"]),
        changeset("C", &["c.rs"]),
        changeset("D", &["d.rs"]),
    ];

    let kept = intersect_by_revision(base, &reference);
    let revisions: Vec<&RevisionId> = kept.iter().map(|cs| cs.revision()).collect();
    assert_eq!(revisions, vec![&RevisionId::from("B"), &RevisionId::from("C")]);
}

#[test]
fn disjoint_histories_intersect_to_nothing() {
    init_tracing();

    // The expected common case for branches unrelated to the excluded branch.
    let base = vec![changeset("A", &["a.rs"]), changeset("B", &["b.rs"])];
    let reference = vec![changeset("X", &["x.rs"])];

    assert!(intersect_by_revision(base, &reference).is_empty());
}

#[test]
fn intersection_is_by_revision_not_by_path() {
    init_tracing();

    // Two unrelated commits touching the same file must not be conflated.
    let base = vec![changeset("A", &["shared.rs"])];
    let reference = vec![changeset("B", &["shared.rs"])];

    assert!(intersect_by_revision(base, &reference).is_empty());
}

#[test]
fn base_order_is_preserved() {
    init_tracing();

    let base = vec![
        changeset("C", &["c.rs"]),
        changeset("A", &["a.rs"]),
        changeset("B", &["b.rs"]),
    ];
    let reference = vec![
        changeset("A", &[]),
        changeset("B", &[]),
        changeset("C", &[]),
    ];

    let kept = intersect_by_revision(base, &reference);
    let revisions: Vec<&str> = kept.iter().map(|cs| cs.revision().as_str()).collect();
    assert_eq!(revisions, vec!["C", "A", "B"]);
}
