use dupescan::actions::delete_files;
use dupescan::duplicates::{
    find_duplicates, group_by_size, parse_selection, resolve_selection, sort_groups,
    total_indexed, DuplicateGroup, SortOrder,
};
use dupescan::scanner::{FileEntry, Hasher, Walker};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn make_file(dir: &Path, name: &str, content: &[u8]) {
    fs::write(dir.join(name), content).unwrap();
}

/// Walk, group, sort descending, and hash-confirm duplicates under `root`.
fn duplicates_in(root: &Path) -> Vec<DuplicateGroup> {
    let walker = Walker::new(root);
    let files = walker.walk().collect::<Result<Vec<_>, _>>().unwrap();
    let (mut groups, _stats) = group_by_size(files);
    sort_groups(&mut groups, SortOrder::Descending);
    find_duplicates(&groups, &Hasher::new()).unwrap()
}

#[test]
fn test_selection_resolves_to_global_indices() {
    let dir = tempdir().unwrap();
    make_file(dir.path(), "big1.txt", b"fives");
    make_file(dir.path(), "big2.txt", b"fives");
    make_file(dir.path(), "small1.txt", b"hey");
    make_file(dir.path(), "small2.txt", b"hey");

    let groups = duplicates_in(dir.path());
    assert_eq!(total_indexed(&groups), 4);

    // Descending sort puts the 5-byte pair at indices 1-2
    let first = resolve_selection(&groups, 1).unwrap();
    assert_eq!(first.path, dir.path().join("big1.txt"));
    assert_eq!(first.size, 5);

    let third = resolve_selection(&groups, 3).unwrap();
    assert_eq!(third.path, dir.path().join("small1.txt"));
    assert_eq!(third.size, 3);

    let fourth = resolve_selection(&groups, 4).unwrap();
    assert_eq!(fourth.path, dir.path().join("small2.txt"));
}

#[test]
fn test_parsed_selection_deletes_in_given_order() {
    let dir = tempdir().unwrap();
    make_file(dir.path(), "a.txt", b"hello");
    make_file(dir.path(), "b.txt", b"hello");

    let groups = duplicates_in(dir.path());
    let selection = parse_selection("2 1", total_indexed(&groups)).unwrap();
    assert_eq!(selection, vec![2, 1]);

    let entries: Vec<FileEntry> = selection
        .into_iter()
        .map(|index| resolve_selection(&groups, index).unwrap())
        .collect();
    let report = delete_files(&entries);

    assert!(report.all_succeeded());
    assert_eq!(report.deleted.len(), 2);
    assert_eq!(report.deleted[0], dir.path().join("b.txt"));
    assert_eq!(report.deleted[1], dir.path().join("a.txt"));
    assert_eq!(report.bytes_freed, 10);
    assert!(!dir.path().join("a.txt").exists());
    assert!(!dir.path().join("b.txt").exists());
}

#[test]
fn test_delete_continues_past_missing_file() {
    let dir = tempdir().unwrap();
    make_file(dir.path(), "keep-me-not.txt", b"data");
    let missing = dir.path().join("vanished.txt");

    let entries = vec![
        FileEntry::new(missing.clone(), 4),
        FileEntry::new(dir.path().join("keep-me-not.txt"), 4),
    ];
    let report = delete_files(&entries);

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.failures[0].0, missing);
    assert_eq!(report.bytes_freed, 4);
    assert!(!dir.path().join("keep-me-not.txt").exists());
}

#[test]
fn test_deleting_every_duplicate_frees_their_total() {
    let dir = tempdir().unwrap();
    make_file(dir.path(), "a.txt", b"hello");
    make_file(dir.path(), "b.txt", b"hello");
    make_file(dir.path(), "x.txt", b"hey");
    make_file(dir.path(), "y.txt", b"hey");

    let groups = duplicates_in(dir.path());
    let total = total_indexed(&groups);

    let entries: Vec<FileEntry> = (1..=total)
        .map(|index| resolve_selection(&groups, index).unwrap())
        .collect();
    let report = delete_files(&entries);

    assert!(report.all_succeeded());
    assert_eq!(report.bytes_freed, 5 + 5 + 3 + 3);
    for group in &groups {
        for path in &group.files {
            assert!(!path.exists());
        }
    }
}

#[test]
fn test_invalid_selections_are_rejected_wholesale() {
    // Two indexed files: anything outside 1..=2, or non-numeric, fails
    assert_eq!(parse_selection("0", 2), None);
    assert_eq!(parse_selection("3", 2), None);
    assert_eq!(parse_selection("-1", 2), None);
    assert_eq!(parse_selection("1 x", 2), None);
    assert_eq!(parse_selection("1.5", 2), None);
    assert_eq!(parse_selection("1 2", 2), Some(vec![1, 2]));
    assert_eq!(parse_selection("", 2), Some(vec![]));
}
