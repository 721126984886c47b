use dupescan::duplicates::{find_duplicates, group_by_size, sort_groups, SortOrder};
use dupescan::scanner::{hash_to_hex, FileEntry, Hasher, Walker};
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

fn scan(walker: &Walker) -> Vec<FileEntry> {
    walker
        .walk()
        .collect::<Result<Vec<_>, _>>()
        .expect("walk failed")
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let walker = Walker::new(dir.path());
    let (groups, stats) = group_by_size(scan(&walker));

    assert!(groups.is_empty());
    assert_eq!(stats.total_files, 0);
    assert_eq!(stats.potential_duplicates, 0);
}

#[test]
fn test_scan_unique_sizes_produce_no_groups() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"x")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"xx")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"xxx")
        .unwrap();

    let walker = Walker::new(dir.path());
    let (groups, stats) = group_by_size(scan(&walker));

    assert!(groups.is_empty());
    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.eliminated_unique, 3);
}

#[test]
fn test_size_grouping_keeps_shared_sizes_only() {
    let dir = tempdir().unwrap();

    // a and b are identical, c merely matches their size, d is alone
    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"hello")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"hello")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"world")
        .unwrap();
    File::create(dir.path().join("d.txt"))
        .unwrap()
        .write_all(b"hey")
        .unwrap();

    let walker = Walker::new(dir.path());
    let (groups, stats) = group_by_size(scan(&walker));

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size, 5);
    assert_eq!(
        groups[0].files,
        vec![
            dir.path().join("a.txt"),
            dir.path().join("b.txt"),
            dir.path().join("c.txt"),
        ]
    );
    assert_eq!(stats.total_files, 4);
    assert_eq!(stats.potential_duplicates, 3);
    assert_eq!(stats.eliminated_unique, 1);
}

#[test]
fn test_hashing_confirms_real_duplicates() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"hello")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"hello")
        .unwrap();
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"world")
        .unwrap();
    File::create(dir.path().join("d.txt"))
        .unwrap()
        .write_all(b"hey")
        .unwrap();

    let walker = Walker::new(dir.path());
    let (groups, _stats) = group_by_size(scan(&walker));
    let duplicates = find_duplicates(&groups, &Hasher::new()).unwrap();

    // c.txt shared a size but not content, so only a and b remain
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].size, 5);
    assert_eq!(duplicates[0].index_start, 1);
    assert_eq!(
        duplicates[0].files,
        vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
    );
    assert_eq!(
        hash_to_hex(&duplicates[0].hash),
        blake3::hash(b"hello").to_hex().to_string()
    );
}

#[test]
fn test_indices_are_contiguous_across_groups() {
    let dir = tempdir().unwrap();

    // 5-byte duplicates plus one size-only match
    for name in ["a.txt", "b.txt"] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(b"fives")
            .unwrap();
    }
    File::create(dir.path().join("c.txt"))
        .unwrap()
        .write_all(b"FIVES")
        .unwrap();

    // 3-byte duplicates
    for name in ["x.txt", "y.txt"] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(b"hey")
            .unwrap();
    }

    let walker = Walker::new(dir.path());
    let (mut groups, _stats) = group_by_size(scan(&walker));
    sort_groups(&mut groups, SortOrder::Descending);
    let duplicates = find_duplicates(&groups, &Hasher::new()).unwrap();

    assert_eq!(duplicates.len(), 2);
    assert_eq!(duplicates[0].size, 5);
    assert_eq!(duplicates[0].index_start, 1);
    assert_eq!(duplicates[0].files.len(), 2);
    assert_eq!(duplicates[1].size, 3);
    assert_eq!(duplicates[1].index_start, 3);
    assert_eq!(duplicates[1].files.len(), 2);
}

#[test]
fn test_empty_files_are_grouped_and_confirmed() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("zero1.txt")).unwrap();
    File::create(dir.path().join("zero2.txt")).unwrap();

    let walker = Walker::new(dir.path());
    let (groups, _stats) = group_by_size(scan(&walker));
    let duplicates = find_duplicates(&groups, &Hasher::new()).unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].size, 0);
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].files.len(), 2);
}

#[test]
fn test_nested_directories_feed_one_pool() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("subdir");
    fs::create_dir(&sub).unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();
    File::create(sub.join("b.txt"))
        .unwrap()
        .write_all(b"dup")
        .unwrap();

    let walker = Walker::new(dir.path());
    let (groups, _stats) = group_by_size(scan(&walker));
    let duplicates = find_duplicates(&groups, &Hasher::new()).unwrap();

    assert_eq!(duplicates.len(), 1);
    assert_eq!(
        duplicates[0].files,
        vec![dir.path().join("a.txt"), sub.join("b.txt")]
    );
}

#[test]
fn test_extension_filter_narrows_the_scan() {
    let dir = tempdir().unwrap();

    for name in ["a.txt", "b.txt", "c.log", "d.log"] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(b"same")
            .unwrap();
    }

    let walker = Walker::new(dir.path()).with_extension("txt");
    let (groups, stats) = group_by_size(scan(&walker));
    let duplicates = find_duplicates(&groups, &Hasher::new()).unwrap();

    assert_eq!(stats.total_files, 2);
    assert_eq!(duplicates.len(), 1);
    assert_eq!(
        duplicates[0].files,
        vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
    );
}

#[test]
fn test_sorting_orders_the_size_listing() {
    let dir = tempdir().unwrap();

    for (name, content) in [
        ("a1", b"seven77".as_slice()),
        ("a2", b"seven77".as_slice()),
        ("b1", b"two".as_slice()),
        ("b2", b"two".as_slice()),
        ("c1", b"five5".as_slice()),
        ("c2", b"five5".as_slice()),
    ] {
        File::create(dir.path().join(name))
            .unwrap()
            .write_all(content)
            .unwrap();
    }

    let walker = Walker::new(dir.path());
    let (mut groups, _stats) = group_by_size(scan(&walker));

    sort_groups(&mut groups, SortOrder::Descending);
    let sizes: Vec<u64> = groups.iter().map(|g| g.size).collect();
    assert_eq!(sizes, vec![7, 5, 3]);

    sort_groups(&mut groups, SortOrder::Ascending);
    let sizes: Vec<u64> = groups.iter().map(|g| g.size).collect();
    assert_eq!(sizes, vec![3, 5, 7]);
}
