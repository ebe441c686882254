use goto::core::{AliasRecord, AliasStore, SortOrder};
use goto::GotoError;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, AliasStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = AliasStore::open(temp_dir.path().join("aliases")).unwrap();
    (temp_dir, store)
}

fn make_dir(temp_dir: &TempDir, name: &str) -> String {
    let dir = temp_dir.path().join(name);
    fs::create_dir_all(&dir).unwrap();
    dir.to_string_lossy().to_string()
}

#[test]
fn test_register_then_get() {
    let (temp_dir, mut store) = setup();
    let dev = make_dir(&temp_dir, "dev");

    store.add(AliasRecord::new("dev", &dev)).unwrap();

    let alias = store.get("dev").unwrap();
    assert_eq!(alias.path, dev);
    assert_eq!(alias.use_count, 0);
    assert!(alias.last_used.is_none());
}

#[test]
fn test_record_usage_counts_every_call() {
    let (_temp_dir, mut store) = setup();
    store.add(AliasRecord::new("dev", "/home/user/dev")).unwrap();

    let mut previous = None;
    for _ in 0..5 {
        store.record_usage("dev").unwrap();
        let last_used = store.get("dev").unwrap().last_used;
        assert!(last_used.is_some());
        assert!(last_used >= previous);
        previous = last_used;
    }

    assert_eq!(store.get("dev").unwrap().use_count, 5);
}

#[test]
fn test_missing_alias_errors() {
    let (_temp_dir, mut store) = setup();

    assert!(matches!(store.get("nope"), Err(GotoError::AliasNotFound(_))));
    assert!(matches!(store.remove("nope"), Err(GotoError::AliasNotFound(_))));
    assert!(matches!(
        store.record_usage("nope"),
        Err(GotoError::AliasNotFound(_))
    ));
}

#[test]
fn test_changes_survive_reopen() {
    let (temp_dir, mut store) = setup();
    let dev = make_dir(&temp_dir, "dev");

    store
        .add_with_tags(AliasRecord::new("dev", &dev), &["work"])
        .unwrap();
    store.add(AliasRecord::new("blog", "/var/www/blog")).unwrap();
    store.record_usage("dev").unwrap();
    store.remove("blog").unwrap();

    let reopened = AliasStore::open(temp_dir.path().join("aliases")).unwrap();
    assert_eq!(reopened.names(), vec!["dev"]);
    assert_eq!(reopened.get("dev").unwrap(), store.get("dev").unwrap());
}

#[test]
fn test_store_file_uses_documented_field_names() {
    let (temp_dir, mut store) = setup();
    store
        .add_with_tags(AliasRecord::new("dev", "/home/user/dev"), &["work"])
        .unwrap();

    let content = fs::read_to_string(temp_dir.path().join("aliases.toml")).unwrap();
    assert!(content.contains("[[aliases]]"));
    assert!(content.contains("name = \"dev\""));
    assert!(content.contains("path = \"/home/user/dev\""));
    assert!(content.contains("tags = [\"work\"]"));
    assert!(content.contains("created = "));
    assert!(content.contains("use_count = 0"));
    assert!(!content.contains("last_used"));

    // No temporary file left behind
    assert!(!temp_dir.path().join("aliases.toml.tmp").exists());
}

#[test]
fn test_rename_keeps_metadata() {
    let (_temp_dir, mut store) = setup();
    store
        .add_with_tags(AliasRecord::new("dev", "/home/user/dev"), &["work"])
        .unwrap();
    store.record_usage("dev").unwrap();
    let before = store.get("dev").unwrap().clone();

    store.rename("dev", "code").unwrap();

    assert!(!store.contains("dev"));
    let after = store.get("code").unwrap();
    assert_eq!(after.path, before.path);
    assert_eq!(after.tags, before.tags);
    assert_eq!(after.created, before.created);
    assert_eq!(after.last_used, before.last_used);
    assert_eq!(after.use_count, 1);
}

#[test]
fn test_rename_collision_checked_before_existence() {
    let (_temp_dir, mut store) = setup();
    store.add(AliasRecord::new("blog", "/var/www/blog")).unwrap();

    let result = store.rename("ghost", "blog");
    assert!(matches!(result, Err(GotoError::AliasAlreadyExists(ref n)) if n == "blog"));

    let result = store.rename("ghost", "fresh");
    assert!(matches!(result, Err(GotoError::AliasNotFound(ref n)) if n == "ghost"));

    let result = store.rename("blog", "bad name");
    assert!(matches!(result, Err(GotoError::InvalidIdentifier(_))));
}

#[test]
fn test_tags_are_normalized_and_persisted() {
    let (temp_dir, mut store) = setup();
    store.add(AliasRecord::new("dev", "/home/user/dev")).unwrap();

    store.add_tag("dev", "  Work ").unwrap();
    store.add_tag("dev", "WORK").unwrap();
    store.add_tag("dev", "rust").unwrap();
    assert!(matches!(
        store.add_tag("dev", "two words"),
        Err(GotoError::InvalidIdentifier(_))
    ));

    let reopened = AliasStore::open(temp_dir.path().join("aliases")).unwrap();
    assert_eq!(reopened.get("dev").unwrap().tags, vec!["work", "rust"]);

    store.set_tags("dev", &["Personal", "personal"]).unwrap();
    assert_eq!(store.get("dev").unwrap().tags, vec!["personal"]);

    store.remove_tag("dev", "PERSONAL").unwrap();
    assert!(store.get("dev").unwrap().tags.is_empty());
}

#[test]
fn test_navigate_checks_directory() {
    let (temp_dir, mut store) = setup();
    let dev = make_dir(&temp_dir, "dev");
    store.add(AliasRecord::new("dev", &dev)).unwrap();
    store.add(AliasRecord::new("gone", "/definitely/not/here/goto")).unwrap();

    assert_eq!(store.navigate("dev").unwrap(), dev);
    assert_eq!(store.get("dev").unwrap().use_count, 1);

    assert!(matches!(
        store.navigate("gone"),
        Err(GotoError::DirectoryNotFound(_))
    ));
    assert_eq!(store.get("gone").unwrap().use_count, 0);
}

#[test]
fn test_cleanup_removes_only_stale() {
    let (temp_dir, mut store) = setup();
    let keep = make_dir(&temp_dir, "keep");
    let doomed = make_dir(&temp_dir, "doomed");
    store.add(AliasRecord::new("keep", &keep)).unwrap();
    store.add(AliasRecord::new("doomed", &doomed)).unwrap();

    fs::remove_dir(&doomed).unwrap();
    assert_eq!(store.stale().len(), 1);

    let removed = store.cleanup().unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name, "doomed");
    assert_eq!(store.names(), vec!["keep"]);
}

#[test]
fn test_clear_history_keeps_counts() {
    let (_temp_dir, mut store) = setup();
    store.add(AliasRecord::new("dev", "/home/user/dev")).unwrap();
    store.record_usage("dev").unwrap();

    store.clear_history().unwrap();

    let alias = store.get("dev").unwrap();
    assert!(alias.last_used.is_none());
    assert_eq!(alias.use_count, 1);
    assert!(store.recent(10).is_empty());
}

#[test]
fn test_find_similar_over_names() {
    let (_temp_dir, mut store) = setup();
    for name in ["dev", "projects", "docs"] {
        store.add(AliasRecord::new(name, "/tmp")).unwrap();
    }

    let matches = store.find_similar("dve", 0.3);
    assert_eq!(matches[0].value, "dev");

    let matches = store.find_similar("proj", 0.7);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, "projects");
}

#[test]
fn test_sorted_by_usage_breaks_ties_by_name() {
    let (_temp_dir, mut store) = setup();
    for name in ["zeta", "alpha", "mid"] {
        store.add(AliasRecord::new(name, "/tmp")).unwrap();
    }
    store.record_usage("mid").unwrap();

    let names: Vec<&str> = store
        .sorted(SortOrder::Usage)
        .into_iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["mid", "alpha", "zeta"]);
}
