use chrono::Utc;
use goto::core::AliasStore;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_legacy_file_is_migrated_once() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("aliases");
    let legacy = "dev /home/user/dev\nblog /var/www/html/blog\n";
    fs::write(&base, legacy).unwrap();

    let before = Utc::now();
    let store = AliasStore::open(&base).unwrap();
    let after = Utc::now();

    assert_eq!(store.names(), vec!["dev", "blog"]);
    for alias in store.aliases() {
        assert_eq!(alias.use_count, 0);
        assert!(alias.tags.is_empty());
        assert!(alias.last_used.is_none());
        assert!(alias.created >= before && alias.created <= after);
    }
    assert_eq!(store.get("blog").unwrap().path, "/var/www/html/blog");

    // Modern file written, legacy moved aside
    assert!(temp_dir.path().join("aliases.toml").exists());
    assert!(!base.exists());
    let backup = temp_dir.path().join("aliases.txt.bak");
    assert_eq!(fs::read_to_string(backup).unwrap(), legacy);

    // Second open reads the modern file
    let reopened = AliasStore::open(&base).unwrap();
    assert_eq!(reopened.aliases(), store.aliases());
}

#[test]
fn test_legacy_comments_blanks_and_spaces() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("aliases");
    fs::write(
        &base,
        "# my aliases\n\n   \ndocs /home/user/My Documents\n  work /srv/work  \n",
    )
    .unwrap();

    let store = AliasStore::open(&base).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("docs").unwrap().path, "/home/user/My Documents");
    assert_eq!(store.get("work").unwrap().path, "/srv/work");
}

#[test]
fn test_modern_file_wins_over_legacy() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("aliases");
    fs::write(&base, "legacy /old\n").unwrap();
    fs::write(
        temp_dir.path().join("aliases.toml"),
        "[[aliases]]\nname = \"modern\"\npath = \"/new\"\ncreated = \"2024-01-01T00:00:00Z\"\nuse_count = 2\n",
    )
    .unwrap();

    let store = AliasStore::open(&base).unwrap();

    assert_eq!(store.names(), vec!["modern"]);
    assert_eq!(store.get("modern").unwrap().use_count, 2);
    // Legacy file untouched
    assert!(base.exists());
}

#[test]
fn test_missing_fields_take_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("aliases.toml"),
        "[[aliases]]\nname = \"dev\"\npath = \"/dev\"\ncreated = \"2024-01-01T00:00:00Z\"\n",
    )
    .unwrap();

    let store = AliasStore::open(temp_dir.path().join("aliases")).unwrap();
    let alias = store.get("dev").unwrap();

    assert_eq!(alias.use_count, 0);
    assert!(alias.tags.is_empty());
    assert!(alias.last_used.is_none());
}

#[test]
fn test_empty_modern_file_is_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("aliases.toml"), "").unwrap();

    let store = AliasStore::open(temp_dir.path().join("aliases")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_native_toml_datetimes_are_read() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("aliases.toml"),
        "[[aliases]]\nname = \"dev\"\npath = \"/tmp\"\ncreated = 2024-01-01T00:00:00Z\nlast_used = 2024-02-01T09:30:00Z\nuse_count = 3\n\n\
         [[aliases]]\nname = \"docs\"\npath = \"/tmp\"\ncreated = 2024-01-01T00:00:00Z\nlast_used = 0001-01-01T00:00:00Z\nuse_count = 0\n",
    )
    .unwrap();

    let store = AliasStore::open(temp_dir.path().join("aliases")).unwrap();

    let dev = store.get("dev").unwrap();
    assert_eq!(dev.created.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert_eq!(dev.last_used.unwrap().to_rfc3339(), "2024-02-01T09:30:00+00:00");
    assert_eq!(dev.use_count, 3);

    assert!(store.get("docs").unwrap().last_used.is_none());
}
