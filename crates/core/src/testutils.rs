use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Empty scratch directory removed on drop.
pub fn create_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Directory with two files and one subdirectory:
/// `notes.txt`, `todo.md`, `archive/old.txt`.
pub fn create_test_tree() -> TempDir {
    let dir = create_test_dir();

    write_file(dir.path(), "notes.txt", "quarterly numbers\n");
    write_file(dir.path(), "todo.md", "- call the bank\n");

    fs::create_dir(dir.path().join("archive")).unwrap();
    write_file(dir.path().join("archive"), "old.txt", "stale");

    dir
}

fn write_file(dir: impl AsRef<Path>, name: &str, content: &str) {
    fs::write(dir.as_ref().join(name), content).unwrap();
}
