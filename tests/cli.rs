use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn libris(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env("LIBRIS_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_book_add_and_list_persist_across_runs() {
    let data_dir = TempDir::new().unwrap();

    libris(&data_dir)
        .args(["book", "add", "Dune", "Frank Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Dune' by Frank Herbert"));

    libris(&data_dir)
        .args(["book", "add", "Emma", "Jane Austen"])
        .assert()
        .success();

    libris(&data_dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune").and(predicate::str::contains("Emma")))
        .stdout(predicate::str::contains("Total: 2 books"));

    assert!(data_dir.path().join("data").join("catalog.json").exists());
}

#[test]
fn test_remove_missing_book_fails() {
    let data_dir = TempDir::new().unwrap();

    libris(&data_dir)
        .args(["book", "remove", "Dune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found: Dune"));
}

#[test]
fn test_menu_session() {
    let data_dir = TempDir::new().unwrap();

    libris(&data_dir)
        .write_stdin("1\nDune\nHerbert\n3\nAlice\nDune\n4\nBob\nDune\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book borrowed successfully!"))
        .stdout(predicate::str::contains("! Loan not found"))
        .stdout(predicate::str::contains("Alice borrowed -> Dune by Herbert"))
        .stdout(predicate::str::contains("Goodbye!"));

    // Loans are not persisted, and the borrowed copy left the saved shelf
    libris(&data_dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books available in the library."));
}

#[test]
fn test_corrupt_catalog_starts_empty() {
    let data_dir = TempDir::new().unwrap();
    let catalog = data_dir.path().join("data").join("catalog.json");
    std::fs::create_dir_all(catalog.parent().unwrap()).unwrap();
    std::fs::write(&catalog, "definitely not a catalog").unwrap();

    libris(&data_dir)
        .args(["book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books available in the library."));
}

#[test]
fn test_history_lists_mutations() {
    let data_dir = TempDir::new().unwrap();

    libris(&data_dir)
        .args(["book", "add", "Dune", "Herbert"])
        .assert()
        .success();
    libris(&data_dir)
        .args(["book", "remove", "dune"])
        .assert()
        .success();

    libris(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("ADD").and(predicate::str::contains("REMOVE")));
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    libris(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog.json"))
        .stdout(predicate::str::contains("Audit enabled: true"));
}
