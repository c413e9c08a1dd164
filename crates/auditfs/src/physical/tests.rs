// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the physical backend against real temp directories.

use super::PhysicalFileSystem;
use crate::error::Error;
use crate::sandbox::Sandbox;
use futures::TryStreamExt;
use tempfile::TempDir;

/// Create a temp directory with some test content
fn create_test_tree() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");

    std::fs::write(dir.path().join("hello.txt"), b"Hello, World!").unwrap();
    std::fs::create_dir(dir.path().join("subdir")).unwrap();
    std::fs::write(dir.path().join("subdir/nested.txt"), b"nested content").unwrap();
    std::fs::write(dir.path().join(".hidden"), b"secret").unwrap();

    dir
}

#[tokio::test]
async fn test_rejects_relative_root() {
    let result = PhysicalFileSystem::for_directory("relative/dir");
    assert!(matches!(result, Err(Error::InvalidRoot(_))));
}

#[tokio::test]
async fn test_existing_content_visible() {
    let dir = create_test_tree();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();

    assert!(root.exists().await.unwrap());
    assert!(root.get_file("hello.txt").unwrap().exists().await.unwrap());
    assert!(root.get_directory("subdir").unwrap().exists().await.unwrap());
    assert!(!root.get_file("subdir").unwrap().exists().await.unwrap());
    assert_eq!(
        root.get_directory("subdir")
            .unwrap()
            .get_file("nested.txt")
            .unwrap()
            .read_to_end()
            .await
            .unwrap(),
        b"nested content"
    );
}

#[tokio::test]
async fn test_listing_skips_hidden_and_splits_kinds() {
    let dir = create_test_tree();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();

    let files: Vec<_> = root.enumerate_files().await.unwrap().try_collect().await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["hello.txt"]);

    let dirs: Vec<_> = root
        .enumerate_directories()
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(dirs.len(), 1);
    assert_eq!(dirs[0].name(), "subdir");
}

#[cfg(unix)]
#[tokio::test]
async fn test_listing_skips_invalid_names() {
    let dir = create_test_tree();
    std::fs::write(dir.path().join("   "), b"blank").unwrap();
    std::fs::create_dir(dir.path().join(" ")).unwrap();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();

    let files: Vec<_> = root.enumerate_files().await.unwrap().try_collect().await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["hello.txt"]);

    let dirs: Vec<_> = root
        .enumerate_directories()
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    let names: Vec<&str> = dirs.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["subdir"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_listing_follows_symlinks() {
    let dir = create_test_tree();
    std::os::unix::fs::symlink(dir.path().join("hello.txt"), dir.path().join("link.txt")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("subdir"), dir.path().join("linkdir")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();

    let files: Vec<_> = root.enumerate_files().await.unwrap().try_collect().await.unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["hello.txt", "link.txt"]);
    assert!(files[1].exists().await.unwrap());

    let dirs: Vec<_> = root
        .enumerate_directories()
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    let names: Vec<&str> = dirs.iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["linkdir", "subdir"]);
}

#[tokio::test]
async fn test_missing_directory_lists_empty() {
    let dir = create_test_tree();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();
    let missing = root.get_directory("no/such/place").unwrap();

    assert!(!missing.exists().await.unwrap());
    let files: Vec<_> = missing.enumerate_files().await.unwrap().try_collect().await.unwrap();
    assert!(files.is_empty());

    // A file is not a directory either
    let file_as_dir = root.get_directory("hello.txt").unwrap();
    let files: Vec<_> = file_as_dir.enumerate_files().await.unwrap().try_collect().await.unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn test_write_creates_parents_and_truncates() {
    let dir = create_test_tree();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();
    let file = root.get_directory("x/y").unwrap().get_file("z.txt").unwrap();

    let writable = file.request_write_access().await.unwrap().unwrap();
    writable.write_all(b"first version").await.unwrap();
    writable.write_all(b"second").await.unwrap();

    assert_eq!(std::fs::read(dir.path().join("x/y/z.txt")).unwrap(), b"second");
}

#[tokio::test]
async fn test_write_denied() {
    let dir = create_test_tree();
    let root = PhysicalFileSystem::for_directory(dir.path()).unwrap();

    let over_dir = root.get_file("subdir").unwrap();
    assert!(over_dir.request_write_access().await.unwrap().is_none());

    let under_file = root.get_directory("hello.txt/more").unwrap().get_file("f").unwrap();
    assert!(under_file.request_write_access().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sandbox_removed_on_drop() {
    let path = {
        let sandbox = Sandbox::create().unwrap();
        let file = sandbox.directory().get_file("a.txt").unwrap();
        file.request_write_access()
            .await
            .unwrap()
            .unwrap()
            .write_all(b"a")
            .await
            .unwrap();
        assert!(sandbox.path().join("a.txt").exists());
        sandbox.path().to_path_buf()
    };
    assert!(!path.exists());
}

#[tokio::test]
async fn test_sandbox_removed_on_panic() {
    let (tx, rx) = std::sync::mpsc::channel();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let sandbox = Sandbox::create().unwrap();
        std::fs::write(sandbox.path().join("partial"), b"...").unwrap();
        tx.send(sandbox.path().to_path_buf()).unwrap();
        panic!("scope failed");
    }));
    assert!(result.is_err());
    let path = rx.recv().unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn test_sandbox_close() {
    let sandbox = Sandbox::create().unwrap();
    let path = sandbox.path().to_path_buf();
    sandbox.close().unwrap();
    assert!(!path.exists());
}
