use slideshow::error::SlideshowError;
use slideshow::fs_utils::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

mod common;
use common::touch_all;

#[test]
fn is_image_matches_allow_list_ignoring_case() {
    assert!(is_image("a.JPG"));
    assert!(is_image("holiday.WebP"));
    assert!(is_image("scan.pgm"));
    assert!(is_image("photo.jpeg"));
    assert!(is_image("camera.jfif"));
}

#[test]
fn is_image_rejects_missing_or_foreign_extensions() {
    assert!(!is_image("a"));
    assert!(!is_image("a."));
    assert!(!is_image("archive.tar.gz"));
    assert!(!is_image("notes.txt"));
    assert!(!is_image("jpg"));
    assert!(!is_image("photo.jpg.bak"));
}

#[test]
fn is_image_path_looks_at_file_name_only() {
    assert!(is_image_path(Path::new("/albums.v2/summer.png")));
    assert!(!is_image_path(Path::new("/albums.png/README")));
}

#[test]
fn collect_images_walks_nested_folders() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    let mut expected = touch_all(
        root,
        &["top.png", "a/mid.JPG", "a/b/deep.tiff", "a/b/c/deeper.webp"],
    );
    touch_all(root, &["doc.txt", "a/README", "a/b/movie.mp4"]);

    let mut collected = collect_images(root).unwrap();
    collected.files.sort();
    expected.sort();
    assert_eq!(collected.files, expected);
    assert_eq!(collected.skipped, 0);
}

#[test]
fn collect_images_ignores_directories_named_like_images() {
    let tmp = tempdir().unwrap();
    fs::create_dir(tmp.path().join("album.jpg")).unwrap();
    touch_all(tmp.path(), &["album.jpg/inside.gif"]);

    let collected = collect_images(tmp.path()).unwrap();
    assert_eq!(collected.files, vec![tmp.path().join("album.jpg/inside.gif")]);
}

#[test]
fn collect_images_reports_unreadable_root() {
    let err = collect_images(Path::new("/does/not/exist")).unwrap_err();
    assert!(matches!(err, SlideshowError::DirectoryUnreadable { .. }));
    assert!(err.to_string().contains("/does/not/exist"));
}

#[cfg(unix)]
#[test]
fn collect_images_skips_symlink_loops() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    touch_all(root, &["sub/photo.png"]);
    std::os::unix::fs::symlink(root, root.join("sub/loop")).unwrap();

    let collected = collect_images(root).unwrap();
    assert_eq!(collected.files, vec![root.join("sub/photo.png")]);
    assert!(collected.skipped >= 1);
}

#[test]
fn folder_label_uses_base_name() {
    assert_eq!(folder_label(Path::new("/home/me/Pictures")), "Folder:  Pictures");
}

#[cfg(unix)]
#[test]
fn collect_images_keeps_non_utf8_names() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempdir().unwrap();
    let odd = tmp.path().join(OsStr::from_bytes(b"caf\xe9.jpg"));
    fs::write(&odd, []).unwrap();
    let plain = touch_all(tmp.path(), &["plain.jpg"]).remove(0);

    assert!(is_image_path(&odd));
    let mut collected = collect_images(tmp.path()).unwrap();
    collected.files.sort();
    let mut expected = vec![odd, plain];
    expected.sort();
    assert_eq!(collected.files, expected);
    assert_eq!(collected.skipped, 0);
}
