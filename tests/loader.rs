use slideshow::app::loader::{Loader, CACHE_CAPACITY};
use std::path::Path;
use std::{fs, thread, time::Duration};
use tempfile::tempdir;

mod common;
use common::{solid_image, write_image};

fn wait_for(loader: &mut Loader, path: &Path) -> bool {
    for _ in 0..200 {
        loader.update();
        if loader.get(path).is_some() {
            return true;
        }
        thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn loader_decodes_requested_images() {
    let tmp = tempdir().unwrap();
    let img_path = tmp.path().join("sample.png");
    write_image(&img_path, &solid_image(4, 4, [10, 20, 30, 255]));

    let mut loader = Loader::new();
    loader.request(&img_path);
    assert!(wait_for(&mut loader, &img_path));
    let decoded = loader.get(&img_path).unwrap();
    assert_eq!(decoded.color_image.as_ref().unwrap().size, [4, 4]);
    assert!(!loader.is_pending(&img_path));
}

#[test]
fn undecodable_files_arrive_blank() {
    let tmp = tempdir().unwrap();
    let broken = tmp.path().join("broken.jpg");
    fs::write(&broken, b"garbage").unwrap();

    let mut loader = Loader::new();
    loader.request(&broken);
    assert!(wait_for(&mut loader, &broken));
    assert!(loader.get(&broken).unwrap().is_blank());
}

#[test]
fn cache_keeps_only_recent_images() {
    let tmp = tempdir().unwrap();
    let mut loader = Loader::new();
    let paths: Vec<_> = (0..CACHE_CAPACITY + 2)
        .map(|idx| {
            let path = tmp.path().join(format!("{idx}.png"));
            write_image(&path, &solid_image(1, 1, [idx as u8, 0, 0, 255]));
            path
        })
        .collect();

    for path in &paths {
        loader.request(path);
        assert!(wait_for(&mut loader, path));
    }
    assert_eq!(loader.cached_len(), CACHE_CAPACITY);
    assert!(loader.get(&paths[0]).is_none());
    assert!(loader.get(&paths[1]).is_none());
    assert!(loader.get(paths.last().unwrap()).is_some());
}
