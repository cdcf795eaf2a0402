#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use photo_optimizer_lib::core::{RecordingNotifier, ResizeToolConfig};
use photo_optimizer_lib::{AppConfig, optimize_cleanup, optimize_images};

/// A sips-compatible stub: `-Z <max> <input> --out <output>` copies the input.
fn install_stub(dir: &Path) -> String {
    let path = dir.join("fake-sips");
    std::fs::write(&path, "#!/bin/sh\ncp \"$3\" \"$5\"\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

// One test drives both binaries' operations so the stub is never executed
// while another test thread is writing an executable.
#[tokio::test]
async fn images_then_cleanup_against_stub_tool() {
    let bin = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    let config = AppConfig {
        photos_root: root.path().to_path_buf(),
        accessories: vec!["Mochila.png".into(), "bolsas.png".into()],
        tool: ResizeToolConfig {
            program: install_stub(bin.path()),
            max_dimension: 800,
        },
    };
    let playeras = root.path().join("playeras");
    std::fs::create_dir(&playeras).unwrap();
    std::fs::write(playeras.join("shirt1.jpg"), b"shirt").unwrap();
    std::fs::write(playeras.join("shirt1.txt"), b"notes").unwrap();
    std::fs::write(root.path().join("Mochila.png"), b"bag").unwrap();

    let notifier = RecordingNotifier::new();
    let report = optimize_images(&config, &notifier).await.unwrap();
    assert_eq!(report.optimized(), 1);
    assert!(playeras.join("optimized/shirt1.jpg").is_file());

    let (resized, purged) = optimize_cleanup(&config, &notifier).await;
    let resized = resized.unwrap();
    let purged = purged.unwrap();

    assert_eq!(resized.optimized(), 1);
    assert_eq!(resized.missing(), 1);
    assert_eq!(purged.deleted(), 1);
    assert!(root.path().join("optimized/Mochila.png").is_file());
    assert!(!playeras.join("shirt1.jpg").exists());
    assert!(playeras.join("shirt1.txt").exists());
    assert!(playeras.join("optimized/shirt1.jpg").is_file());

    assert_eq!(
        notifier.lines(),
        vec![
            "Optimized: shirt1.jpg".to_string(),
            "Optimized: Mochila.png".to_string(),
            format!("File not found: {}", root.path().join("bolsas.png").display()),
            "Deleted original: shirt1.jpg".to_string(),
        ]
    );
}
