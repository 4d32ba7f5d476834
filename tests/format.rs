use std::path::Path;

use imagetool::engine::{allowed_target_formats, icon_formats};
use imagetool::format::{kind_of, normalized_extension};
use imagetool::preset::{builtin, BUILTIN_PRESETS, DEFAULT_PRESET};
use imagetool::ImageKind;

#[test]
fn canonical_extension_is_first() {
    assert_eq!(ImageKind::Jpeg.canonical_extension(), ".jpg");
    assert_eq!(ImageKind::Png.canonical_extension(), ".png");
    assert_eq!(ImageKind::Icns.canonical_extension(), ".icns");
}

#[test]
fn every_extension_maps_back_to_its_kind() {
    for kind in ImageKind::ALL {
        for ext in kind.extensions() {
            assert_eq!(ImageKind::from_extension(ext), Some(kind));
        }
    }
    assert_eq!(ImageKind::from_extension(".gif"), None);
    assert_eq!(ImageKind::from_extension("png"), None);
}

#[test]
fn kind_of_paths() {
    assert_eq!(kind_of(Path::new("/tmp/a/b.WEBP")), Some(ImageKind::Webp));
    assert_eq!(kind_of(Path::new("icon.icns")), Some(ImageKind::Icns));
    assert_eq!(kind_of(Path::new("archive.tar.gz")), None);
    assert_eq!(normalized_extension(Path::new("x.BMP")), ".bmp");
}

#[test]
fn conversion_targets_skip_source_and_icons() {
    assert_eq!(
        allowed_target_formats(ImageKind::Jpeg),
        vec![ImageKind::Png, ImageKind::Webp, ImageKind::Bmp]
    );
    assert_eq!(icon_formats(), vec![ImageKind::Ico, ImageKind::Icns]);
}

#[test]
fn builtin_presets() {
    assert_eq!(BUILTIN_PRESETS.len(), 3);
    assert!(builtin(DEFAULT_PRESET).is_some());

    let apple = builtin("Apple Icon").unwrap();
    assert_eq!(apple.format, ImageKind::Icns);
    assert_eq!(apple.sizes, &[16, 32, 48, 128, 256, 512, 1024]);

    let favicon = builtin("Website Favicon").unwrap();
    assert_eq!(favicon.format, ImageKind::Ico);
    assert_eq!(favicon.to_preset().largest(), Some(64));

    assert!(builtin("Nope").is_none());
}
