use imagetool::config::Config;
use imagetool::ImageKind;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("imagetool.toml")).unwrap();

    assert!(config.output.dir.is_none());
    assert!(!config.output.overwrite);
    assert_eq!(config.icons.preset, "Program Icon");
    assert!(config.icons.presets.is_empty());
    assert_eq!(config.presets().len(), 3);
}

#[test]
fn parse_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(
        &path,
        r#"
[output]
dir = "converted"
overwrite = true

[icons]
preset = "Tray Icon"

[icons.presets."Tray Icon"]
sizes = [16, 24, 32]

[icons.presets.Retina]
sizes = [1024, 512]
format = "icns"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.output.dir, Some(dir.path().join("converted")));
    assert!(config.output.overwrite);
    assert_eq!(config.icons.preset, "Tray Icon");

    let tray = config.preset("Tray Icon").unwrap();
    assert_eq!(tray.sizes, vec![16, 24, 32]);
    assert_eq!(tray.format, ImageKind::Ico);

    let retina = config.preset("Retina").unwrap();
    assert_eq!(retina.format, ImageKind::Icns);
    assert_eq!(retina.largest(), Some(1024));

    // Built-ins come first, then custom presets in name order.
    let names: Vec<String> = config.presets().into_iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            "Apple Icon",
            "Program Icon",
            "Website Favicon",
            "Retina",
            "Tray Icon"
        ]
    );
}

#[test]
fn absolute_output_dir_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(
        &path,
        format!("[output]\ndir = {:?}\n", out.path().to_str().unwrap()),
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.output.dir.as_deref(), Some(out.path()));
}

#[test]
fn unknown_default_preset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(&path, "[icons]\npreset = \"Poster\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Poster"));
}

#[test]
fn preset_without_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(&path, "[icons.presets.Empty]\nsizes = []\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn preset_with_zero_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(&path, "[icons.presets.Bad]\nsizes = [0, 16]\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn preset_with_bitmap_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(&path, "[icons.presets.Bad]\nsizes = [16]\nformat = \"png\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("ico or icns"));
}

#[test]
fn preset_shadowing_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(
        &path,
        "[icons.presets.\"Program Icon\"]\nsizes = [16]\n",
    )
    .unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(&path, "[output\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn template_parses_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(&path, Config::default_template()).unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.output.dir.is_none());
    assert_eq!(config.icons.preset, "Program Icon");
}

#[test]
fn save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imagetool.toml");
    std::fs::write(
        &path,
        "[output]\noverwrite = true\n\n[icons.presets.Small]\nsizes = [16, 32]\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let saved = dir.path().join("saved.toml");
    config.save(&saved).unwrap();

    let reloaded = Config::load(&saved).unwrap();
    assert!(reloaded.output.overwrite);
    assert_eq!(reloaded.preset("Small").unwrap().sizes, vec![16, 32]);

    let parsed: toml::Value = toml::from_str(&std::fs::read_to_string(&saved).unwrap()).unwrap();
    assert!(parsed.get("icons").is_some());
}
