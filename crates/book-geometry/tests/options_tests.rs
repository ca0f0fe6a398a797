use book_geometry::*;

#[test]
fn test_settings_default() {
    let settings = EditorSettings::default();
    assert_eq!(settings.format_id, "usTrade");
    assert_eq!(settings.custom_size, None);
    assert_eq!(settings.is_spread, None);
    assert_eq!(settings.page_count, None);
    assert_eq!(settings.binding, Binding::Paperback);
    assert_eq!(settings.pixels_per_inch, 96.0);
    assert!(settings.show_gutter);
    assert!(settings.show_spine);
    assert_eq!(settings.template_name, "Untitled Template");
    assert!(settings.validate().is_ok());
}

#[test]
fn test_validation_custom_size_bounds() {
    let mut settings = EditorSettings::default();

    settings.custom_size = Some(Dimensions::new(5.0, 8.0));
    assert!(settings.validate().is_ok());

    settings.custom_size = Some(Dimensions::new(2.0, 8.0));
    match settings.validate() {
        Err(BookError::InvalidDimension { field, value, .. }) => {
            assert_eq!(field, "width");
            assert_eq!(value, 2.0);
        }
        other => panic!("Expected InvalidDimension, got {:?}", other),
    }

    settings.custom_size = Some(Dimensions::new(5.0, 12.5));
    assert!(matches!(
        settings.validate(),
        Err(BookError::InvalidDimension { field: "height", .. })
    ));

    settings.custom_size = Some(Dimensions::new(0.0, -1.0));
    assert!(settings.validate().is_err());
}

#[test]
fn test_validation_scale() {
    let mut settings = EditorSettings::default();
    settings.pixels_per_inch = 0.0;
    assert!(matches!(settings.validate(), Err(BookError::Config(_))));

    settings.pixels_per_inch = f64::NAN;
    assert!(settings.validate().is_err());
}

#[test]
fn test_validation_no_format() {
    let settings = EditorSettings {
        format_id: String::new(),
        ..Default::default()
    };
    assert!(matches!(settings.validate(), Err(BookError::Config(msg)) if msg.contains("No format")));
}

#[test]
fn test_resolve_switches_to_companion() {
    let catalog = FormatCatalog::standard();
    let settings = EditorSettings {
        format_id: "pocketbook".to_string(),
        is_spread: Some(true),
        page_count: Some(100),
        binding: Binding::Hardcover,
        ..Default::default()
    };

    let format = settings.resolve(&catalog).unwrap();
    assert_eq!(format.id(), "pocketbookSpread");
    assert_eq!(format.spine_width(), Some(0.5));
}

#[test]
fn test_resolve_spread_request_without_companion() {
    let catalog = FormatCatalog::standard();
    let settings = EditorSettings {
        format_id: "a5".to_string(),
        is_spread: Some(true),
        ..Default::default()
    };

    let format = settings.resolve(&catalog).unwrap();
    assert_eq!(format.id(), "a5");
    assert!(!format.is_spread());
}

#[test]
fn test_resolve_spread_id_without_flag() {
    let catalog = FormatCatalog::standard();
    let settings: EditorSettings = serde_json::from_str(
        r#"{"formatId": "digestSpread", "pageCount": 200, "binding": "hardcover"}"#,
    )
    .unwrap();

    let format = settings.resolve(&catalog).unwrap();
    assert_eq!(format.id(), "digestSpread");
    assert!(format.is_spread());
    assert_eq!(format.spine_width(), Some(0.75));
}

#[test]
fn test_resolve_spread_id_with_single_request() {
    let catalog = FormatCatalog::standard();
    let settings = EditorSettings {
        format_id: "digestSpread".to_string(),
        is_spread: Some(false),
        page_count: Some(200),
        ..Default::default()
    };

    let format = settings.resolve(&catalog).unwrap();
    assert_eq!(format.id(), "digest");
    assert_eq!(format.spine_width(), None);
}

#[test]
fn test_resolve_unknown_format() {
    let catalog = FormatCatalog::standard();
    let settings = EditorSettings {
        format_id: "doesNotExist".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        settings.resolve(&catalog),
        Err(BookError::UnknownFormatId(_))
    ));
}

#[test]
fn test_new_template_uses_name() {
    let catalog = FormatCatalog::standard();
    let settings = EditorSettings {
        custom_size: Some(Dimensions::new(7.0, 10.0)),
        template_name: "Photo book".to_string(),
        ..Default::default()
    };

    let template = settings.new_template(&catalog).unwrap();
    assert_eq!(template.name(), "Photo book");
    assert_eq!(template.format().with_bleed(), Dimensions::new(7.25, 10.25));
    assert!(template.elements().is_empty());
}

#[test]
fn test_guide_inputs() {
    let settings = EditorSettings {
        pixels_per_inch: 72.0,
        show_spine: false,
        ..Default::default()
    };
    assert_eq!(settings.scale(), DeviceScale(72.0));
    assert!(settings.guide_options().show_gutter);
    assert!(!settings.guide_options().show_spine);
}

#[test]
fn test_partial_settings_file_uses_defaults() {
    let settings: EditorSettings =
        serde_json::from_str(r#"{"formatId": "royal", "pageCount": 240}"#).unwrap();
    assert_eq!(settings.format_id, "royal");
    assert_eq!(settings.page_count, Some(240));
    assert_eq!(settings.pixels_per_inch, 96.0);
}

#[tokio::test]
async fn test_save_and_load_settings() {
    use tempfile::NamedTempFile;

    let settings = EditorSettings {
        format_id: "digest".to_string(),
        is_spread: Some(true),
        page_count: Some(320),
        binding: Binding::Hardcover,
        pixels_per_inch: 150.0,
        show_gutter: false,
        ..Default::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    settings.save(path).await.unwrap();
    let loaded = EditorSettings::load(path).await.unwrap();

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_load_invalid_settings() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), b"not json").await.unwrap();

    match EditorSettings::load(temp_file.path()).await {
        Err(BookError::Config(msg)) => assert!(msg.contains("Failed to parse settings")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
