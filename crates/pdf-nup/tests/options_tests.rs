use pdf_nup::*;

#[test]
fn test_default_options() {
    let options = NupOptions::default();
    assert_eq!(options.pages_per_sheet, 4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.paper_size, PaperSize::Letter);
    assert_eq!(options.cell_margin_pt, 10.0);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_pages_per_sheet() {
    let mut options = NupOptions {
        pages_per_sheet: 0,
        ..Default::default()
    };
    match options.validate() {
        Err(NupError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("at least 1"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }

    for n in [1, 2, 3, 7, 16, 100] {
        options.pages_per_sheet = n;
        assert!(options.validate().is_ok(), "{n} pages per sheet");
    }
}

#[test]
fn test_validation_custom_paper() {
    let mut options = NupOptions::default();

    options.paper_size = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 150.0,
    };
    assert!(options.validate().is_ok());

    options.paper_size = PaperSize::Custom {
        width_mm: 0.0,
        height_mm: 150.0,
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::Custom {
        width_mm: f32::NAN,
        height_mm: 150.0,
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_margin() {
    let options = NupOptions {
        cell_margin_pt: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        options.validate(),
        Err(NupError::InvalidConfiguration(_))
    ));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_load_file() {
    use tempfile::NamedTempFile;

    let options = NupOptions {
        pages_per_sheet: 9,
        orientation: Orientation::Landscape,
        paper_size: PaperSize::A4,
        ..Default::default()
    };

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).await.unwrap();

    let loaded = NupOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{ "pages_per_sheet": 2 }"#).unwrap();

    let loaded = NupOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.pages_per_sheet, 2);
    assert_eq!(loaded.orientation, Orientation::Portrait);
    assert_eq!(loaded.paper_size, PaperSize::Letter);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_invalid_config_file() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "not json").unwrap();

    let result = NupOptions::load(temp.path()).await;
    match result {
        Err(NupError::InvalidConfiguration(msg)) => assert!(msg.contains("Failed to parse")),
        _ => panic!("Expected InvalidConfiguration error"),
    }
}
