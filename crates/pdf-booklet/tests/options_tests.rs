use pdf_booklet::*;
use std::path::PathBuf;

#[test]
fn test_validation_no_page_source() {
    let options = BookletOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(ImposeError::Config(msg)) => {
            assert!(msg.contains("No input file"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_zero_pages() {
    let options = BookletOptions {
        page_count: Some(0),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(ImposeError::NoPages)));
}

#[test]
fn test_validation_signatures() {
    let mut options = BookletOptions {
        input_file: Some(PathBuf::from("book.pdf")),
        ..Default::default()
    };

    // Valid: whole document
    assert!(options.validate().is_ok());

    // Valid: multiples of 4
    options.signature = SignatureSpec::Exact(16);
    assert!(options.validate().is_ok());

    // Invalid: not multiple of 4
    options.signature = SignatureSpec::Exact(6);
    assert!(matches!(
        options.validate(),
        Err(ImposeError::InvalidSignature(6))
    ));

    // Invalid: zero
    options.signature = SignatureSpec::Exact(0);
    assert!(options.validate().is_err());

    // Invalid: collapses to an empty range after rounding
    options.signature = SignatureSpec::Range {
        min: Some(17),
        max: Some(20),
    };
    assert!(matches!(
        options.validate(),
        Err(ImposeError::InvalidRange { min: 20, max: 20 })
    ));

    // Valid: open-ended max is checked at resolve time
    options.signature = SignatureSpec::Range {
        min: Some(40),
        max: None,
    };
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        input_file: Some(PathBuf::from("input.pdf")),
        page_count: Some(61),
        signature: "20-60".parse().unwrap(),
        cover: true,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    options.save(path).await.unwrap();

    // Load
    let loaded = BookletOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();
    tokio::fs::write(path, br#"{ "page_count": 18, "signature": 16 }"#)
        .await
        .unwrap();

    let loaded = BookletOptions::load(path).await.unwrap();
    assert_eq!(loaded.page_count, Some(18));
    assert_eq!(loaded.signature, SignatureSpec::Exact(16));
    assert!(!loaded.cover);
    assert!(loaded.input_file.is_none());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_bad_signature() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();
    tokio::fs::write(path, br#"{ "page_count": 18, "signature": "7" }"#)
        .await
        .unwrap();

    match BookletOptions::load(path).await {
        Err(ImposeError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}
