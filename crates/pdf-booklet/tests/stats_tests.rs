use pdf_booklet::*;

#[test]
fn test_stats_documented_range() {
    let spec: SignatureSpec = "20-60".parse().unwrap();
    let plan = plan(61, &spec, false).unwrap();
    let stats = calculate_statistics(&plan);

    assert_eq!(stats.source_pages, 61);
    assert_eq!(stats.signature, 32);
    // 64 slots / 32 per signature
    assert_eq!(stats.signatures, 2);
    // 64 / 4 pages per sheet
    assert_eq!(stats.output_sheets, 16);
    // 2 sides per sheet
    assert_eq!(stats.output_sides, 32);
    assert_eq!(stats.blank_pages_added, 3);
    assert!(!stats.cover_applied);
}

#[test]
fn test_stats_exact_signature_padding() {
    let plan = plan(18, &SignatureSpec::Exact(16), true).unwrap();
    let stats = calculate_statistics(&plan);

    // The resolver leaves padding to the builder; the stats see all of it
    assert_eq!(plan.resolution.blank_padding, 0);
    assert_eq!(stats.blank_pages_added, 14);
    assert_eq!(stats.signatures, 2);
    assert_eq!(stats.output_sheets, 8);
    assert!(stats.cover_applied);
}

#[test]
fn test_stats_cover_without_blanks() {
    let plan = plan(16, &SignatureSpec::Exact(8), true).unwrap();
    let stats = calculate_statistics(&plan);

    assert_eq!(stats.blank_pages_added, 0);
    assert!(!stats.cover_applied);
}

#[test]
fn test_stats_whole_document() {
    let plan = plan(3, &SignatureSpec::Whole, false).unwrap();
    let stats = calculate_statistics(&plan);

    assert_eq!(stats.signature, 4);
    assert_eq!(stats.signatures, 1);
    assert_eq!(stats.output_sheets, 1);
    assert_eq!(stats.output_sides, 2);
    assert_eq!(stats.blank_pages_added, 1);
}
