use fasta_validator::{
    validate, validate_path, validate_with, FastaError, FastaInput, OverlongLines,
    ValidationStatus, ValidatorBuilder, ValidatorConfig,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::NamedTempFile;

fn plain_file(data: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::with_suffix(".fasta").unwrap();
    temp_file.write_all(data).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

fn gzip_file(data: &[u8]) -> NamedTempFile {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut temp_file = NamedTempFile::with_suffix(".fasta.gz").unwrap();
    temp_file.write_all(&compressed).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

const SCENARIOS: &[(&[u8], u8)] = &[
    (b">seq1\nACGT\n", 0),
    (b"ACGT\n>seq1\nACGT\n", 1),
    (b">seq1\nACGT\n>seq1\nACGT\n", 2),
    (b">seq1\nACG1\n", 4),
    (b">seq1\n>seq2\nACGT\n", 8),
    (b">seq1 description here\nACGT\n>seq1 other text\nACGT\n", 2),
    (b">seq1\nACGT\n>seq2\n", 8),
    (b">seq1\nAC-GT\n", 4),
    (b">seq1\nAC GT\n", 4),
    (b">seq1\nACGT\r\n>seq2\r\nTTTT\r\n", 0),
    (b"", 8),
];

#[test]
fn test_plain_scenarios() {
    for (data, expected) in SCENARIOS {
        let file = plain_file(data);
        let status = validate(file.path(), false);
        assert_eq!(
            status.code(),
            *expected,
            "input {:?}",
            String::from_utf8_lossy(data)
        );
    }
}

#[test]
fn test_gzip_matches_plain() {
    for (data, expected) in SCENARIOS {
        let plain = plain_file(data);
        let gz = gzip_file(data);
        let plain_status = validate(plain.path(), false);
        let gz_status = validate(gz.path(), false);
        assert_eq!(plain_status, gz_status);
        assert_eq!(gz_status.code(), *expected);
    }
}

#[test]
fn test_gzip_summary() {
    let gz = gzip_file(b">a\nACGT\nAC\n>b\nTT\n");
    let summary = validate_path(gz.path(), &ValidatorConfig::default()).unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.residues, 8);
}

#[test]
fn test_multi_member_gzip() {
    let mut compressed = Vec::new();
    for part in [&b">a\nACGT\n"[..], &b">b\nTTTT\n"[..]] {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(part).unwrap();
        compressed.extend(encoder.finish().unwrap());
    }
    let mut temp_file = NamedTempFile::with_suffix(".gz").unwrap();
    temp_file.write_all(&compressed).unwrap();

    let summary = validate_path(temp_file.path(), &ValidatorConfig::default()).unwrap();
    assert_eq!(summary.records, 2);
}

#[test]
fn test_suffix_decides_format() {
    // Compressed bytes without the suffix are read as text.
    let gz = gzip_file(b">seq1\nACGT\n");
    let bytes = std::fs::read(gz.path()).unwrap();
    let disguised = plain_file(&bytes);
    assert_eq!(validate(disguised.path(), false), ValidationStatus::MissingHeader);

    // Plain text with the suffix is not sniffed either.
    let mut fake = NamedTempFile::with_suffix(".fa.gz").unwrap();
    fake.write_all(b">seq1\nACGT\n").unwrap();
    match validate_path(fake.path(), &ValidatorConfig::default()) {
        Err(FastaError::Io(_)) => {}
        other => panic!("Expected Io error, got {:?}", other),
    }
    assert_eq!(validate(fake.path(), false), ValidationStatus::MissingHeader);
}

#[test]
fn test_missing_file() {
    assert_eq!(validate("/no/such/dir/reads.fa", true).code(), 1);
    match validate_path("/no/such/dir/reads.fa.gz", &ValidatorConfig::default()) {
        Err(FastaError::Open { .. }) => {}
        other => panic!("Expected Open error, got {:?}", other),
    }
}

#[test]
fn test_idempotent() {
    let file = plain_file(b">a\nACGT\n>b\nAC1\n");
    let first = validate(file.path(), false);
    let second = validate(file.path(), false);
    assert_eq!(first, second);
    assert_eq!(first, ValidationStatus::InvalidCharacter);
}

#[test]
fn test_runs_are_independent() {
    // Identifiers from one file must not leak into the next.
    let a = plain_file(b">shared\nACGT\n");
    let b = plain_file(b">shared\nTTTT\n");
    assert!(validate(a.path(), false).is_valid());
    assert!(validate(b.path(), false).is_valid());
}

#[test]
fn test_repeated_failures_release_handles() {
    let file = plain_file(b">a\n>b\nAC\n");
    for _ in 0..2048 {
        assert_eq!(validate(file.path(), false), ValidationStatus::EmptySequence);
    }
}

#[test]
fn test_long_lines() {
    let mut data = b">long\n".to_vec();
    data.extend(std::iter::repeat(b'A').take(200_000));
    data.push(b'\n');
    let file = plain_file(&data);

    assert!(validate(file.path(), false).is_valid());

    let config = ValidatorBuilder::new()
        .max_line_len(1000)
        .overlong(OverlongLines::Reject)
        .build();
    assert_eq!(validate_with(file.path(), &config), ValidationStatus::LineTooLong);

    let summary = validate_path(
        file.path(),
        &ValidatorBuilder::new().max_line_len(1000).build(),
    )
    .unwrap();
    assert_eq!(summary.residues, 200_000);
}

#[test]
fn test_index_allocation_failure_is_internal() {
    let file = plain_file(b">seq1\nACGT\n");
    let config = ValidatorBuilder::new().index_capacity(usize::MAX).build();

    assert_eq!(validate_with(file.path(), &config), ValidationStatus::Internal);
    assert_eq!(validate_with(file.path(), &config).code(), 255);
    match validate_path(file.path(), &config) {
        Err(FastaError::IndexAllocation) => {}
        other => panic!("Expected IndexAllocation, got {:?}", other),
    }
}

#[test]
fn test_blank_sequence_lines_are_data() {
    for data in [
        &b">seq1\n\n>seq2\nACGT\n"[..],
        &b">seq1\nACGT\n>seq2\n\n"[..],
        &b">seq1\r\n\r\n>seq2\r\nACGT\r\n"[..],
    ] {
        assert!(validate(plain_file(data).path(), false).is_valid());
        assert!(validate(gzip_file(data).path(), false).is_valid());
    }
}

#[test]
fn test_input_is_compressed() {
    let gz = gzip_file(b">a\nA\n");
    let plain = plain_file(b">a\nA\n");
    assert!(FastaInput::from_path(gz.path(), 100).unwrap().is_compressed());
    assert!(!FastaInput::from_path(plain.path(), 100).unwrap().is_compressed());
}
