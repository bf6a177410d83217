use flate2::write::GzEncoder;
use flate2::Compression;
use shortseq::{pack, read_and_count_fastq};
use std::io::Write;

fn write_fastq(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_gzip_fastq(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

const SAMPLE: &str = "\
@read1
ACGTACGT
+
IIIIIIII
@read2
ACGTACGT
+
IIIIIIII
@read3
TTTTAAAA
+
JJJJJJJJ
";

#[test]
fn counts_plaintext_fastq() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fastq(dir.path(), "sample.fastq", SAMPLE);

    let counter = read_and_count_fastq(&path).unwrap();
    assert_eq!(counter.total(), 3);
    assert_eq!(counter.len(), 2);
    assert_eq!(counter.get(&pack("ACGTACGT").unwrap()), 2);
    assert_eq!(counter.get(&pack("TTTTAAAA").unwrap()), 1);
}

#[test]
fn counts_gzip_fastq_transparently() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gzip_fastq(dir.path(), "sample.fastq.gz", SAMPLE);

    let counter = read_and_count_fastq(&path).unwrap();
    assert_eq!(counter.total(), 3);
    assert_eq!(counter.len(), 2);
}

#[test]
fn malformed_record_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fastq(dir.path(), "bad.fastq", "read1\nACGT\n+\nIIII\n");

    let err = read_and_count_fastq(&path).unwrap_err();
    assert!(err.to_string().contains("malformed FASTQ record"));
}
