use shortseq::read_and_count_fastq;
use std::env;
use std::process::exit;

fn main() {
    let path = match env::args().nth(1) {
        Some(p) => p,
        None => {
            eprintln!("usage: count_fastq <path.fastq[.gz]>");
            exit(1);
        }
    };

    let counter = match read_and_count_fastq(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to read {path}: {e}");
            exit(1);
        }
    };

    println!("{} reads, {} distinct sequences", counter.total(), counter.len());
    let mut by_count: Vec<_> = counter.iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(a.1));
    for (seq, count) in by_count.into_iter().take(10) {
        println!("{count:>8}  {}", seq.decode());
    }
}
