use shortseq::pack;
use std::time::Instant;

fn sample(len: usize) -> String {
    "ACGT".chars().cycle().take(len).collect()
}

fn main() {
    for &len in &[16usize, 32, 64, 256, 1024] {
        let text = sample(len);
        let pre = Instant::now();
        for _ in 0..100_000 {
            let packed = pack(&text).unwrap();
            assert_eq!(packed.decode(), text);
        }
        println!("len={len}: {:?} / 100k pack+decode round-trips", pre.elapsed());
    }
}
