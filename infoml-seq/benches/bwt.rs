use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use infoml_seq::Bwt;

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_bwt(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt");

    for &len in &[1_000, 10_000] {
        let text = random_dna(len);
        let built = Bwt::build(&text).unwrap();

        group.bench_with_input(BenchmarkId::new("build", len), &len, |b, _| {
            b.iter(|| Bwt::build(black_box(&text)))
        });
        group.bench_with_input(BenchmarkId::new("invert", len), &len, |b, _| {
            b.iter(|| black_box(&built).invert())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bwt);
criterion_main!(benches);
