use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use rx_rename::rename::{Pattern, Substitution, SubstitutionMode};

const NAMES: [&str; 6] = [
    "IMG_20240101_120000.jpeg",
    "holiday - beach - 001.JPG",
    "Artist.Name-Song.Title.2023.mp3",
    "report_final_v2_FINAL.pdf",
    "no digits here.txt",
    "a1b2c3d4e5f6g7h8i9.bin",
];

fn substitution(pattern: &str, template: &str, mode: SubstitutionMode) -> Substitution {
    let pattern = Pattern::new(pattern, true, true).expect("valid benchmark pattern");
    Substitution::new(pattern, template, mode)
}

fn bench_modes(c: &mut Criterion) {
    let cases = [
        ("replace", substitution(r"(\d+)", "<$1>", SubstitutionMode::Replace)),
        ("replace_all", substitution(r"(\d+)", "<$1>", SubstitutionMode::ReplaceAll)),
        ("insert_before", substitution(r"\d", "$$", SubstitutionMode::InsertBefore)),
        ("insert_after", substitution(r"(\w)(\d)", "[$2$1]", SubstitutionMode::InsertAfter)),
    ];

    let mut group = c.benchmark_group("transform");
    for (name, sub) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                for file_name in NAMES {
                    black_box(sub.transform(black_box(file_name)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
