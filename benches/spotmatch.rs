use criterion::{criterion_group, criterion_main, Criterion};
use spotmatch::{
    best_match, extract_icon, CardBank, IconSignature, NormalizeConfig, OwnedImage, Position,
    CHANNELS,
};
use std::hint::black_box;

fn make_card(width: usize, height: usize) -> OwnedImage {
    let mut data = Vec::with_capacity(width * height * CHANNELS);
    for y in 0..height {
        for x in 0..width {
            let value = (((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF) as u8;
            data.extend_from_slice(&[value, value.wrapping_mul(3), value ^ 0x5A, 255]);
        }
    }
    OwnedImage::new(data, width, height).unwrap()
}

fn bench_normalize(c: &mut Criterion) {
    let card = make_card(800, 800);
    let patch = extract_icon(card.view(), Position::new(0, 0));
    let cfg = NormalizeConfig { samples: 36 };

    c.bench_function("signature_build_36_samples", |b| {
        b.iter(|| {
            let sig = IconSignature::build(black_box(&patch), &cfg).unwrap();
            black_box(sig);
        })
    });
}

fn bench_match(c: &mut Criterion) {
    let positions = [
        Position::new(0, 0),
        Position::new(400, 0),
        Position::new(0, 400),
    ];
    let card_a = make_card(800, 800);
    let card_b = make_card(800, 800);
    let cfg = NormalizeConfig { samples: 12 };
    let bank_a = CardBank::build(card_a.view(), &positions, &cfg).unwrap();
    let bank_b = CardBank::build(card_b.view(), &positions, &cfg).unwrap();

    c.bench_function("best_match_3x3", |b| {
        b.iter(|| {
            let best = best_match(black_box(&bank_a), black_box(&bank_b)).unwrap();
            black_box(best);
        })
    });
}

criterion_group!(benches, bench_normalize, bench_match);
criterion_main!(benches);
