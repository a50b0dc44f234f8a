use criterion::{black_box, criterion_group, criterion_main, Criterion};
use identsplit::{tokenize, CharacterSet, Tokenizer};

const IDENTIFIERS: &[&str] = &[
    "top_posts",
    "topPosts",
    "TOPPOSTS",
    "XMLHttpRequest",
    "One2Three4Five6",
    "getHTTPResponseCode_v2",
];

fn bench_tokenize(c: &mut Criterion) {
    let set = CharacterSet::identifier();

    c.bench_function("tokenize identifiers", |b| {
        b.iter(|| {
            for identifier in IDENTIFIERS {
                black_box(tokenize(black_box(identifier), &set));
            }
        })
    });

    let long = IDENTIFIERS.join("_").repeat(64);
    c.bench_function("tokenize long identifier", |b| {
        b.iter(|| Tokenizer::new(black_box(&long), &set).into_iter().count())
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
