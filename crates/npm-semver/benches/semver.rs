use criterion::{black_box, criterion_group, criterion_main, Criterion};
use npm_semver::{compare, Range, Semver, Version};

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("10.20.30", "10.20.3"),
    ];
    let parsed: Vec<(Version, Version)> = cases
        .iter()
        .map(|(a, b)| (Version::parse(a).expect("version"), Version::parse(b).expect("version")))
        .collect();

    c.bench_function("version_compare", |b| {
        b.iter(|| {
            for (a, bver) in &parsed {
                black_box(compare::compare(black_box(a), black_box(bver)));
            }
        })
    });
}

fn bench_parse_versions(c: &mut Criterion) {
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0.0-alpha.beta.gamma",
        "2020.4.20",
        "1.2.3-rc.1+sha.5114f85",
        "0.0.1-0",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_ranges(c: &mut Criterion) {
    let ranges = [
        ">=1.2.3 <2.0.0",
        "^1.2.3 || ~2.4",
        "1.2.* || 2.*",
        "1.2.3 - 2.0.0",
        "~1.2.1 >=1.2.3",
        ">1.0 <3.0 || >=4.0",
        "^0.0.1-beta",
        "*",
    ];

    c.bench_function("parse_ranges", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(Range::parse(black_box(range)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3 <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("1.2.3-beta.4", ">1.2.3-beta.2"),
        ("1.2.3", "1.2.* || 2.*"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, range) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(range)));
            }
        })
    });
}

fn bench_satisfies_parsed(c: &mut Criterion) {
    let cases = [
        "1.2.3",
        "1.2.3-beta",
        "2.4.5",
        "1.9999.9999",
        "1.9.0",
        "2.0.0",
    ];
    let versions: Vec<Version> = cases
        .iter()
        .map(|v| Version::parse(v).expect("version"))
        .collect();

    let range = Range::parse("^1.2").expect("parse range");

    c.bench_function("range_test_parsed", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(range.test(black_box(version)));
            }
        })
    });
}

fn bench_intersects(c: &mut Criterion) {
    let pairs = [
        ("^1.0.0", "~1.5.0"),
        ("1.5.x", "<1.5.0 || >=1.6.0"),
        ("<1.0.0 >2.0.0", ">0.0.0"),
    ];
    let parsed: Vec<(Range, Range)> = pairs
        .iter()
        .map(|(a, b)| (Range::parse(a).expect("range"), Range::parse(b).expect("range")))
        .collect();

    c.bench_function("range_intersects", |b| {
        b.iter(|| {
            for (a, other) in &parsed {
                black_box(a.intersects(black_box(other)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "50.2.0",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
        "2.4.5+build",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)));
        })
    });
}

criterion_group!(
    benches,
    bench_compare,
    bench_parse_versions,
    bench_parse_ranges,
    bench_satisfies,
    bench_satisfies_parsed,
    bench_intersects,
    bench_sort
);
criterion_main!(benches);
