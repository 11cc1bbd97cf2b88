use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cerf::*;


// One argument per algorithm region of w(z)
fn w_arguments() -> Vec<(&'static str, Complex64)> {
    vec![
        ("real_axis", Complex64::new(1.3, 0.0)),
        ("imaginary_axis", Complex64::new(0.0, 1.3)),
        ("small_x_sums", Complex64::new(1.0e-4, 0.8)),
        ("sums", Complex64::new(2.5, 1.5)),
        ("large_x_sums", Complex64::new(12.0, 1.0e-12)),
        ("continued_fraction", Complex64::new(6.5, 8.0)),
        ("two_term_fraction", Complex64::new(3.0e3, 2.0e3)),
        ("lower_half_plane", Complex64::new(2.0, -9.0)),
    ]
}


fn faddeeva_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("faddeeva_w");
    for (name, z) in w_arguments() {
        group.bench_with_input(BenchmarkId::new("full_precision", name), &z, |b, z| {
            b.iter(|| faddeeva_w(black_box(*z)))
        });
        group.bench_with_input(BenchmarkId::new("relerr_1e-6", name), &z, |b, z| {
            b.iter(|| w_with_relerror(black_box(*z), 1.0e-6))
        });
    }
    group.finish();
}


fn real_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("real");
    let xs: Vec<f64> = (0..100).map(|k| -10.0 + 0.2 * k as f64).collect();
    group.bench_function("erf", |b| {
        b.iter(|| xs.iter().map(|&x| RealErrorFunctions::erf(black_box(x))).sum::<f64>())
    });
    group.bench_function("erfcx", |b| {
        b.iter(|| xs.iter().map(|&x| RealErrorFunctions::erfcx(black_box(x))).sum::<f64>())
    });
    group.bench_function("dawson", |b| {
        b.iter(|| xs.iter().map(|&x| RealErrorFunctions::dawson(black_box(x))).sum::<f64>())
    });
    group.finish();
}


fn complex_benchmarks(c: &mut Criterion) {
    let z = Complex64::new(1.21, -0.93);
    c.bench_function("complex_erf", |b| b.iter(|| black_box(z).erf()));
    c.bench_function("complex_erfc", |b| b.iter(|| black_box(z).erfc()));
    c.bench_function("complex_dawson", |b| b.iter(|| black_box(z).dawson()));
}


fn voigt_benchmarks(c: &mut Criterion) {
    c.bench_function("voigt", |b| b.iter(|| voigt(black_box(0.7), black_box(1.0), black_box(0.3))));
    c.bench_function("voigt_hwhm", |b| b.iter(|| voigt_hwhm(black_box(1.0), black_box(0.3))));
}


criterion_group!(benches, faddeeva_benchmarks, real_benchmarks, complex_benchmarks, voigt_benchmarks);
criterion_main!(benches);
