use criterion::{Criterion, criterion_group, criterion_main};
use mmv_cpu_ref::{MmvLane, MmvRef};
use mmv_hal::bench_suite::mmv::{bench_mmv_add_inplace, bench_mmv_compare, bench_mmv_compare_mod_q, bench_mmv_mul_scalar_inplace};

fn bench_mmv_add_inplace_cpu_ref(c: &mut Criterion) {
    bench_mmv_add_inplace::<MmvRef>(c, "cpu_ref::word");
}

fn bench_mmv_add_inplace_cpu_lane(c: &mut Criterion) {
    bench_mmv_add_inplace::<MmvLane>(c, "cpu_ref::lane");
}

fn bench_mmv_mul_scalar_inplace_cpu_ref(c: &mut Criterion) {
    bench_mmv_mul_scalar_inplace::<MmvRef>(c, "cpu_ref::word");
}

fn bench_mmv_compare_cpu_ref(c: &mut Criterion) {
    bench_mmv_compare::<MmvRef>(c, "cpu_ref::word");
}

fn bench_mmv_compare_mod_q_cpu_ref(c: &mut Criterion) {
    bench_mmv_compare_mod_q::<MmvRef>(c, "cpu_ref::word");
}

criterion_group!(
    benches,
    bench_mmv_add_inplace_cpu_ref,
    bench_mmv_add_inplace_cpu_lane,
    bench_mmv_mul_scalar_inplace_cpu_ref,
    bench_mmv_compare_cpu_ref,
    bench_mmv_compare_mod_q_cpu_ref,
);
criterion_main!(benches);
