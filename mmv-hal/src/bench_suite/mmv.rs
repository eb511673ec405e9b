use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use crate::{
    MMV_ENTRIES,
    api::{MmvAddInplace, MmvCompare, MmvCompareModQ, MmvMulScalarInplace, ModuleNew},
    layouts::{Backend, Module, PackedVec},
    source::Source,
};

/// Moduli of the benchmarked vectors: one per field width up to 8 bits.
pub const BENCH_MODULI: [u32; 3] = [3, 15, 31];

fn alloc_uniform<B: Backend>(module: &Module<B>, source: &mut Source) -> PackedVec<Vec<u64>> {
    let mut vec: PackedVec<Vec<u64>> = module.alloc_vec();
    vec.fill_uniform(source);
    vec
}

pub fn bench_mmv_add_inplace<B>(c: &mut Criterion, label: &str)
where
    Module<B>: MmvAddInplace + ModuleNew<B>,
    B: Backend,
{
    let group_name: String = format!("mmv_add_inplace::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B>(p: u32) -> impl FnMut()
    where
        Module<B>: MmvAddInplace + ModuleNew<B>,
        B: Backend,
    {
        let module: Module<B> = Module::<B>::new(p, MMV_ENTRIES).unwrap();

        let mut source: Source = Source::new([0u8; 32]);
        let mut res: PackedVec<Vec<u64>> = alloc_uniform(&module, &mut source);
        let a: PackedVec<Vec<u64>> = alloc_uniform(&module, &mut source);

        move || {
            module.mmv_add_inplace(&mut res, &a).unwrap();
            black_box(());
        }
    }

    for p in BENCH_MODULI {
        let id: BenchmarkId = BenchmarkId::from_parameter(format!("p={p}"));
        let mut runner = runner::<B>(p);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_mmv_mul_scalar_inplace<B>(c: &mut Criterion, label: &str)
where
    Module<B>: MmvMulScalarInplace + ModuleNew<B>,
    B: Backend,
{
    let group_name: String = format!("mmv_mul_scalar_inplace::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B>(p: u32) -> impl FnMut()
    where
        Module<B>: MmvMulScalarInplace + ModuleNew<B>,
        B: Backend,
    {
        let module: Module<B> = Module::<B>::new(p, MMV_ENTRIES).unwrap();

        let mut source: Source = Source::new([0u8; 32]);
        let mut res: PackedVec<Vec<u64>> = alloc_uniform(&module, &mut source);
        let factor: i32 = source.next_factor(p);

        move || {
            module.mmv_mul_scalar_inplace(factor, &mut res).unwrap();
            black_box(());
        }
    }

    for p in BENCH_MODULI {
        let id: BenchmarkId = BenchmarkId::from_parameter(format!("p={p}"));
        let mut runner = runner::<B>(p);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_mmv_compare<B>(c: &mut Criterion, label: &str)
where
    Module<B>: MmvCompare + ModuleNew<B>,
    B: Backend,
{
    let group_name: String = format!("mmv_compare::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B>(p: u32) -> impl FnMut()
    where
        Module<B>: MmvCompare + ModuleNew<B>,
        B: Backend,
    {
        let module: Module<B> = Module::<B>::new(p, MMV_ENTRIES).unwrap();

        let mut source: Source = Source::new([0u8; 32]);
        let a: PackedVec<Vec<u64>> = alloc_uniform(&module, &mut source);
        let b: PackedVec<Vec<u64>> = a.clone();

        // Equal operands: every word is visited.
        move || {
            black_box(module.mmv_compare(&a, &b).unwrap());
        }
    }

    for p in BENCH_MODULI {
        let id: BenchmarkId = BenchmarkId::from_parameter(format!("p={p}"));
        let mut runner = runner::<B>(p);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}

pub fn bench_mmv_compare_mod_q<B>(c: &mut Criterion, label: &str)
where
    Module<B>: MmvCompareModQ + ModuleNew<B>,
    B: Backend,
{
    let group_name: String = format!("mmv_compare_mod_q::{label}");

    let mut group = c.benchmark_group(group_name);

    fn runner<B>(p: u32, q: u32) -> impl FnMut()
    where
        Module<B>: MmvCompareModQ + ModuleNew<B>,
        B: Backend,
    {
        let module: Module<B> = Module::<B>::new(p, MMV_ENTRIES).unwrap();

        let mut source: Source = Source::new([0u8; 32]);
        let a: PackedVec<Vec<u64>> = alloc_uniform(&module, &mut source);
        let b: PackedVec<Vec<u64>> = a.clone();

        move || {
            black_box(module.mmv_compare_mod_q(&a, &b, q).unwrap());
        }
    }

    for (p, q) in [(15, 3), (15, 5), (63, 7), (255, 17)] {
        let id: BenchmarkId = BenchmarkId::from_parameter(format!("p={p},q={q}"));
        let mut runner = runner::<B>(p, q);
        group.bench_with_input(id, &(), |b, _| b.iter(&mut runner));
    }

    group.finish();
}
