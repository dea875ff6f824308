use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tarot_deck_core::{LookupService, CATALOG_SIZE};

fn standard_service() -> LookupService {
    match LookupService::standard() {
        Ok(service) => service,
        Err(err) => panic!("standard catalog failed integrity check: {err}"),
    }
}

fn bench_get_record(c: &mut Criterion) {
    let service = standard_service();
    let upper = i64::try_from(CATALOG_SIZE).unwrap_or(i64::MAX);

    c.bench_function("get_record_full_sweep", |b| {
        b.iter(|| {
            for index in 0..upper {
                if let Err(err) = service.get_record(black_box(index)) {
                    panic!("lookup benchmark failed: {err}");
                }
            }
        });
    });

    c.bench_function("get_record_out_of_range", |b| {
        b.iter(|| {
            if service.get_record(black_box(upper)).is_ok() {
                panic!("lookup benchmark resolved an out-of-range index");
            }
        });
    });
}

fn bench_find_by_name(c: &mut Criterion) {
    let service = standard_service();

    c.bench_function("find_by_name_last_record", |b| {
        b.iter(|| {
            if service.find_by_name(black_box("page of wands")).is_none() {
                panic!("name lookup benchmark found nothing");
            }
        });
    });
}

criterion_group!(lookup_benches, bench_get_record, bench_find_by_name);
criterion_main!(lookup_benches);
