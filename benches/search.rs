use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rolodex::{
    contact::{ContactDraft, ContactRecord},
    core::book::ContactBook,
    search::{binary_search, find},
};

fn book_of(n: u64) -> ContactBook {
    let seed = ContactRecord {
        id: 1,
        forename: "Fore0".to_string(),
        surname: "Sur000000".to_string(),
        email_address: "fore0@example.com".to_string(),
        mobile_number: "00000000000".to_string(),
    };
    let mut book = ContactBook::from_records(vec![seed]).expect("seed");
    for i in 1..n {
        book.create(ContactDraft {
            forename: format!("Fore{i}"),
            surname: format!("Sur{i:06}"),
            email_address: format!("fore{i}@example.com"),
            mobile_number: format!("{i:011}"),
        })
        .expect("create");
    }
    book
}

fn bench_creates(c: &mut Criterion) {
    c.bench_function("book_create_10k", |b| {
        b.iter(|| book_of(10_000));
    });
}

fn bench_surname_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("surname_lookup");

    for n in [100u64, 1_000u64, 10_000u64] {
        let surnames = book_of(n).surnames_sorted();
        let target = format!("Sur{:06}", n / 2);

        group.bench_with_input(BenchmarkId::new("lower_bound", n), &n, |b, _| {
            b.iter(|| binary_search(&surnames, &target));
        });
        group.bench_with_input(BenchmarkId::new("linear_member", n), &n, |b, _| {
            b.iter(|| find(&surnames, &target, None));
        });
    }

    group.finish();
}

fn bench_sorted_listing(c: &mut Criterion) {
    let book = book_of(10_000);
    c.bench_function("list_by_surname_10k", |b| {
        b.iter(|| book.list_by_surname());
    });
}

criterion_group!(benches, bench_creates, bench_surname_lookup, bench_sorted_listing);
criterion_main!(benches);
