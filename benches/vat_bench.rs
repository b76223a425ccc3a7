use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use priznani::core::*;
use priznani::epo;
use priznani::period::aggregate;
use priznani::vat::split_amount;

fn test_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn profile() -> FilerProfile {
    FilerProfile {
        tax_id: "CZ12345678".into(),
        legal_name: "Benchmark s.r.o.".into(),
        registered_address: "Dlouhá 12, 110 00 Praha 1".into(),
        tax_office_code: "461".into(),
        tax_office_branch: Some("3003".into()),
    }
}

fn build_month_of_transactions() -> Vec<Transaction> {
    (0..200u32)
        .map(|i| {
            let direction = if i % 3 == 0 {
                TaxDirection::Purchase
            } else {
                TaxDirection::Sale
            };
            let rate = match i % 3 {
                0 => VatRate::Standard,
                1 => VatRate::Reduced,
                _ => VatRate::Zero,
            };
            TransactionBuilder::new(
                direction,
                format!("transaction {i}"),
                dec!(1000) + rust_decimal::Decimal::from(i * 37),
                test_date(i % 28 + 1),
            )
            .rate(rate)
            .tax_included(i % 2 == 0)
            .counterparty("CZ87654321")
            .document(format!("FV-2024-{i:03}"))
            .build()
            .unwrap()
        })
        .collect()
}

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_standard_gross", |b| {
        b.iter(|| split_amount(black_box(dec!(1210.00)), VatRate::Standard, true))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let txs = build_month_of_transactions();
    let period = Period::month(2024, 6).unwrap();
    c.bench_function("aggregate_200_transactions", |b| {
        b.iter(|| aggregate(black_box(&txs), period))
    });
}

fn bench_render(c: &mut Criterion) {
    let txs = build_month_of_transactions();
    let summary = aggregate(&txs, Period::month(2024, 6).unwrap());
    let p = profile();

    c.bench_function("render_return", |b| {
        b.iter(|| epo::render_return(black_box(&summary), &p).unwrap())
    });
    c.bench_function("render_control_statement", |b| {
        b.iter(|| epo::render_control_statement(black_box(&summary), &txs, &p).unwrap())
    });
}

criterion_group!(benches, bench_split, bench_aggregate, bench_render);
criterion_main!(benches);
