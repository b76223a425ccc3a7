use chrono::NaiveDate;
use priznani::compliance::{ComplianceConfig, validate};
use priznani::core::*;
use priznani::epo;
use priznani::period::aggregate;
use rust_decimal_macros::dec;

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn main() {
    let profile = FilerProfile {
        tax_id: "CZ12345678".into(),
        legal_name: "Novák s.r.o.".into(),
        registered_address: "Dlouhá 12, 110 00 Praha 1".into(),
        tax_office_code: "461".into(),
        tax_office_branch: Some("3003".into()),
    };

    let transactions = vec![
        TransactionBuilder::new(TaxDirection::Sale, "vývoj e-shopu", dec!(20000), june(12))
            .counterparty("CZ87654321")
            .document("FV-2024-017")
            .build()
            .unwrap(),
        TransactionBuilder::new(TaxDirection::Purchase, "hosting, plus vat", dec!(1000), june(3))
            .counterparty("CZ11223344")
            .document("FP-2024-112")
            .build()
            .unwrap(),
        TransactionBuilder::new(TaxDirection::Purchase, "oběd s klientem", dec!(560), june(18))
            .build()
            .unwrap(),
    ];

    let summary = aggregate(&transactions, Period::month(2024, 6).unwrap());
    println!("=== {} ===", summary.period);
    println!("output tax: {}", summary.total_output_tax());
    println!("input tax:  {}", summary.total_input_tax());
    println!("liability:  {}\n", summary.liability());

    let verdict = validate(
        &summary,
        &transactions,
        &profile,
        &ComplianceConfig::default(),
    );
    for issue in &verdict.blocking_issues {
        println!("BLOCKING: {issue}");
    }
    for warning in &verdict.warnings {
        println!("warning: {warning}");
    }
    if !verdict.ok {
        return;
    }

    let vat_return = epo::render_return(&summary, &profile).unwrap();
    println!("\n{vat_return}");

    let control = epo::render_control_statement(&summary, &transactions, &profile).unwrap();
    println!("\n{control}");
}
