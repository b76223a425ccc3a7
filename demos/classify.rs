use priznani::classify::classify;
use priznani::core::TaxDirection;

fn main() {
    let samples = [
        (TaxDirection::Purchase, "oběd s klientem 560"),
        (TaxDirection::Purchase, "hotel Brno, 2 noci"),
        (TaxDirection::Sale, "faktura za vývoj webu"),
        (TaxDirection::Sale, "školení Rust pro firmu"),
        (TaxDirection::Purchase, "kancelářské židle bez dph"),
        (TaxDirection::Sale, "konzultace 21% dph, celkem 12100"),
    ];

    println!("=== Rate & Inclusion Classification ===\n");
    for (direction, text) in samples {
        let c = classify(text, direction);
        println!(
            "  {:?} \"{}\"\n    => {}% | tax included: {}",
            direction,
            text,
            c.rate.percent(),
            c.tax_included
        );
    }
}
