use asientos::cashflow::project_cashflow;
use asientos::core::*;
use asientos::pipeline::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let d = |m, day| NaiveDate::from_ymd_opt(2023, m, day).unwrap();

    // A quarter of supplier invoices, one of them entered twice
    let invoices = vec![
        InvoiceRecordBuilder::new("F2023/01", "Telefónica", d(1, 15))
            .concept("Fibra óptica")
            .amounts(dec!(100.00), dec!(21.00))
            .state(InvoiceState::Paid)
            .build()
            .unwrap(),
        InvoiceRecordBuilder::new("F2023/02", "Endesa", d(1, 20))
            .concept("Suministro eléctrico")
            .amounts(dec!(56.20), dec!(11.80))
            .state(InvoiceState::Paid)
            .build()
            .unwrap(),
        InvoiceRecordBuilder::new("F2023/03", "Telefónica", d(2, 15))
            .concept("Fibra óptica")
            .amounts(dec!(100.00), dec!(21.00))
            .state(InvoiceState::Pending)
            .build()
            .unwrap(),
        InvoiceRecordBuilder::new("F2023/05", "Repsol", d(3, 2))
            .concept("Gasóleo")
            .amounts(dec!(250.00), dec!(52.50))
            .build()
            .unwrap(),
        InvoiceRecordBuilder::new("F2023/05", "Repsol", d(3, 9))
            .concept("Gasóleo")
            .amounts(dec!(250.00), dec!(52.50))
            .build()
            .unwrap(),
    ];

    let config = PipelineConfigBuilder::new(2023, 6).build().unwrap();
    let pipeline = Pipeline::new(config).unwrap();
    let query = AccountingQuery::new().date_range(d(1, 1), d(3, 31));
    let run = pipeline.create_accounting_entries(&invoices, &query).unwrap();

    println!("=== Journal ===");
    for entry in &run.accounting_entries {
        println!("  {entry}");
    }

    println!("\n=== Supplier x month ===");
    for summary in run.summaries() {
        println!(
            "  {:<12} {}  base {:>8}  total {:>8}  ({} invoices)",
            summary.supplier,
            summary.month,
            summary.total_base,
            summary.total_value,
            summary.invoice_count
        );
    }

    let balance = run.trial_balance().unwrap();
    println!("\n=== Trial balance ===");
    for (account, totals) in &balance.accounts {
        println!(
            "  {account} {:<14} debit {:>8}  credit {:>8}",
            account.name(),
            totals.debit,
            totals.credit
        );
    }
    println!("  balanced: {}", balance.is_balanced());

    println!("\n=== Numbering ===");
    println!("  missing:    {:?}", run.missing_invoice_numbers);
    println!("  duplicates: {:?}", run.duplicate_invoice_numbers);

    let projection = project_cashflow(d(1, 1), d(3, 31), &invoices).unwrap();
    println!("\n=== Cash flow ===");
    for (week, amount) in &projection.weekly_cashflow {
        println!("  week of {week}: {amount}");
    }
    for (month, running) in projection.cumulative_monthly().unwrap() {
        println!("  {month}: {} (running {running})", projection.monthly_cashflow[&month]);
    }
    println!("  total: {}", projection.total_balance);

    let json = serde_json::to_string_pretty(&projection).unwrap();
    println!("\n{json}");
}
