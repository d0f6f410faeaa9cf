use asientos::core::*;
use asientos::grouping::group_by_supplier_and_month;
use asientos::ledger::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn telefonica() -> InvoiceRecord {
    InvoiceRecordBuilder::new("F2023/01", "Telefónica", date(2023, 1, 15))
        .concept("Fibra óptica")
        .amounts(dec!(100.00), dec!(21.00))
        .build()
        .unwrap()
}

fn endesa() -> InvoiceRecord {
    InvoiceRecordBuilder::new("F2023/02", "Endesa", date(2023, 1, 20))
        .concept("Suministro eléctrico")
        .amounts(dec!(56.20), dec!(11.80))
        .build()
        .unwrap()
}

#[test]
fn single_invoice_shape() {
    let inv = telefonica();
    let entries = generate_entries([&inv]).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].account_code(), AccountCode::Purchases);
    assert_eq!(entries[0].debit_credit(), DebitCredit::Debit);
    assert_eq!(entries[0].amount(), dec!(100.00));
    assert_eq!(entries[1].account_code(), AccountCode::VatSupported);
    assert_eq!(entries[1].debit_credit(), DebitCredit::Debit);
    assert_eq!(entries[1].amount(), dec!(21.00));
    assert_eq!(entries[2].account_code(), AccountCode::Suppliers);
    assert_eq!(entries[2].debit_credit(), DebitCredit::Credit);
    assert_eq!(entries[2].amount(), dec!(121.00));
}

#[test]
fn journal_rendering() {
    let invoices = [telefonica(), endesa()];
    let entries = generate_entries(&invoices).unwrap();
    let journal = entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(journal, @r"
    DEBIT 6000: 100.00 - Purchases for invoice F2023/01 (F2023/01)
    DEBIT 4720: 21.00 - VAT for invoice F2023/01 (F2023/01)
    CREDIT 4000: 121.00 - Total for invoice F2023/01 (F2023/01)
    DEBIT 6000: 56.20 - Purchases for invoice F2023/02 (F2023/02)
    DEBIT 4720: 11.80 - VAT for invoice F2023/02 (F2023/02)
    CREDIT 4000: 68.00 - Total for invoice F2023/02 (F2023/02)
    ");
}

#[test]
fn rejects_negative_invoice_with_message() {
    let mut inv = telefonica();
    inv.total_value = dec!(-100.00);
    let err = generate_entries([&inv]).unwrap_err();
    assert_eq!(
        err,
        AccountingError::Validation(ValidationError::InvalidAmount {
            number: "F2023/01".into(),
            amount: dec!(-100.00),
        })
    );
}

#[test]
fn every_account_only_on_its_natural_side() {
    for account in AccountCode::ALL {
        for side in [DebitCredit::Debit, DebitCredit::Credit] {
            let result = AccountingEntry::new(account, side, dec!(1), "probe", "F2023/01");
            assert_eq!(result.is_ok(), account.natural_side() == side, "{account} {side}");
        }
    }
}

#[test]
fn negative_entry_amount_rejected() {
    let err = AccountingEntry::new(
        AccountCode::Purchases,
        DebitCredit::Debit,
        dec!(-0.01),
        "negative",
        "F2023/05",
    )
    .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn grouped_summary_is_distinct_from_posting() {
    let invoices = [telefonica(), endesa(), {
        let mut second = telefonica();
        second.number = "F2023/03".into();
        second.date = date(2023, 1, 28);
        second
    }];
    let groups = group_by_supplier_and_month(&invoices, None).unwrap();
    let summaries = summarize_groups(&groups);

    assert_eq!(summaries.len(), 2);
    let tel = summaries.iter().find(|s| s.supplier == "Telefónica").unwrap();
    assert_eq!(tel.month, "2023-01");
    assert_eq!(tel.total_base, dec!(200.00));
    assert_eq!(tel.total_value, dec!(242.00));
    assert_eq!(tel.invoice_count, 2);

    let entries = generate_entries(groups.invoices()).unwrap();
    assert_eq!(entries.len(), 9);
}

#[test]
fn trial_balance_by_account() {
    let invoices = [telefonica(), endesa()];
    let entries = generate_entries(&invoices).unwrap();
    let tb = TrialBalance::from_entries(&entries).unwrap();

    assert!(tb.is_balanced());
    assert_eq!(tb.account(AccountCode::Purchases).debit, dec!(156.20));
    assert_eq!(tb.account(AccountCode::VatSupported).debit, dec!(32.80));
    assert_eq!(tb.account(AccountCode::Suppliers).credit, dec!(189.00));
    assert_eq!(tb.total_debits, tb.total_credits);
}
