#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(number) = asientos::InvoiceNumber::parse(s) {
            assert_eq!(number.to_string(), s);
        }
        let _ = asientos::validate_invoice_format([s]);
    }
});
