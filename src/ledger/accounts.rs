//! Ledger account codes used for supplier invoices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Debit/credit indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DebitCredit {
    Debit,
    Credit,
}

impl DebitCredit {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Debit => "DEBIT",
            Self::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for DebitCredit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Closed set of accounts a supplier invoice posts to.
///
/// Numbering follows the Spanish PGC: group 600 purchases, 472 input VAT,
/// 400 suppliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountCode {
    /// 6000, purchases (debit).
    #[serde(rename = "6000")]
    Purchases,
    /// 4720, input VAT (debit).
    #[serde(rename = "4720")]
    VatSupported,
    /// 4000, suppliers (credit).
    #[serde(rename = "4000")]
    Suppliers,
}

impl AccountCode {
    pub const ALL: [AccountCode; 3] = [Self::Purchases, Self::VatSupported, Self::Suppliers];

    /// Account number as posted.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Purchases => "6000",
            Self::VatSupported => "4720",
            Self::Suppliers => "4000",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Purchases => "Purchases",
            Self::VatSupported => "VAT Supported",
            Self::Suppliers => "Suppliers",
        }
    }

    /// The side this account is posted on by invoice entries.
    pub fn natural_side(&self) -> DebitCredit {
        match self {
            Self::Purchases | Self::VatSupported => DebitCredit::Debit,
            Self::Suppliers => DebitCredit::Credit,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
