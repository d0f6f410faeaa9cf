use serde::{Deserialize, Serialize};

use crate::core::{AccountingError, GapReport, SequenceConfig};

/// Configuration for [`Pipeline`](super::Pipeline).
///
/// Has no `Default`; the expected number of invoices per year is always
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Numbering expectations for gap detection.
    pub sequence: SequenceConfig,
    /// Emit a warning when generated entries do not balance.
    #[serde(default = "default_check_balance")]
    pub check_balance: bool,
}

fn default_check_balance() -> bool {
    true
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), AccountingError> {
        self.sequence.validate()
    }
}

/// Builder for [`PipelineConfig`].
///
/// # Example
///
/// ```
/// use asientos::core::GapReport;
/// use asientos::pipeline::PipelineConfigBuilder;
///
/// let config = PipelineConfigBuilder::new(2023, 40)
///     .gap_report(GapReport::LastOnly)
///     .build()
///     .unwrap();
/// assert_eq!(config.sequence.expected_per_year, 40);
///
/// assert!(PipelineConfigBuilder::new(2023, 0).build().is_err());
/// ```
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Create a builder with the fiscal year and expected invoice count.
    pub fn new(fiscal_year: i32, expected_per_year: u32) -> Self {
        Self {
            config: PipelineConfig {
                sequence: SequenceConfig::new(fiscal_year, expected_per_year),
                check_balance: true,
            },
        }
    }

    /// Report every gap or only the last one.
    pub fn gap_report(mut self, gap_report: GapReport) -> Self {
        self.config.sequence.gap_report = gap_report;
        self
    }

    pub fn check_balance(mut self, check: bool) -> Self {
        self.config.check_balance = check;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PipelineConfig, AccountingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
