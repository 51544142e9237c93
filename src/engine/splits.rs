use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::ProfitSplit;

/// Allowed drift of a split total away from 100 before it is flagged.
pub const SPLIT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Sum of every split row recorded for a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCheck {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_percentage: Decimal,
    pub balanced: bool,
}

/// Sums the percentages of the given rows. Returns `None` when there are none.
pub fn check_splits<'a, I>(splits: I) -> Option<SplitCheck>
where
    I: IntoIterator<Item = &'a ProfitSplit>,
{
    let mut rows = splits.into_iter().peekable();
    rows.peek()?;
    let total_percentage = rows.fold(Decimal::ZERO, |total, split| {
        total.saturating_add(split.percentage)
    });
    let balanced = total_percentage
        .checked_sub(Decimal::ONE_HUNDRED)
        .is_some_and(|drift| drift.abs() <= SPLIT_TOLERANCE);
    Some(SplitCheck {
        total_percentage,
        balanced,
    })
}

/// Non-fatal anomalies found while reconciling a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Advisory {
    SplitImbalance {
        #[serde(
            rename = "totalPercentage",
            serialize_with = "rust_decimal::serde::float::serialize"
        )]
        total_percentage: Decimal,
    },
    /// A figure overflowed the decimal range and was replaced or left out.
    Overflow { figure: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::SplitImbalance { total_percentage } => write!(
                f,
                "profit splits total {}% (should equal 100%)",
                total_percentage.normalize()
            ),
            Advisory::Overflow { figure } => {
                write!(f, "{figure} is out of range and was left out")
            }
        }
    }
}
