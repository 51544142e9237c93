use rust_decimal::Decimal;
use serde::Serialize;

/// Balances within this distance of zero count as settled.
pub const SETTLED_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Derived per-member position within one project. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAccount {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub expenses_paid: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub money_received: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub profit_share: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub profit_percentage: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub balance: Decimal,
}

impl MemberAccount {
    /// Recomputes the balance. Returns `false`, leaving the balance at zero,
    /// when the figures do not fit a decimal.
    pub(crate) fn settle(&mut self) -> bool {
        let balance = self
            .expenses_paid
            .checked_sub(self.money_received)
            .and_then(|net| self.profit_share.checked_add(net));
        self.balance = balance.unwrap_or(Decimal::ZERO);
        balance.is_some()
    }

    pub fn standing(&self) -> Standing {
        if self.balance > SETTLED_THRESHOLD {
            Standing::ToReceive
        } else if self.balance < -SETTLED_THRESHOLD {
            Standing::ToPay
        } else {
            Standing::Settled
        }
    }
}

/// Which way money still has to move for a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Standing {
    ToReceive,
    ToPay,
    Settled,
}

impl Standing {
    pub fn label(self) -> &'static str {
        match self {
            Standing::ToReceive => "To Receive",
            Standing::ToPay => "To Pay",
            Standing::Settled => "Settled",
        }
    }
}
