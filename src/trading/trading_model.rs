use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lots::Lot;
use crate::trades::TradeRecord;

/// Result of an executed buy or sell: the appended trade record and the
/// cash balance after settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeExecution {
    pub trade: TradeRecord,
    pub cash_balance: Decimal,
}

impl TradeExecution {
    /// Cash moved by this trade: cost for a buy, proceeds for a sell.
    pub fn settled_amount(&self) -> Decimal {
        self.trade.price * Decimal::from(self.trade.quantity)
    }
}

/// One step of a FIFO sell: consume `consumed` shares from `lot_id`,
/// leaving `remaining` (zero means the lot is fully consumed and is
/// deleted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LotConsumption {
    pub lot_id: String,
    pub consumed: i64,
    pub remaining: i64,
}

/// Plans FIFO consumption of `quantity` shares from `lots`.
///
/// `lots` must already be in consumption order (oldest `buy_date`
/// first, the order the repository returns) and must hold at least
/// `quantity` shares in total; the caller checks both.
pub(crate) fn plan_fifo_consumption(lots: &[Lot], quantity: i64) -> Vec<LotConsumption> {
    let mut remaining_to_sell = quantity;
    let mut plan = Vec::new();

    for lot in lots {
        if remaining_to_sell <= 0 {
            break;
        }
        let consumed = remaining_to_sell.min(lot.quantity);
        plan.push(LotConsumption {
            lot_id: lot.id.clone(),
            consumed,
            remaining: lot.quantity - consumed,
        });
        remaining_to_sell -= consumed;
    }

    plan
}
