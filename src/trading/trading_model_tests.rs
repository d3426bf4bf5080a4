//! Tests for FIFO consumption planning.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::lots::Lot;
    use crate::trading::trading_model::{plan_fifo_consumption, LotConsumption};

    fn lot(id: &str, quantity: i64, day: u32) -> Lot {
        Lot {
            id: id.to_string(),
            symbol: "AAPL".to_string(),
            quantity,
            buy_price: dec!(50),
            buy_date: Utc.with_ymd_and_hms(2024, 1, day, 15, 30, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 15, 30, 0).unwrap(),
        }
    }

    #[test]
    fn selling_oldest_lot_quantity_consumes_only_that_lot() {
        let lots = vec![lot("first", 10, 2), lot("second", 5, 9)];

        let plan = plan_fifo_consumption(&lots, 10);

        assert_eq!(
            plan,
            vec![LotConsumption {
                lot_id: "first".to_string(),
                consumed: 10,
                remaining: 0,
            }]
        );
    }

    #[test]
    fn partial_sell_decrements_single_lot() {
        let lots = vec![lot("only", 10, 2)];

        let plan = plan_fifo_consumption(&lots, 4);

        assert_eq!(
            plan,
            vec![LotConsumption {
                lot_id: "only".to_string(),
                consumed: 4,
                remaining: 6,
            }]
        );
    }

    #[test]
    fn sell_spanning_lots_consumes_in_order() {
        let lots = vec![lot("a", 3, 1), lot("b", 5, 2), lot("c", 7, 3)];

        let plan = plan_fifo_consumption(&lots, 9);

        assert_eq!(plan.len(), 3);
        assert_eq!((plan[0].consumed, plan[0].remaining), (3, 0));
        assert_eq!((plan[1].consumed, plan[1].remaining), (5, 0));
        assert_eq!((plan[2].consumed, plan[2].remaining), (1, 6));
    }

    #[test]
    fn selling_everything_empties_all_lots() {
        let lots = vec![lot("a", 3, 1), lot("b", 5, 2)];

        let plan = plan_fifo_consumption(&lots, 8);

        assert!(plan.iter().all(|step| step.remaining == 0));
        assert_eq!(plan.iter().map(|step| step.consumed).sum::<i64>(), 8);
    }
}
