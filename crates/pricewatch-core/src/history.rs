//! Baseline ("previous price") lookup for price comparison.
//!
//! No historical price store exists yet, so the default provider fabricates a
//! baseline by alternately discounting and marking up the current price. The
//! trait is the seam a real store plugs into later; the simulator is only a
//! stand-in, not a forecast.

use crate::records::PriceRecord;

/// Source of baseline prices for a run.
///
/// Called once per record, in record order, including records whose current
/// price is absent — stateful providers rely on seeing every position.
pub trait HistoryProvider {
    /// Returns the baseline price for one record, or `None` when no history
    /// exists for it.
    fn previous_price(
        &mut self,
        product: &str,
        competitor: &str,
        current_price: Option<f64>,
    ) -> Option<f64>;
}

/// Simulated baseline: alternates a 10% discount and a 10% markup by record
/// position. Even positions (0-based) get `current * 0.90` (a simulated
/// drop), odd positions `current * 1.10` (a simulated rise), both rounded to
/// two decimal places. Absent current prices yield no baseline but still
/// consume a position.
#[derive(Debug, Default)]
pub struct SimulatedHistory {
    cursor: usize,
}

impl SimulatedHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryProvider for SimulatedHistory {
    fn previous_price(
        &mut self,
        _product: &str,
        _competitor: &str,
        current_price: Option<f64>,
    ) -> Option<f64> {
        let position = self.cursor;
        self.cursor += 1;

        let price = current_price?;
        let factor = if position % 2 == 0 { 0.90 } else { 1.10 };
        Some(round2(price * factor))
    }
}

/// Fills `previous_price` and `price_change` on every record.
///
/// `price_change = price - previous_price` when both are present; `None`
/// otherwise. An absent `price` always yields absent comparison fields
/// regardless of what the provider returns.
pub fn apply_history(records: &mut [PriceRecord], provider: &mut dyn HistoryProvider) {
    for record in records {
        let previous =
            provider.previous_price(&record.product_name, &record.competitor, record.price);
        record.previous_price = match record.price {
            Some(_) => previous,
            None => None,
        };
        record.price_change = match (record.price, record.previous_price) {
            (Some(current), Some(prev)) => Some(current - prev),
            _ => None,
        };
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(price: Option<f64>) -> PriceRecord {
        PriceRecord {
            product_name: "A Light in the Attic".to_string(),
            competitor: "Amazon".to_string(),
            raw_price: "£51.77".to_string(),
            availability: "In stock".to_string(),
            price,
            previous_price: None,
            price_change: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn simulator_alternates_discount_and_markup() {
        let mut records = vec![record(Some(10.0)), record(Some(20.0)), record(None)];
        let mut provider = SimulatedHistory::new();
        apply_history(&mut records, &mut provider);

        assert_eq!(records[0].previous_price, Some(9.0));
        assert_eq!(records[1].previous_price, Some(22.0));
        assert_eq!(records[2].previous_price, None);

        assert_eq!(records[0].price_change, Some(1.0));
        assert_eq!(records[1].price_change, Some(-2.0));
        assert_eq!(records[2].price_change, None);
    }

    #[test]
    fn absent_price_consumes_a_position() {
        // The None record sits at position 1 (the markup slot), so the next
        // priced record lands back on a discount position.
        let mut records = vec![record(Some(10.0)), record(None), record(Some(30.0))];
        let mut provider = SimulatedHistory::new();
        apply_history(&mut records, &mut provider);

        assert_eq!(records[0].previous_price, Some(9.0));
        assert_eq!(records[1].previous_price, None);
        assert_eq!(records[2].previous_price, Some(27.0));
    }

    #[test]
    fn simulator_rounds_to_two_decimals() {
        let mut records = vec![record(Some(51.77))];
        let mut provider = SimulatedHistory::new();
        apply_history(&mut records, &mut provider);

        // 51.77 * 0.90 = 46.593 → 46.59
        assert_eq!(records[0].previous_price, Some(46.59));
    }

    #[test]
    fn apply_history_ignores_provider_output_for_absent_price() {
        struct AlwaysSome;
        impl HistoryProvider for AlwaysSome {
            fn previous_price(&mut self, _: &str, _: &str, _: Option<f64>) -> Option<f64> {
                Some(1.0)
            }
        }

        let mut records = vec![record(None)];
        let mut provider = AlwaysSome;
        apply_history(&mut records, &mut provider);
        assert_eq!(records[0].previous_price, None);
        assert_eq!(records[0].price_change, None);
    }

    #[test]
    fn custom_provider_drives_price_change() {
        struct Flat(f64);
        impl HistoryProvider for Flat {
            fn previous_price(&mut self, _: &str, _: &str, current: Option<f64>) -> Option<f64> {
                current.map(|_| self.0)
            }
        }

        let mut records = vec![record(Some(12.5))];
        let mut provider = Flat(10.0);
        apply_history(&mut records, &mut provider);
        assert_eq!(records[0].previous_price, Some(10.0));
        assert_eq!(records[0].price_change, Some(2.5));
    }
}
