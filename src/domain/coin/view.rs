//! Display projection of a validated coin.

use super::Coin;
use crate::shared::fmt::{decimal, num};

/// Sentinel shown when a quantity is absent, or reported as zero upstream.
const EMPTY_VALUE: &str = "N/A";

/// Pre-formatted strings for rendering one asset row.
///
/// Dollar amounts carry a `$` prefix; the supply is a bare compact number.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinView {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub supply: String,
    pub market_cap_usd: String,
    pub price_usd: String,
    pub change_percent_24_hr: String,
    pub image: String,
}

impl From<&Coin> for CoinView {
    fn from(coin: &Coin) -> Self {
        let supply = match coin.supply {
            Some(s) if !s.is_zero() => decimal::compact(&s),
            _ => EMPTY_VALUE.to_string(),
        };

        let market_cap_usd = match coin.market_cap_usd {
            Some(m) if !m.is_zero() => format!("${}", decimal::compact(&m)),
            _ => EMPTY_VALUE.to_string(),
        };

        let change_percent_24_hr = match coin.change_percent_24_hr {
            Some(c) => num::percent(c),
            None => EMPTY_VALUE.to_string(),
        };

        Self {
            id: coin.id.to_string(),
            symbol: coin.symbol.clone(),
            name: coin.name.clone(),
            supply,
            market_cap_usd,
            price_usd: format!("${}", decimal::extended(&coin.price_usd)),
            change_percent_24_hr,
            image: coin.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_coin() -> Coin {
        Coin {
            id: "bitcoin".into(),
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            supply: Some(dec("19020000")),
            market_cap_usd: Some(dec("563430000000")),
            price_usd: dec("50732.51"),
            change_percent_24_hr: Some(4.271),
            image: "https://static.coincap.io/assets/icons/btc@2x.png".to_string(),
        }
    }

    #[test]
    fn test_identity_fields_pass_through() {
        let view = CoinView::from(&sample_coin());
        assert_eq!(view.id, "bitcoin");
        assert_eq!(view.symbol, "BTC");
        assert_eq!(view.name, "Bitcoin");
        assert_eq!(
            view.image,
            "https://static.coincap.io/assets/icons/btc@2x.png"
        );
    }

    #[test]
    fn test_price_is_dollar_extended() {
        let view = CoinView::from(&sample_coin());
        assert_eq!(view.price_usd, "$50,732.51");
    }

    #[test]
    fn test_sub_dollar_price_keeps_precision() {
        let mut coin = sample_coin();
        coin.price_usd = dec("0.00003981");
        let view = CoinView::from(&coin);
        assert_eq!(view.price_usd, "$0.0000398");
    }

    #[test]
    fn test_supply_compact_without_dollar() {
        let view = CoinView::from(&sample_coin());
        assert_eq!(view.supply, "19.02M");
    }

    #[test]
    fn test_market_cap_compact_with_dollar() {
        let view = CoinView::from(&sample_coin());
        assert_eq!(view.market_cap_usd, "$563.43B");
    }

    #[test]
    fn test_absent_quantities_render_sentinel() {
        let mut coin = sample_coin();
        coin.supply = None;
        coin.market_cap_usd = None;
        coin.change_percent_24_hr = None;
        let view = CoinView::from(&coin);
        assert_eq!(view.supply, "N/A");
        assert_eq!(view.market_cap_usd, "N/A");
        assert_eq!(view.change_percent_24_hr, "N/A");
    }

    #[test]
    fn test_zero_supply_and_market_cap_render_sentinel() {
        let mut coin = sample_coin();
        coin.supply = Some(Decimal::ZERO);
        coin.market_cap_usd = Some(Decimal::ZERO);
        let view = CoinView::from(&coin);
        assert_eq!(view.supply, "N/A");
        assert_eq!(view.market_cap_usd, "N/A");
    }

    #[test]
    fn test_change_percent_two_places() {
        let view = CoinView::from(&sample_coin());
        assert_eq!(view.change_percent_24_hr, "4.27%");
    }

    #[test]
    fn test_genuine_minus_one_percent_renders() {
        let mut coin = sample_coin();
        coin.change_percent_24_hr = Some(-1.0);
        let view = CoinView::from(&coin);
        assert_eq!(view.change_percent_24_hr, "-1.00%");
    }
}
