//! Conversion: AssetData → Coin (TryFrom + validation).

use super::wire;
use super::{Coin, CoinValidationError};
use crate::network::{ICONS_SUFFIX, ICONS_URL};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Identity fields must be present and non-blank. The stored value keeps its
/// original whitespace; only the blank check trims.
fn required(field: &'static str, value: Option<String>) -> Result<String, CoinValidationError> {
    let value = value.ok_or(CoinValidationError::Missing(field))?;
    if value.trim().is_empty() {
        return Err(CoinValidationError::Blank(field));
    }
    Ok(value)
}

/// Absent is fine; present-but-unparseable is a validation failure.
fn optional_decimal(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<Decimal>, CoinValidationError> {
    match value {
        None => Ok(None),
        Some(raw) => Decimal::from_str(&raw)
            .map(Some)
            .map_err(|_| CoinValidationError::InvalidDecimal { field, value: raw }),
    }
}

impl TryFrom<wire::AssetData> for Coin {
    type Error = CoinValidationError;

    fn try_from(source: wire::AssetData) -> Result<Self, Self::Error> {
        let id = required("id", source.id)?;
        let symbol = required("symbol", source.symbol)?;
        let name = required("name", source.name)?;

        let raw_price = required("priceUsd", source.price_usd)?;
        let price_usd =
            Decimal::from_str(&raw_price).map_err(|_| CoinValidationError::InvalidDecimal {
                field: "priceUsd",
                value: raw_price,
            })?;

        let supply = optional_decimal("supply", source.supply)?;
        let market_cap_usd = optional_decimal("marketCapUsd", source.market_cap_usd)?;

        let change_percent_24_hr = match source.change_percent_24_hr {
            None => None,
            Some(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|_| CoinValidationError::InvalidPercent { value: raw })?,
            ),
        };

        let image = format!("{}/{}{}", ICONS_URL, symbol.to_lowercase(), ICONS_SUFFIX);

        Ok(Coin {
            id: id.into(),
            symbol,
            name,
            supply,
            market_cap_usd,
            price_usd,
            change_percent_24_hr,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_asset_data() -> wire::AssetData {
        wire::AssetData {
            id: Some("bitcoin".to_string()),
            rank: Some("1".to_string()),
            symbol: Some("BTC".to_string()),
            name: Some("Bitcoin".to_string()),
            supply: Some("19020000".to_string()),
            max_supply: Some("21000000".to_string()),
            market_cap_usd: Some("563430000000".to_string()),
            volume_usd_24_hr: Some("12706741000".to_string()),
            price_usd: Some("50732.51".to_string()),
            change_percent_24_hr: Some("4.27".to_string()),
            vwap_24_hr: Some("50593.12".to_string()),
            explorer: Some("https://blockchain.info/".to_string()),
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_payload_converts() {
        let coin = Coin::try_from(minimal_asset_data()).unwrap();
        assert_eq!(coin.id.as_str(), "bitcoin");
        assert_eq!(coin.symbol, "BTC");
        assert_eq!(coin.name, "Bitcoin");
        assert_eq!(coin.supply, Some(dec("19020000")));
        assert_eq!(coin.market_cap_usd, Some(dec("563430000000")));
        assert_eq!(coin.price_usd, dec("50732.51"));
        assert_eq!(coin.change_percent_24_hr, Some(4.27));
    }

    #[test]
    fn test_image_url_lowercases_symbol() {
        let coin = Coin::try_from(minimal_asset_data()).unwrap();
        assert_eq!(
            coin.image,
            "https://static.coincap.io/assets/icons/btc@2x.png"
        );
    }

    #[test]
    fn test_missing_id_fails() {
        let mut data = minimal_asset_data();
        data.id = None;
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(err, CoinValidationError::Missing("id")));
    }

    #[test]
    fn test_blank_name_fails() {
        let mut data = minimal_asset_data();
        data.name = Some("   ".to_string());
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(err, CoinValidationError::Blank("name")));
    }

    #[test]
    fn test_blank_symbol_fails() {
        let mut data = minimal_asset_data();
        data.symbol = Some("".to_string());
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(err, CoinValidationError::Blank("symbol")));
    }

    #[test]
    fn test_missing_price_fails() {
        let mut data = minimal_asset_data();
        data.price_usd = None;
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(err, CoinValidationError::Missing("priceUsd")));
    }

    #[test]
    fn test_malformed_price_fails() {
        let mut data = minimal_asset_data();
        data.price_usd = Some("not-a-number".to_string());
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(
            err,
            CoinValidationError::InvalidDecimal {
                field: "priceUsd",
                ..
            }
        ));
    }

    #[test]
    fn test_absent_optionals_become_none() {
        let mut data = minimal_asset_data();
        data.supply = None;
        data.market_cap_usd = None;
        data.change_percent_24_hr = None;
        let coin = Coin::try_from(data).unwrap();
        assert_eq!(coin.supply, None);
        assert_eq!(coin.market_cap_usd, None);
        assert_eq!(coin.change_percent_24_hr, None);
    }

    #[test]
    fn test_malformed_supply_fails() {
        let mut data = minimal_asset_data();
        data.supply = Some("1.2.3".to_string());
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(
            err,
            CoinValidationError::InvalidDecimal { field: "supply", .. }
        ));
    }

    #[test]
    fn test_malformed_change_percent_fails() {
        let mut data = minimal_asset_data();
        data.change_percent_24_hr = Some("".to_string());
        let err = Coin::try_from(data).unwrap_err();
        assert!(matches!(err, CoinValidationError::InvalidPercent { .. }));
    }

    #[test]
    fn test_identity_fields_stored_untrimmed() {
        let mut data = minimal_asset_data();
        data.name = Some(" Bitcoin ".to_string());
        let coin = Coin::try_from(data).unwrap();
        assert_eq!(coin.name, " Bitcoin ");
    }

    #[test]
    fn test_one_bad_entry_fails_list() {
        let mut bad = minimal_asset_data();
        bad.price_usd = None;
        let entries = vec![minimal_asset_data(), bad, minimal_asset_data()];

        let result: Result<Vec<Coin>, _> = entries.into_iter().map(Coin::try_from).collect();
        assert!(matches!(
            result.unwrap_err(),
            CoinValidationError::Missing("priceUsd")
        ));
    }
}
