//! Conversion: coin wire responses → domain types (TryFrom + validation).

use super::wire;
use super::{ChartPoint, Coin, CoinDetails, CoinSummary, CoinValidationError, MarketChart};
use crate::shared::{decimal_from_f64, CoinId};
use chrono::DateTime;
use rust_decimal::Decimal;

fn decimal_field(
    id: &CoinId,
    name: &'static str,
    value: Option<f64>,
) -> Result<Decimal, CoinValidationError> {
    match value {
        // Backend omits market numbers for dead listings; treat as zero.
        None => Ok(Decimal::ZERO),
        Some(v) => decimal_from_f64(v)
            .map_err(|e| CoinValidationError::InvalidNumber(id.clone(), name, e)),
    }
}

impl TryFrom<wire::CoinResponse> for Coin {
    type Error = CoinValidationError;

    fn try_from(source: wire::CoinResponse) -> Result<Self, Self::Error> {
        let id = CoinId::from(source.id);
        Ok(Coin {
            current_price: decimal_field(&id, "current_price", source.current_price)?,
            market_cap: decimal_field(&id, "market_cap", source.market_cap)?,
            total_volume: decimal_field(&id, "total_volume", source.total_volume)?,
            high_24h: decimal_field(&id, "high_24h", source.high_24h)?,
            low_24h: decimal_field(&id, "low_24h", source.low_24h)?,
            price_change_24h: decimal_field(&id, "price_change_24h", source.price_change_24h)?,
            price_change_percentage_24h: source.price_change_percentage_24h.unwrap_or(0.0),
            market_cap_rank: source.market_cap_rank,
            symbol: source.symbol,
            name: source.name,
            image: source.image,
            id,
        })
    }
}

impl TryFrom<wire::CoinDetailsResponse> for CoinDetails {
    type Error = CoinValidationError;

    fn try_from(source: wire::CoinDetailsResponse) -> Result<Self, Self::Error> {
        let id = CoinId::from(source.id);
        let md = source.market_data;

        let usd = |map: &std::collections::HashMap<String, f64>| map.get("usd").copied();
        let current_price = usd(&md.current_price)
            .ok_or_else(|| CoinValidationError::MissingUsdQuote(id.clone()))?;

        Ok(CoinDetails {
            current_price: decimal_field(&id, "current_price", Some(current_price))?,
            market_cap: decimal_field(&id, "market_cap", usd(&md.market_cap))?,
            high_24h: decimal_field(&id, "high_24h", usd(&md.high_24h))?,
            low_24h: decimal_field(&id, "low_24h", usd(&md.low_24h))?,
            price_change_24h: decimal_field(&id, "price_change_24h", md.price_change_24h)?,
            price_change_percentage_24h: md.price_change_percentage_24h.unwrap_or(0.0),
            total_supply: match md.total_supply {
                Some(v) => Some(decimal_field(&id, "total_supply", Some(v))?),
                None => None,
            },
            description: source.description.and_then(|d| d.en),
            symbol: source.symbol,
            name: source.name,
            image: source.image.large,
            id,
        })
    }
}

impl From<wire::SearchCoinResponse> for CoinSummary {
    fn from(source: wire::SearchCoinResponse) -> Self {
        CoinSummary {
            id: CoinId::from(source.id),
            name: source.name,
            symbol: source.symbol,
            market_cap_rank: source.market_cap_rank,
            image: source.large,
        }
    }
}

impl TryFrom<(CoinId, u32, wire::MarketChartResponse)> for MarketChart {
    type Error = CoinValidationError;

    fn try_from(
        value: (CoinId, u32, wire::MarketChartResponse),
    ) -> Result<Self, Self::Error> {
        let (coin_id, interval_days, source) = value;
        let mut points = Vec::with_capacity(source.prices.len());
        for [time_ms, price] in source.prices {
            // `as i64` maps NaN to 0 and saturates infinities, turning
            // garbage into an in-range epoch; reject before the cast.
            if !time_ms.is_finite() {
                return Err(CoinValidationError::InvalidTimestamp(time_ms));
            }
            let time = DateTime::from_timestamp_millis(time_ms as i64)
                .ok_or(CoinValidationError::InvalidTimestamp(time_ms))?;
            points.push(ChartPoint { time, price });
        }
        Ok(MarketChart {
            coin_id,
            interval_days,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_response_to_domain() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://img.example/btc.png",
            "current_price": 65123.45,
            "market_cap": 1280000000000.0,
            "market_cap_rank": 1,
            "total_volume": 31000000000.0,
            "high_24h": 66000.0,
            "low_24h": 64000.0,
            "price_change_24h": -512.3,
            "price_change_percentage_24h": -0.78
        }"#;
        let wire: wire::CoinResponse = serde_json::from_str(json).unwrap();
        let coin: Coin = wire.try_into().unwrap();
        assert_eq!(coin.id.as_str(), "bitcoin");
        assert_eq!(coin.current_price.to_string(), "65123.45");
        assert_eq!(coin.market_cap_rank, Some(1));
        assert!(coin.price_change_24h.is_sign_negative());
    }

    #[test]
    fn test_missing_market_numbers_default_to_zero() {
        let json = r#"{
            "id": "deadcoin",
            "symbol": "ded",
            "name": "Dead Coin",
            "image": "https://img.example/ded.png",
            "current_price": null,
            "market_cap": null,
            "market_cap_rank": null,
            "total_volume": null,
            "high_24h": null,
            "low_24h": null,
            "price_change_24h": null,
            "price_change_percentage_24h": null
        }"#;
        let wire: wire::CoinResponse = serde_json::from_str(json).unwrap();
        let coin: Coin = wire.try_into().unwrap();
        assert_eq!(coin.current_price, Decimal::ZERO);
        assert_eq!(coin.price_change_percentage_24h, 0.0);
    }

    #[test]
    fn test_details_require_usd_quote() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": {"large": "https://img.example/btc.png"},
            "description": {"en": "Digital gold."},
            "market_data": {
                "current_price": {"eur": 60000.0},
                "market_cap": {},
                "high_24h": {},
                "low_24h": {},
                "price_change_24h": null,
                "price_change_percentage_24h": null,
                "total_supply": 21000000.0
            }
        }"#;
        let wire: wire::CoinDetailsResponse = serde_json::from_str(json).unwrap();
        let err = CoinDetails::try_from(wire).unwrap_err();
        assert!(matches!(err, CoinValidationError::MissingUsdQuote(_)));
    }

    #[test]
    fn test_market_chart_rejects_non_finite_timestamp() {
        let wire = wire::MarketChartResponse {
            prices: vec![[f64::NAN, 35000.5]],
        };
        let err = MarketChart::try_from((CoinId::from("bitcoin"), 7, wire)).unwrap_err();
        assert!(matches!(err, CoinValidationError::InvalidTimestamp(_)));

        let wire = wire::MarketChartResponse {
            prices: vec![[f64::INFINITY, 35000.5]],
        };
        let err = MarketChart::try_from((CoinId::from("bitcoin"), 7, wire)).unwrap_err();
        assert!(matches!(err, CoinValidationError::InvalidTimestamp(_)));
    }

    #[test]
    fn test_market_chart_conversion() {
        let json = r#"{"prices": [[1700000000000.0, 35000.5], [1700003600000.0, 35100.25]]}"#;
        let wire: wire::MarketChartResponse = serde_json::from_str(json).unwrap();
        let chart = MarketChart::try_from((CoinId::from("bitcoin"), 7, wire)).unwrap();
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].time.timestamp(), 1_700_000_000);
        assert_eq!(chart.points[1].price, 35100.25);
        assert_eq!(chart.interval_days, 7);
    }
}
