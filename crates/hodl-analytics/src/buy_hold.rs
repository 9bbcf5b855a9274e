//! 바이 앤 홀드 수익률/자산 곡선 계산.
//!
//! 첫 캔들 종가에 자본 1단위를 투자해 기간 끝까지 보유했을 때의
//! 일별 수익률, 누적 자산 곡선, 요약 지표를 계산합니다.
//!
//! 가격은 `Decimal`로 들어오지만 수익률 시계열은 기준 구현과 동일한
//! 부동소수점 의미론을 따르기 위해 `f64`로 계산합니다.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hodl_core::CandleSeries;

/// 수익률 계산 에러.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// 수익률 하나를 계산하기에도 캔들이 부족함
    #[error("Insufficient data: need at least 2 candles, got {got}")]
    InsufficientData {
        /// 전달된 캔들 수
        got: usize,
    },
}

/// 요약 지표.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// 첫 캔들 종가
    pub start_price: Decimal,
    /// 마지막 캔들 종가
    pub end_price: Decimal,
    /// 총 수익률 (`equity[last] - 1`, 비율)
    pub total_return: f64,
}

/// 바이 앤 홀드 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyHoldReport {
    /// 일별 수익률. 길이는 `캔들 수 - 1`이며 `returns[i]`는
    /// `close[i+1] / close[i] - 1`입니다. 첫 캔들의 수익률은
    /// 정의되지 않으므로 시퀀스에 존재하지 않습니다 (0이 아님).
    pub returns: Vec<f64>,
    /// 누적 자산 곡선. 길이는 캔들 수와 같고 `equity[0] = 1.0`,
    /// `equity[i] = equity[i-1] * (1 + returns[i-1])`입니다.
    pub equity: Vec<f64>,
    /// 요약 지표
    pub summary: Summary,
}

/// 캔들 시리즈에서 바이 앤 홀드 결과를 계산합니다.
///
/// 직전 종가를 들고 가는 단일 선형 패스이며 순수 함수입니다.
///
/// # 에러
///
/// 캔들이 2개 미만이면 `ComputeError::InsufficientData`를 반환하고
/// 부분 결과를 만들지 않습니다.
///
/// # 알려진 날카로운 경계
///
/// 직전 종가가 0 이하인 경우 나눗셈을 가드하지 않습니다. 그 결과로
/// 생기는 비유한값(`inf`/`NaN`)은 자산 곡선과 총 수익률까지 그대로
/// 전파됩니다. 기준 구현의 동작과 동일합니다.
pub fn compute(series: &CandleSeries) -> Result<BuyHoldReport, ComputeError> {
    if series.len() < 2 {
        return Err(ComputeError::InsufficientData { got: series.len() });
    }

    let closes: Vec<f64> = series
        .iter()
        .map(|c| c.close.to_f64().unwrap_or(f64::NAN))
        .collect();

    let mut returns = Vec::with_capacity(closes.len() - 1);
    let mut equity = Vec::with_capacity(closes.len());

    let mut running = 1.0_f64;
    equity.push(running);

    let mut prev_close = closes[0];
    for &close in &closes[1..] {
        let daily_return = close / prev_close - 1.0;
        running *= 1.0 + daily_return;
        returns.push(daily_return);
        equity.push(running);
        prev_close = close;
    }

    let summary = Summary {
        start_price: series.first().map(|c| c.close).unwrap_or(Decimal::ZERO),
        end_price: series.last().map(|c| c.close).unwrap_or(Decimal::ZERO),
        total_return: running - 1.0,
    };

    Ok(BuyHoldReport {
        returns,
        equity,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hodl_core::Candle;
    use rust_decimal_macros::dec;

    fn series_from_closes(closes: &[Decimal]) -> CandleSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let open_time = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i as i64);
                Candle::new(open_time, close, close, close, close, dec!(1000))
            })
            .collect();
        CandleSeries::new(candles).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_three_rising_days() {
        // 100 → 110 → 121: 매일 +10%
        let series = series_from_closes(&[dec!(100), dec!(110), dec!(121)]);
        let report = compute(&series).unwrap();

        assert_eq!(report.returns.len(), 2);
        assert_close(report.returns[0], 0.10);
        assert_close(report.returns[1], 0.10);

        assert_eq!(report.equity.len(), 3);
        assert_eq!(report.equity[0], 1.0);
        assert_close(report.equity[1], 1.10);
        assert_close(report.equity[2], 1.21);

        assert_eq!(report.summary.start_price, dec!(100));
        assert_eq!(report.summary.end_price, dec!(121));
        assert_close(report.summary.total_return, 0.21);
    }

    #[test]
    fn test_losing_period() {
        // 100 → 90: -10%
        let series = series_from_closes(&[dec!(100), dec!(90)]);
        let report = compute(&series).unwrap();

        assert_eq!(report.equity[0], 1.0);
        assert_close(report.equity[1], 0.90);
        assert_close(report.summary.total_return, -0.10);
    }

    #[test]
    fn test_empty_series_is_insufficient() {
        let err = compute(&CandleSeries::empty()).unwrap_err();
        assert!(matches!(err, ComputeError::InsufficientData { got: 0 }));
    }

    #[test]
    fn test_single_candle_is_insufficient() {
        let series = series_from_closes(&[dec!(100)]);
        let err = compute(&series).unwrap_err();
        assert!(matches!(err, ComputeError::InsufficientData { got: 1 }));
    }

    #[test]
    fn test_total_return_matches_last_equity() {
        let series = series_from_closes(&[dec!(50), dec!(75), dec!(60), dec!(90)]);
        let report = compute(&series).unwrap();
        assert_eq!(
            report.summary.total_return,
            report.equity.last().unwrap() - 1.0
        );
    }

    #[test]
    fn test_idempotent() {
        let series = series_from_closes(&[dec!(100), dec!(103), dec!(99), dec!(110)]);
        let first = compute(&series).unwrap();
        let second = compute(&series).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_previous_close_propagates_non_finite() {
        let series = series_from_closes(&[dec!(0), dec!(10), dec!(20)]);
        let report = compute(&series).unwrap();

        // 0 종가로 나눈 수익률은 가드 없이 전파됨
        assert!(report.returns[0].is_infinite());
        assert!(!report.equity[1].is_finite());
        assert!(!report.summary.total_return.is_finite());
    }
}
