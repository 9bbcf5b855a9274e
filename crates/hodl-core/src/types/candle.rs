//! 일봉 캔들 및 캔들 시리즈.
//!
//! 이 모듈은 시장 데이터 타입을 정의합니다:
//! - `Candle` - 하루치 OHLCV 데이터
//! - `CandleSeries` - 타임스탬프 오름차순 불변식을 가진 캔들 시퀀스

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 캔들 시리즈 불변식 위반 에러.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// 타임스탬프가 순증가하지 않음
    #[error("Candles out of order at index {index}: {prev} >= {next}")]
    OutOfOrder {
        /// 위반이 발견된 인덱스
        index: usize,
        /// 직전 캔들 시각
        prev: DateTime<Utc>,
        /// 현재 캔들 시각
        next: DateTime<Utc>,
    },
}

/// 하루치 OHLCV 캔들 데이터.
///
/// 한 번 조회된 캔들은 불변입니다. 가격과 거래량은 호가 정밀도를
/// 보존하기 위해 `Decimal`로 표현합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// 캔들 시작 시간 (00:00 UTC)
    pub open_time: DateTime<Utc>,
    /// 시가
    pub open: Decimal,
    /// 고가
    pub high: Decimal,
    /// 저가
    pub low: Decimal,
    /// 종가
    pub close: Decimal,
    /// 거래량 (기준 자산 단위)
    pub volume: Decimal,
}

impl Candle {
    /// 새 캔들을 생성합니다.
    pub fn new(
        open_time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// 캔들이 속한 거래일을 반환합니다.
    pub fn date(&self) -> NaiveDate {
        self.open_time.date_naive()
    }
}

/// 타임스탬프 오름차순이 보장된 캔들 시퀀스.
///
/// 불변식: 비어있지 않으면 `open_time`이 순증가합니다.
/// 생성 시점에 검증되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries(Vec<Candle>);

impl CandleSeries {
    /// 캔들 목록에서 시리즈를 생성합니다.
    ///
    /// 타임스탬프가 순증가하지 않으면 `SeriesError::OutOfOrder`를 반환합니다.
    pub fn new(candles: Vec<Candle>) -> Result<Self, SeriesError> {
        for (i, pair) in candles.windows(2).enumerate() {
            if pair[0].open_time >= pair[1].open_time {
                return Err(SeriesError::OutOfOrder {
                    index: i + 1,
                    prev: pair[0].open_time,
                    next: pair[1].open_time,
                });
            }
        }
        Ok(Self(candles))
    }

    /// 빈 시리즈를 생성합니다.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// 캔들 슬라이스를 반환합니다.
    pub fn candles(&self) -> &[Candle] {
        &self.0
    }

    /// 캔들 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 시리즈가 비어있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 첫 캔들을 반환합니다.
    pub fn first(&self) -> Option<&Candle> {
        self.0.first()
    }

    /// 마지막 캔들을 반환합니다.
    pub fn last(&self) -> Option<&Candle> {
        self.0.last()
    }

    /// 캔들 반복자를 반환합니다.
    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.0.iter()
    }

    /// 종가 시퀀스를 반환합니다.
    pub fn closes(&self) -> Vec<Decimal> {
        self.0.iter().map(|c| c.close).collect()
    }

    /// `[start, end]` 범위(양끝 포함)에 속하는 캔들만 남깁니다.
    ///
    /// 원본은 순서가 보장되어 있으므로 결과도 불변식을 유지합니다.
    pub fn filter_range(&self, start: NaiveDate, end: NaiveDate) -> CandleSeries {
        let filtered = self
            .0
            .iter()
            .filter(|c| {
                let date = c.date();
                date >= start && date <= end
            })
            .cloned()
            .collect();
        Self(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn candle_at(day: u32, close: Decimal) -> Candle {
        let open_time = Utc.with_ymd_and_hms(2023, 1, day, 0, 0, 0).unwrap();
        Candle::new(open_time, close, close, close, close, dec!(1000))
    }

    #[test]
    fn test_series_accepts_ascending() {
        let series = CandleSeries::new(vec![
            candle_at(1, dec!(100)),
            candle_at(2, dec!(110)),
            candle_at(3, dec!(121)),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![dec!(100), dec!(110), dec!(121)]);
    }

    #[test]
    fn test_series_rejects_out_of_order() {
        let result = CandleSeries::new(vec![candle_at(2, dec!(100)), candle_at(1, dec!(90))]);
        assert!(matches!(result, Err(SeriesError::OutOfOrder { index: 1, .. })));
    }

    #[test]
    fn test_series_rejects_duplicate_timestamp() {
        let result = CandleSeries::new(vec![candle_at(1, dec!(100)), candle_at(1, dec!(90))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_range_inclusive() {
        let series = CandleSeries::new(vec![
            candle_at(1, dec!(100)),
            candle_at(2, dec!(110)),
            candle_at(3, dec!(121)),
            candle_at(4, dec!(130)),
        ])
        .unwrap();

        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        let filtered = series.filter_range(start, end);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.first().unwrap().close, dec!(110));
        assert_eq!(filtered.last().unwrap().close, dec!(121));
    }

    #[test]
    fn test_empty_series() {
        let series = CandleSeries::empty();
        assert!(series.is_empty());
        assert!(series.first().is_none());
        assert!(series.closes().is_empty());
    }
}
