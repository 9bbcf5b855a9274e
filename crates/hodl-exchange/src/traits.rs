//! 시장 데이터 제공자 trait 정의.

use async_trait::async_trait;
use chrono::NaiveDate;
use hodl_core::{CandleSeries, Symbol};

use crate::error::FetchResult;

/// 거래소 중립적 일봉 데이터 제공자 trait.
///
/// 구현체는 `[start, end]` 범위(양끝 포함)의 일봉만 담긴,
/// 타임스탬프 오름차순 시리즈를 반환해야 합니다.
#[async_trait]
pub trait DailyCandleProvider: Send + Sync {
    /// 일봉 캔들 데이터 조회.
    ///
    /// # 인자
    /// * `symbol` - 거래 쌍 (예: SOL/USDT)
    /// * `start` - 시작 거래일 (포함)
    /// * `end` - 종료 거래일 (포함)
    async fn fetch_daily_candles(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<CandleSeries>;

    /// 거래소 이름 반환.
    fn exchange_name(&self) -> &str;
}

#[async_trait]
impl<P: DailyCandleProvider + ?Sized> DailyCandleProvider for std::sync::Arc<P> {
    async fn fetch_daily_candles(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<CandleSeries> {
        (**self).fetch_daily_candles(symbol, start, end).await
    }

    fn exchange_name(&self) -> &str {
        (**self).exchange_name()
    }
}
