//! 요청 인자 단위 메모이제이션 캐시.
//!
//! 동일한 (거래소, 심볼, 시작일, 종료일) 조합의 재조회를 막는
//! 제공자 래퍼입니다. TTL과 축출 정책은 없습니다. 성공한 결과만
//! 저장하며, 캐시 수명은 래퍼의 수명(프로세스/세션)과 같습니다.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use hodl_core::{CandleSeries, Symbol};

use crate::error::FetchResult;
use crate::traits::DailyCandleProvider;

/// 캐시 키: 조회 인자 튜플.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    /// 거래소 이름
    pub exchange: String,
    /// 표준 심볼 문자열
    pub symbol: String,
    /// 시작 거래일
    pub start: NaiveDate,
    /// 종료 거래일
    pub end: NaiveDate,
}

/// 메모이제이션을 적용한 일봉 데이터 제공자.
pub struct MemoizedProvider<P> {
    inner: P,
    cache: RwLock<HashMap<FetchKey, CandleSeries>>,
}

impl<P: DailyCandleProvider> MemoizedProvider<P> {
    /// 내부 제공자를 감싸는 캐시 래퍼를 생성합니다.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// 저장된 결과 수를 반환합니다.
    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }

    fn key(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> FetchKey {
        FetchKey {
            exchange: self.inner.exchange_name().to_string(),
            symbol: symbol.to_standard_string(),
            start,
            end,
        }
    }
}

#[async_trait]
impl<P: DailyCandleProvider> DailyCandleProvider for MemoizedProvider<P> {
    async fn fetch_daily_candles(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<CandleSeries> {
        let key = self.key(symbol, start, end);

        if let Some(series) = self.cache.read().await.get(&key) {
            debug!(symbol = %symbol, %start, %end, "Cache hit for daily candles");
            return Ok(series.clone());
        }

        let series = self.inner.fetch_daily_candles(symbol, start, end).await?;
        self.cache.write().await.insert(key, series.clone());
        Ok(series)
    }

    fn exchange_name(&self) -> &str {
        self.inner.exchange_name()
    }
}
