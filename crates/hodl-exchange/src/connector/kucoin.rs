//! KuCoin 거래소 커넥터.
//!
//! KuCoin 공개 REST API로 일봉 OHLCV 캔들을 조회합니다.
//! 공개 엔드포인트만 사용하므로 자격증명이 필요 없습니다.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info};

use hodl_core::{Candle, CandleSeries, Symbol};

use crate::error::{FetchError, FetchResult};
use crate::traits::DailyCandleProvider;

/// 한 번의 조회에서 요청하는 일봉 최대 개수.
pub const MAX_DAILY_CANDLES: usize = 400;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

// ============================================================================
// 설정
// ============================================================================

/// KuCoin 클라이언트 설정.
#[derive(Debug, Clone)]
pub struct KucoinConfig {
    /// REST API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for KucoinConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.kucoin.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl KucoinConfig {
    /// 기본 URL을 변경한 설정을 생성합니다 (테스트용).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ============================================================================
// API 응답 타입
// ============================================================================

/// KuCoin 공통 응답 봉투.
#[derive(Debug, Deserialize)]
struct KucoinEnvelope<T> {
    code: String,
    #[serde(default)]
    msg: Option<String>,
    data: Option<T>,
}

/// 일봉 캔들 한 행.
///
/// KuCoin은 모든 수치를 문자열로, 최신 캔들부터 내림차순으로 반환합니다.
/// 행 순서: [시각(초), 시가, 종가, 고가, 저가, 거래량, 거래대금]
#[derive(Debug, Deserialize)]
struct KucoinCandle(String, String, String, String, String, String, String);

// ============================================================================
// 클라이언트
// ============================================================================

/// KuCoin 공개 REST API 클라이언트.
pub struct KucoinClient {
    config: KucoinConfig,
    client: Client,
}

impl KucoinClient {
    /// 새 클라이언트를 생성합니다.
    pub fn new(config: KucoinConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// 기본 설정으로 클라이언트를 생성합니다.
    pub fn with_defaults() -> FetchResult<Self> {
        Self::new(KucoinConfig::default())
    }

    /// 심볼을 KuCoin 표기로 변환합니다 (SOL/USDT → SOL-USDT).
    fn to_kucoin_symbol(symbol: &Symbol) -> String {
        format!("{}-{}", symbol.base, symbol.quote)
    }

    /// 공개 GET 요청을 수행하고 응답 봉투를 해석합니다.
    async fn public_get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> FetchResult<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }

        let envelope: KucoinEnvelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => {
                error!("Failed to parse response: {} - Body: {}", e, body);
                return Err(FetchError::Parse(e.to_string()));
            }
            Err(_) => {
                // 봉투 없는 에러 응답은 HTTP 상태로 분류
                return Err(FetchError::Api {
                    code: status.as_u16().to_string(),
                    message: body,
                });
            }
        };

        if envelope.code == "200000" {
            envelope
                .data
                .ok_or_else(|| FetchError::Parse("Missing data field in response".to_string()))
        } else {
            Err(Self::map_error_code(
                &envelope.code,
                envelope.msg.as_deref().unwrap_or(""),
            ))
        }
    }

    /// KuCoin 에러 코드를 `FetchError`로 변환합니다.
    fn map_error_code(code: &str, message: &str) -> FetchError {
        match code {
            "429000" => FetchError::RateLimited,
            _ => FetchError::Api {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// 문자열 필드를 Decimal로 파싱합니다.
    fn parse_decimal(s: &str) -> FetchResult<Decimal> {
        s.parse::<Decimal>()
            .map_err(|e| FetchError::Parse(format!("Invalid decimal '{}': {}", s, e)))
    }

    /// 캔들 행을 도메인 캔들로 변환합니다.
    fn to_candle(row: &KucoinCandle) -> FetchResult<Candle> {
        let secs = row
            .0
            .parse::<i64>()
            .map_err(|e| FetchError::Parse(format!("Invalid timestamp '{}': {}", row.0, e)))?;
        let open_time = DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| FetchError::Parse(format!("Timestamp out of range: {}", secs)))?;

        Ok(Candle::new(
            open_time,
            Self::parse_decimal(&row.1)?,
            Self::parse_decimal(&row.3)?,
            Self::parse_decimal(&row.4)?,
            Self::parse_decimal(&row.2)?,
            Self::parse_decimal(&row.5)?,
        ))
    }

    /// `[start, end]` 범위의 일봉을 조회합니다.
    ///
    /// 요청 구간은 시작일 00:00 UTC에 고정되며 최대
    /// [`MAX_DAILY_CANDLES`]개의 일봉으로 제한됩니다. 거래소 응답을
    /// 오름차순으로 정렬한 뒤 범위로 필터링해 반환합니다.
    pub async fn get_daily_candles(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<CandleSeries> {
        let kucoin_symbol = Self::to_kucoin_symbol(symbol);
        let start_at = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        // endAt은 열린 끝이므로 종료일 다음 자정까지 요청
        let end_at = end
            .succ_opt()
            .map(|d| d.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp())
            .unwrap_or(i64::MAX)
            .min(start_at + MAX_DAILY_CANDLES as i64 * SECS_PER_DAY);

        info!(
            symbol = %symbol,
            %start,
            %end,
            "Fetching daily candles from KuCoin"
        );

        let rows: Vec<KucoinCandle> = self
            .public_get(
                "/api/v1/market/candles",
                &[
                    ("symbol", kucoin_symbol),
                    ("type", "1day".to_string()),
                    ("startAt", start_at.to_string()),
                    ("endAt", end_at.to_string()),
                ],
            )
            .await
            .map_err(|e| match e {
                // KuCoin은 미지원 심볼을 파라미터 에러 코드로 알려줌
                FetchError::Api { code, .. } if code == "400100" || code == "404000" => {
                    FetchError::SymbolNotFound(symbol.to_string())
                }
                other => other,
            })?;

        let mut candles = rows
            .iter()
            .map(Self::to_candle)
            .collect::<FetchResult<Vec<Candle>>>()?;

        // 최신 캔들부터 오므로 오름차순으로 정렬
        candles.sort_by_key(|c| c.open_time);
        candles.truncate(MAX_DAILY_CANDLES);

        let series =
            CandleSeries::new(candles).map_err(|e| FetchError::Parse(e.to_string()))?;
        let filtered = series.filter_range(start, end);

        debug!(
            symbol = %symbol,
            fetched = series.len(),
            in_range = filtered.len(),
            "KuCoin candles fetched"
        );

        Ok(filtered)
    }
}

// ============================================================================
// 제공자 구현
// ============================================================================

#[async_trait]
impl DailyCandleProvider for KucoinClient {
    async fn fetch_daily_candles(
        &self,
        symbol: &Symbol,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FetchResult<CandleSeries> {
        self.get_daily_candles(symbol, start, end).await
    }

    fn exchange_name(&self) -> &str {
        "KuCoin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kucoin_symbol() {
        let symbol = Symbol::new("SOL", "USDT");
        assert_eq!(KucoinClient::to_kucoin_symbol(&symbol), "SOL-USDT");
    }

    #[test]
    fn test_to_candle_maps_row_order() {
        // [시각, 시가, 종가, 고가, 저가, 거래량, 거래대금]
        let row = KucoinCandle(
            "1672531200".to_string(),
            "10.0".to_string(),
            "12.0".to_string(),
            "13.0".to_string(),
            "9.5".to_string(),
            "1000".to_string(),
            "11000".to_string(),
        );

        let candle = KucoinClient::to_candle(&row).unwrap();
        assert_eq!(candle.open.to_string(), "10.0");
        assert_eq!(candle.close.to_string(), "12.0");
        assert_eq!(candle.high.to_string(), "13.0");
        assert_eq!(candle.low.to_string(), "9.5");
        assert_eq!(
            candle.date(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_to_candle_rejects_garbage() {
        let row = KucoinCandle(
            "not-a-timestamp".to_string(),
            "10".to_string(),
            "12".to_string(),
            "13".to_string(),
            "9".to_string(),
            "1000".to_string(),
            "11000".to_string(),
        );
        assert!(matches!(
            KucoinClient::to_candle(&row),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn test_map_error_code() {
        assert!(matches!(
            KucoinClient::map_error_code("429000", "Too Many Requests"),
            FetchError::RateLimited
        ));
        assert!(matches!(
            KucoinClient::map_error_code("500000", "Internal error"),
            FetchError::Api { .. }
        ));
    }
}
