//! 거래소 레지스트리.
//!
//! 지원 거래소는 닫힌 열거형으로 관리합니다. 문자열 식별자 파싱과
//! 제공자 생성 모두 명시적 match를 거치므로, 거래소 추가는
//! 변종 하나와 제공자 구현 하나를 추가하는 일입니다.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::connector::kucoin::{KucoinClient, KucoinConfig};
use crate::error::{FetchError, FetchResult};
use crate::traits::DailyCandleProvider;

/// 지원하는 거래소 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeId {
    /// KuCoin 현물
    Kucoin,
}

impl ExchangeId {
    /// 소문자 식별자 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Kucoin => "kucoin",
        }
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExchangeId {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kucoin" => Ok(ExchangeId::Kucoin),
            other => Err(FetchError::UnknownExchange(other.to_string())),
        }
    }
}

/// 거래소 식별자에 해당하는 일봉 데이터 제공자를 생성합니다.
pub fn build_provider(id: ExchangeId) -> FetchResult<Arc<dyn DailyCandleProvider>> {
    match id {
        ExchangeId::Kucoin => {
            let client = KucoinClient::new(KucoinConfig::default())?;
            Ok(Arc::new(client))
        }
    }
}
