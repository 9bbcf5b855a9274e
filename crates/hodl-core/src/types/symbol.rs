//! 트레이딩 심볼 정의.
//!
//! 이 모듈은 거래 쌍을 나타내는 `Symbol` 타입을 정의합니다.
//! 예: 암호화폐 현물의 SOL/USDT, BTC/USDT.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 거래 가능한 상품을 나타내는 트레이딩 심볼.
///
/// 심볼은 기준 자산과 호가 자산으로 구성됩니다.
/// 사용자 입력은 "BASE/QUOTE" 형식이며, 거래소별 표기는
/// 각 커넥터가 변환합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// 기준 자산 (예: SOL, BTC)
    pub base: String,
    /// 호가 자산 (예: USDT, USDC)
    pub quote: String,
}

impl Symbol {
    /// 새 심볼을 생성합니다.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            quote: quote.into().to_uppercase(),
        }
    }

    /// "BASE/QUOTE" 형식 문자열에서 심볼을 파싱합니다.
    ///
    /// 빈 기준/호가 자산이나 구분자가 없는 입력은 `None`을 반환합니다.
    pub fn from_string(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        match parts.as_slice() {
            [base, quote] if !base.is_empty() && !quote.is_empty() => {
                Some(Self::new(*base, *quote))
            }
            _ => None,
        }
    }

    /// 표준 심볼 문자열 형식을 반환합니다.
    pub fn to_standard_string(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
