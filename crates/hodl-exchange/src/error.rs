//! 시장 데이터 소스 에러 타입.

use thiserror::Error;

/// 시장 데이터 조회 관련 에러.
///
/// 계약상 재시도는 없습니다. 모든 변종은 단일 실행 실패로
/// 호출자에게 한 번 전달됩니다.
#[derive(Debug, Error)]
pub enum FetchError {
    /// 네트워크/연결 에러
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// 요청 한도 초과
    #[error("Rate limit exceeded")]
    RateLimited,

    /// 알 수 없는 거래소 식별자
    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    /// 해당 거래소에서 지원하지 않는 심볼
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// 파싱/역직렬화 에러
    #[error("Parse error: {0}")]
    Parse(String),

    /// 거래소 API 에러 코드
    #[error("API error {code}: {message}")]
    Api {
        /// 거래소가 반환한 에러 코드
        code: String,
        /// 거래소가 반환한 메시지
        message: String,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// 시장 데이터 작업을 위한 Result 타입.
pub type FetchResult<T> = Result<T, FetchError>;
