//! 거래소 시장 데이터 연결.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - `DailyCandleProvider` trait: 통합 일봉 데이터 인터페이스
//! - KuCoin 커넥터 (공개 REST API)
//! - `ExchangeId`: 닫힌 거래소 레지스트리
//! - 요청 인자 단위 메모이제이션 캐시
//! - `FetchError`: 데이터 소스 에러 분류

pub mod cache;
pub mod connector;
pub mod error;
pub mod registry;
pub mod traits;

pub use cache::{FetchKey, MemoizedProvider};
pub use connector::kucoin::{KucoinClient, KucoinConfig};
pub use error::{FetchError, FetchResult};
pub use registry::{build_provider, ExchangeId};
pub use traits::DailyCandleProvider;
