//! # hodl Core
//!
//! 바이 앤 홀드 백테스터의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 심볼 정의 (기준/호가 자산 쌍)
//! - 일봉 캔들 및 캔들 시리즈
//! - 로깅 인프라

pub mod logging;
pub mod types;

pub use logging::*;
pub use types::*;
