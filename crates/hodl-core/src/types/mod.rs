//! 핵심 타입 모듈.

pub mod candle;
pub mod symbol;

pub use candle::{Candle, CandleSeries, SeriesError};
pub use symbol::Symbol;
