//! 거래소별 REST 커넥터 구현.

pub mod kucoin;
