//! 압력/온도/밀도 단위 변환 엔진. CLI 와 GUI 가 같은 라이브러리를 사용한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod form;
pub mod quantity;
pub mod ui_cli;
pub mod units;
