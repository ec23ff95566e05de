// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 코퍼스/설정/클러스터링/결과 서비스와 공통 오류 모델을 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/clustering.rs
// - src_rs/core/service.rs

pub mod clustering;
pub mod config;
pub mod corpus;
pub mod errors;
pub mod grouping;
pub mod logging;
pub mod service;
