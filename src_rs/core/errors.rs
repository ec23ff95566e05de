// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 입력 형태/파라미터/파일/직렬화/준비 상태 오류를 명시적으로 구분해 호출자에 전달한다.
// - 상관 거리의 0-분산 케이스는 오류가 아니라 거리 함수 내부 정책으로 처리한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/clustering.rs
// - src_rs/index/tsv_loader.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("입력 벡터 형태가 어휘 길이와 다릅니다: {0}")]
    InputShape(String),
    #[error("클러스터링 파라미터가 유효하지 않습니다: {0}")]
    InvalidParameter(String),
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("파일 입출력에 실패했습니다: {0}")]
    Io(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error("클러스터 결과를 찾을 수 없습니다: {0}")]
    NotReady(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
