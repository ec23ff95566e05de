// 목적:
// - 클러스터링 수치 계산 계층 모듈을 선언한다.
//
// 설명:
// - 차원별 범위, 상관 거리, 중심 벡터 초기화/갱신을 분리해 순수 함수로 유지한다.
//
// 디자인 패턴:
// - 순수 함수 모듈(Pure Function Module).
//
// 참조:
// - src_rs/math/ranges.rs
// - src_rs/math/distance.rs
// - src_rs/math/centroid.rs

pub mod centroid;
pub mod distance;
pub mod ranges;
