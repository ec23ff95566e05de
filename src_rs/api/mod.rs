// 목적:
// - Python FFI 경계 모듈을 선언한다.
//
// 설명:
// - 상주 서비스 브릿지와 단발 실행 함수를 한 모듈에서 제공한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/cluster_bridge.rs

pub mod cluster_bridge;
