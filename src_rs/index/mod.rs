// 목적:
// - 코퍼스 적재 계층 모듈을 선언한다.
//
// 설명:
// - 행 단위 파싱 유틸과 비동기 파일 적재기를 분리해 유지보수성을 확보한다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/tsv.rs
// - src_rs/index/tsv_loader.rs

pub mod tsv;
pub mod tsv_loader;
