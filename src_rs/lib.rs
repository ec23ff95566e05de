#![allow(non_local_definitions)]

// 목적:
// - Blog Cluster Rust 모듈의 진입점을 제공한다.
//
// 설명:
// - 코어(core/index/math)는 순수 Rust 라이브러리로 사용할 수 있다.
// - `python` 기능을 켜면 pyo3 확장 모듈 `_blog_cluster`가 함께 빌드된다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/index/math).
//
// 참조:
// - src_rs/api/cluster_bridge.rs
// - src_rs/core/clustering.rs

#[cfg(feature = "python")]
pub mod api;
pub mod core;
pub mod index;
pub mod math;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;

#[cfg(feature = "python")]
#[pymodule]
fn _blog_cluster(m: &Bound<'_, PyModule>) -> PyResult<()> {
    crate::core::logging::init_logging();
    m.add_class::<api::cluster_bridge::PyClusterBridge>()?;
    m.add_function(wrap_pyfunction!(api::cluster_bridge::cluster_once, m)?)?;
    m.add_function(wrap_pyfunction!(api::cluster_bridge::cluster_matrix, m)?)?;
    Ok(())
}
