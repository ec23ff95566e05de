// 목적:
// - tracing 구독자를 설치한다.
//
// 설명:
// - RUST_LOG가 있으면 그 필터를, 없으면 blog_cluster=info를 사용한다.
// - 이미 설치된 전역 구독자가 있으면 아무 것도 하지 않는다.
//
// 참조:
// - src_rs/lib.rs

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "blog_cluster=info";

/// fmt 구독자를 한 번 설치한다. 설치되었으면 true를 반환한다.
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
