// 목적:
// - 클러스터링 실행 파라미터와 서비스 설정 페이로드를 정의한다.
//
// 설명:
// - JSON 페이로드로 입력받으며 누락된 필드는 기본값(k=5, max_iterations=20)을 사용한다.
// - 파라미터 검증은 알고리즘 시작 전에 수행되어 잘못된 값은 즉시 거부된다.
// - k가 문서 수보다 큰 경우는 기본적으로 거부하고, allow_sparse_clusters가 켜진 경우에만
//   빈 클러스터를 포함한 결과를 허용한다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/clustering.rs
// - src_rs/core/service.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};

pub const DEFAULT_CLUSTER_COUNT: usize = 5;
pub const DEFAULT_MAX_ITERATIONS: usize = 20;
pub const DEFAULT_DATA_PATH: &str = "./blogdata.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterParams {
    #[serde(default = "default_cluster_count")]
    pub k: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub allow_sparse_clusters: bool,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            k: DEFAULT_CLUSTER_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
            allow_sparse_clusters: false,
        }
    }
}

impl ClusterParams {
    pub fn new(k: usize, max_iterations: usize) -> Self {
        Self {
            k,
            max_iterations,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sparse_clusters(mut self, allow: bool) -> Self {
        self.allow_sparse_clusters = allow;
        self
    }

    /// 문서 수와 무관한 하한(k >= 1, max_iterations >= 1)만 검증한다.
    pub fn check_bounds(&self) -> CoreResult<()> {
        if self.k == 0 {
            return Err(CoreError::InvalidParameter(
                "k는 1 이상이어야 합니다".to_string(),
            ));
        }

        if self.max_iterations == 0 {
            return Err(CoreError::InvalidParameter(
                "max_iterations는 1 이상이어야 합니다".to_string(),
            ));
        }

        Ok(())
    }

    /// 문서 수를 기준으로 파라미터를 검증한다.
    pub fn validate(&self, document_count: usize) -> CoreResult<()> {
        self.check_bounds()?;

        if document_count == 0 {
            return Err(CoreError::InvalidParameter(
                "클러스터링할 문서가 없습니다".to_string(),
            ));
        }

        if self.k > document_count && !self.allow_sparse_clusters {
            return Err(CoreError::InvalidParameter(format!(
                "k가 문서 수보다 큽니다: k={}, documents={}",
                self.k, document_count
            )));
        }

        Ok(())
    }
}

fn default_cluster_count() -> usize {
    DEFAULT_CLUSTER_COUNT
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

/// 파일 적재부터 클러스터링까지 수행하는 서비스의 설정이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfigPayload {
    #[serde(default = "default_data_path")]
    pub data_path: String,
    #[serde(flatten)]
    pub params: ClusterParams,
}

impl Default for ServiceConfigPayload {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            params: ClusterParams::default(),
        }
    }
}

impl ServiceConfigPayload {
    /// JSON 문자열에서 설정을 읽는다. 빈 문자열이면 기본값을 사용한다.
    pub fn from_json(payload_json: &str) -> CoreResult<Self> {
        if payload_json.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(payload_json).map_err(|error| {
            CoreError::Serialization(format!("서비스 설정 JSON 파싱에 실패했습니다: {}", error))
        })?;

        if config.data_path.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "data_path는 비어 있을 수 없습니다".to_string(),
            ));
        }

        config.params.check_bounds()?;
        Ok(config)
    }
}
