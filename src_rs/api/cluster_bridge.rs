// 목적:
// - Python에서 호출 가능한 클러스터링 브릿지를 제공한다.
//
// 설명:
// - ClusterBridge는 tokio 런타임과 ClusterService를 소유하며 생성 시 적재+클러스터링을 시작한다.
// - clusters()는 가장 최근 결과를 JSON 문자열로 반환하고, 아직 없으면 LookupError를 던진다.
// - cluster_once/cluster_matrix는 메모리 상의 입력으로 한 번 실행하고 결과 JSON을 반환한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/service.rs
// - src_rs/core/clustering.rs

use numpy::PyReadonlyArray2;
use pyo3::exceptions::{PyLookupError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tokio::runtime::{Builder, Runtime};

use crate::core::clustering::{
    execute_clustering, execute_request, ClusterRequestPayload, ClusterResultPayload,
};
use crate::core::config::{ClusterParams, ServiceConfigPayload};
use crate::core::corpus::{Corpus, Document};
use crate::core::errors::CoreError;
use crate::core::service::ClusterService;

/// Python에 노출되는 클러스터링 브릿지 클래스다.
#[pyclass(name = "ClusterBridge")]
pub struct PyClusterBridge {
    runtime: Runtime,
    service: ClusterService,
}

#[pymethods]
impl PyClusterBridge {
    /// 설정 JSON으로 서비스를 만들고 백그라운드 클러스터링을 시작한다.
    #[new]
    #[pyo3(signature = (config_json=None))]
    pub fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = ServiceConfigPayload::from_json(config_json.unwrap_or_default())
            .map_err(to_py_err)?;

        let runtime = create_runtime().map_err(PyRuntimeError::new_err)?;
        let service = {
            let _guard = runtime.enter();
            ClusterService::start(config)
        };

        Ok(Self { runtime, service })
    }

    /// 현재 서비스 상태("pending" | "ready" | "failed")를 반환한다.
    pub fn status(&self) -> String {
        self.service.state().label().to_string()
    }

    /// 결과가 게시될 때까지 GIL을 풀고 기다린다.
    pub fn wait_ready(&self, py: Python<'_>) -> PyResult<()> {
        py.detach(|| self.runtime.block_on(self.service.wait_ready()))
            .map(|_| ())
            .map_err(to_py_err)
    }

    /// 가장 최근 클러스터 그룹을 JSON으로 반환한다.
    pub fn clusters(&self) -> PyResult<String> {
        let outcome = self.service.current().map_err(to_py_err)?;
        serde_json::to_string(&outcome.grouping)
            .map_err(|error| PyRuntimeError::new_err(format!("클러스터 결과 직렬화 실패: {}", error)))
    }

    /// 그룹과 실행 지표를 함께 JSON으로 반환한다.
    pub fn result(&self) -> PyResult<String> {
        let outcome = self.service.current().map_err(to_py_err)?;
        serialize_result(&outcome.to_payload())
    }
}

/// 요청 페이로드(JSON)로 한 번 실행하고 결과 JSON을 반환한다.
#[pyfunction]
pub fn cluster_once(py: Python<'_>, payload_json: &str) -> PyResult<String> {
    let payload: ClusterRequestPayload = serde_json::from_str(payload_json).map_err(|error| {
        PyValueError::new_err(format!(
            "클러스터링 페이로드 JSON 파싱에 실패했습니다: {}",
            error
        ))
    })?;

    let result = py.detach(|| execute_request(payload)).map_err(to_py_err)?;
    serialize_result(&result)
}

/// numpy 2차원 빈도 행렬(문서 x 단어)로 한 번 실행하고 결과 JSON을 반환한다.
#[pyfunction]
#[pyo3(signature = (names, vocabulary, features, params_json=None))]
pub fn cluster_matrix(
    py: Python<'_>,
    names: Vec<String>,
    vocabulary: Vec<String>,
    features: PyReadonlyArray2<'_, f64>,
    params_json: Option<&str>,
) -> PyResult<String> {
    let params = match params_json {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str::<ClusterParams>(raw).map_err(|error| {
                PyValueError::new_err(format!("파라미터 JSON 파싱에 실패했습니다: {}", error))
            })?
        }
        _ => ClusterParams::default(),
    };

    let matrix = features.as_array();
    if matrix.nrows() != names.len() {
        return Err(PyValueError::new_err(format!(
            "names 길이와 행렬 행 수가 다릅니다: names={}, rows={}",
            names.len(),
            matrix.nrows()
        )));
    }

    let documents = names
        .into_iter()
        .zip(matrix.outer_iter())
        .map(|(name, row)| Document::new(name, row.iter().copied().collect()))
        .collect::<Vec<_>>();

    let corpus = Corpus::new(vocabulary, documents).map_err(to_py_err)?;
    let outcome = py
        .detach(|| execute_clustering(&corpus, &params))
        .map_err(to_py_err)?;
    serialize_result(&outcome.to_payload())
}

fn serialize_result(result: &ClusterResultPayload) -> PyResult<String> {
    serde_json::to_string(result)
        .map_err(|error| PyRuntimeError::new_err(format!("클러스터 결과 직렬화 실패: {}", error)))
}

fn to_py_err(error: CoreError) -> PyErr {
    match error {
        CoreError::NotReady(_) => PyLookupError::new_err(error.to_string()),
        CoreError::InputShape(_)
        | CoreError::InvalidParameter(_)
        | CoreError::InvalidInput(_)
        | CoreError::InvalidConfig(_)
        | CoreError::Serialization(_) => PyValueError::new_err(error.to_string()),
        CoreError::Io(_) | CoreError::Runtime(_) => PyRuntimeError::new_err(error.to_string()),
    }
}

fn create_runtime() -> Result<Runtime, String> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| format!("Tokio 런타임 생성 실패: {}", error))
}
