// 목적:
// - 상관 거리 기반 k-평균 클러스터링 실행(초기화 -> 배정/갱신 반복 -> 종료)을 담당한다.
//
// 설명:
// - 초기화: 차원별 범위를 한 번 계산하고 주입된 난수원으로 k개의 중심을 뽑는다.
// - 반복: 배정 결과가 직전 반복과 완전히 같으면 갱신 없이 수렴(Converged)으로 종료한다.
//   그렇지 않으면 중심을 갱신하고 반복 횟수가 max_iterations에 닿으면 소진(Exhausted)으로 종료한다.
// - 종료: 마지막 배정 벡터로 클러스터 그룹을 만든다. 중심과 배정 벡터는 실행과 함께 버려진다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 상태 전이(Initializing -> Iterating -> Converged | Exhausted).
//
// 참조:
// - src_rs/math/centroid.rs
// - src_rs/math/distance.rs
// - src_rs/core/grouping.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::core::config::ClusterParams;
use crate::core::corpus::{Corpus, Document};
use crate::core::errors::{CoreError, CoreResult};
use crate::core::grouping::ClusterGrouping;
use crate::math::centroid::{initialize_centroids, update_centroids};
use crate::math::distance::pearson_distance;
use crate::math::ranges::dimension_ranges;

/// 반복이 끝난 이유다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// 배정이 직전 반복과 같아 안정화되었다.
    Converged,
    /// max_iterations에 도달했다.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct ClusterOutcome {
    pub grouping: ClusterGrouping,
    pub termination: Termination,
    /// 수행한 배정 단계 수. 항상 max_iterations 이하다.
    pub iterations: usize,
    pub document_count: usize,
    pub dimension: usize,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterMetricsPayload {
    pub document_count: usize,
    pub dimension: usize,
    pub k: usize,
    pub iterations: usize,
    pub termination: Termination,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterResultPayload {
    pub clusters: ClusterGrouping,
    pub metrics: ClusterMetricsPayload,
}

impl ClusterOutcome {
    pub fn to_payload(&self) -> ClusterResultPayload {
        ClusterResultPayload {
            clusters: self.grouping.clone(),
            metrics: ClusterMetricsPayload {
                document_count: self.document_count,
                dimension: self.dimension,
                k: self.grouping.k(),
                iterations: self.iterations,
                termination: self.termination,
                elapsed_ms: self.elapsed_ms,
            },
        }
    }
}

/// 메모리 상의 코퍼스로 한 번 실행하기 위한 요청 페이로드다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterRequestPayload {
    pub vocabulary: Vec<String>,
    pub documents: Vec<Document>,
    #[serde(default)]
    pub params: ClusterParams,
}

/// 요청 페이로드를 검증하고 클러스터링 결과 페이로드를 반환한다.
pub fn execute_request(payload: ClusterRequestPayload) -> CoreResult<ClusterResultPayload> {
    let corpus = Corpus::new(payload.vocabulary, payload.documents)?;
    let outcome = execute_clustering(&corpus, &payload.params)?;
    Ok(outcome.to_payload())
}

/// seed가 있으면 고정 난수원으로, 없으면 엔트로피 난수원으로 실행한다.
pub fn execute_clustering(corpus: &Corpus, params: &ClusterParams) -> CoreResult<ClusterOutcome> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    execute_clustering_with_rng(corpus, params, &mut rng)
}

/// 주입된 난수원으로 중심을 초기화한 뒤 실행한다.
pub fn execute_clustering_with_rng<R: Rng + ?Sized>(
    corpus: &Corpus,
    params: &ClusterParams,
    rng: &mut R,
) -> CoreResult<ClusterOutcome> {
    params.validate(corpus.len())?;

    let ranges = dimension_ranges(corpus.documents(), corpus.dimension());
    let centroids = initialize_centroids(params.k, &ranges, rng);
    iterate(corpus, params, centroids)
}

/// 호출자가 준비한 초기 중심으로 실행한다.
pub fn execute_clustering_from_centroids(
    corpus: &Corpus,
    params: &ClusterParams,
    centroids: Vec<Vec<f64>>,
) -> CoreResult<ClusterOutcome> {
    params.validate(corpus.len())?;

    if centroids.len() != params.k {
        return Err(CoreError::InvalidParameter(format!(
            "초기 중심 개수가 k와 다릅니다: k={}, centroids={}",
            params.k,
            centroids.len()
        )));
    }

    if let Some(index) = centroids
        .iter()
        .position(|centroid| centroid.len() != corpus.dimension())
    {
        return Err(CoreError::InputShape(format!(
            "초기 중심 차원이 일치하지 않습니다: expected={}, actual={}, centroid_index={}",
            corpus.dimension(),
            centroids[index].len(),
            index
        )));
    }

    iterate(corpus, params, centroids)
}

/// 각 문서를 가장 가까운 중심에 배정한다. 동률이면 더 작은 인덱스를 유지한다.
pub fn assign_documents(documents: &[Document], centroids: &[Vec<f64>]) -> Vec<usize> {
    documents
        .iter()
        .map(|document| nearest_centroid(&document.features, centroids))
        .collect()
}

fn nearest_centroid(features: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut closest = 0usize;
    let mut min_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = pearson_distance(features, centroid);
        if distance < min_distance {
            min_distance = distance;
            closest = index;
        }
    }
    closest
}

fn iterate(
    corpus: &Corpus,
    params: &ClusterParams,
    mut centroids: Vec<Vec<f64>>,
) -> CoreResult<ClusterOutcome> {
    let started = Instant::now();
    let documents = corpus.documents();
    let dim = corpus.dimension();

    info!(
        k = params.k,
        documents = documents.len(),
        dimension = dim,
        max_iterations = params.max_iterations,
        "클러스터링을 시작합니다"
    );

    let mut previous: Option<Vec<usize>> = None;
    let mut completed = 0usize;

    let (assignments, termination, iterations) = loop {
        let assignments = assign_documents(documents, &centroids);
        debug!(iteration = completed + 1, "배정 단계 완료");

        if previous.as_deref() == Some(assignments.as_slice()) {
            break (assignments, Termination::Converged, completed + 1);
        }

        centroids = update_centroids(documents, &assignments, params.k, dim);
        completed += 1;

        if completed >= params.max_iterations {
            break (assignments, Termination::Exhausted, completed);
        }
        previous = Some(assignments);
    };

    let grouping = ClusterGrouping::from_assignments(params.k, &assignments, documents);
    let elapsed_ms = started.elapsed().as_millis();

    info!(
        termination = ?termination,
        iterations,
        elapsed_ms = elapsed_ms as u64,
        "클러스터링을 완료했습니다"
    );

    Ok(ClusterOutcome {
        grouping,
        termination,
        iterations,
        document_count: documents.len(),
        dimension: dim,
        elapsed_ms,
    })
}
