// 목적:
// - 코퍼스 적재와 클러스터링을 백그라운드에서 한 번 수행하고 결과를 소유한다.
//
// 설명:
// - 적재는 한 번만 완료되는 future로 기다리고, CPU 작업인 클러스터링은 blocking 풀에서 실행한다.
// - 결과는 watch 채널로 한 번 게시된다. 호출자는 폴링 없이 wait_ready로 기다리거나
//   current로 즉시 조회한다. 아직 계산되지 않았으면 NotReady를 반환한다.
// - 실패한 실행은 원래 오류 종류(InputShape, InvalidParameter 등)를 그대로 보존해 돌려준다.
// - 서로 다른 파라미터의 실행은 각각 독립된 서비스로 만들고 코퍼스는 Arc로 공유한다.
//
// 디자인 패턴:
// - 소유 결과 객체(Owned Result) + 단발 알림(Single-fire Notification).
//
// 참조:
// - src_rs/index/tsv_loader.rs
// - src_rs/core/clustering.rs

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

use crate::core::clustering::{execute_clustering, ClusterOutcome};
use crate::core::config::{ClusterParams, ServiceConfigPayload};
use crate::core::corpus::Corpus;
use crate::core::errors::{CoreError, CoreResult};
use crate::index::tsv_loader::load_corpus;

#[derive(Debug, Clone)]
pub enum ServiceState {
    Pending,
    Ready(Arc<ClusterOutcome>),
    Failed(CoreError),
}

impl ServiceState {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Pending => "pending",
            ServiceState::Ready(_) => "ready",
            ServiceState::Failed(_) => "failed",
        }
    }

    fn is_settled(&self) -> bool {
        !matches!(self, ServiceState::Pending)
    }
}

pub struct ClusterService {
    state_rx: watch::Receiver<ServiceState>,
}

impl ClusterService {
    /// 설정의 data_path에서 코퍼스를 적재한 뒤 클러스터링을 시작한다.
    ///
    /// 현재 tokio 런타임 안에서 호출해야 한다.
    pub fn start(config: ServiceConfigPayload) -> Self {
        let (state_tx, state_rx) = watch::channel(ServiceState::Pending);
        let path = PathBuf::from(config.data_path);
        let params = config.params;

        tokio::spawn(async move {
            let result = match load_corpus(&path).await {
                Ok(corpus) => run_blocking(Arc::new(corpus), params).await,
                Err(error) => Err(error),
            };
            publish(&state_tx, result);
        });

        Self { state_rx }
    }

    /// 이미 적재된 코퍼스로 클러스터링을 시작한다.
    pub fn start_with_corpus(corpus: Arc<Corpus>, params: ClusterParams) -> Self {
        let (state_tx, state_rx) = watch::channel(ServiceState::Pending);

        tokio::spawn(async move {
            let result = run_blocking(corpus, params).await;
            publish(&state_tx, result);
        });

        Self { state_rx }
    }

    pub fn state(&self) -> ServiceState {
        self.state_rx.borrow().clone()
    }

    /// 가장 최근에 완료된 실행 결과를 반환한다.
    pub fn current(&self) -> CoreResult<Arc<ClusterOutcome>> {
        settled_result(&self.state_rx.borrow())
    }

    /// 결과가 게시될 때까지 기다린다.
    pub async fn wait_ready(&self) -> CoreResult<Arc<ClusterOutcome>> {
        let mut state_rx = self.state_rx.clone();
        let state = state_rx
            .wait_for(ServiceState::is_settled)
            .await
            .map_err(|error| {
                CoreError::Runtime(format!("클러스터링 작업이 결과 없이 종료되었습니다: {}", error))
            })?;
        settled_result(&state)
    }
}

async fn run_blocking(corpus: Arc<Corpus>, params: ClusterParams) -> CoreResult<ClusterOutcome> {
    tokio::task::spawn_blocking(move || execute_clustering(&corpus, &params))
        .await
        .map_err(|error| CoreError::Runtime(format!("클러스터링 작업 조인 실패: {}", error)))?
}

fn publish(state_tx: &watch::Sender<ServiceState>, result: CoreResult<ClusterOutcome>) {
    let state = match result {
        Ok(outcome) => {
            info!(iterations = outcome.iterations, "클러스터 결과를 게시합니다");
            ServiceState::Ready(Arc::new(outcome))
        }
        Err(error) => {
            error!(error = %error, "클러스터링 실행에 실패했습니다");
            ServiceState::Failed(error)
        }
    };
    state_tx.send_replace(state);
}

fn settled_result(state: &ServiceState) -> CoreResult<Arc<ClusterOutcome>> {
    match state {
        ServiceState::Pending => Err(CoreError::NotReady(
            "클러스터링이 아직 완료되지 않았습니다".to_string(),
        )),
        ServiceState::Ready(outcome) => Ok(Arc::clone(outcome)),
        ServiceState::Failed(error) => Err(error.clone()),
    }
}
