// 목적:
// - 디스크의 탭 구분 코퍼스 파일을 비동기로 적재한다.
//
// 설명:
// - 파일을 행 단위 스트림으로 읽어 CorpusBuilder에 넘긴다.
// - 반환되는 future는 적재가 완전히 끝났을 때 한 번만 완료된다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/tsv.rs
// - src_rs/core/service.rs

use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::core::corpus::Corpus;
use crate::core::errors::{CoreError, CoreResult};
use crate::index::tsv::CorpusBuilder;

/// 코퍼스 파일 전체를 읽어 검증된 Corpus를 반환한다.
pub async fn load_corpus(path: &Path) -> CoreResult<Corpus> {
    let file = File::open(path).await.map_err(|error| {
        CoreError::Io(format!("코퍼스 파일 열기 실패: path={}, error={}", path.display(), error))
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut builder = CorpusBuilder::new();
    while let Some(line) = lines.next_line().await.map_err(|error| {
        CoreError::Io(format!("코퍼스 파일 읽기 실패: path={}, error={}", path.display(), error))
    })? {
        builder.push_line(&line)?;
    }

    let corpus = builder.finish()?;
    info!(
        path = %path.display(),
        documents = corpus.len(),
        vocabulary = corpus.dimension(),
        "코퍼스 적재를 완료했습니다"
    );
    Ok(corpus)
}
