// 목적:
// - 탭 구분 코퍼스 테이블의 행 파싱 유틸리티를 제공한다.
//
// 설명:
// - 첫 행은 어휘 행이며 첫 칸은 무시한다.
// - 이후 각 행은 `이름 \t count_1 ... \t count_n` 형식이며 칸 수는 어휘 길이 + 1이어야 한다.
// - 빈 행은 건너뛴다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/index/tsv_loader.rs

use crate::core::corpus::{Corpus, Document};
use crate::core::errors::{CoreError, CoreResult};

const COLUMN_SEPARATOR: char = '\t';

/// 어휘 행을 파싱한다.
pub fn parse_vocabulary_row(line: &str) -> CoreResult<Vec<String>> {
    let vocabulary = line
        .split(COLUMN_SEPARATOR)
        .skip(1)
        .map(|term| term.trim().to_string())
        .collect::<Vec<_>>();

    if vocabulary.is_empty() {
        return Err(CoreError::InvalidInput(
            "어휘 행에 단어가 없습니다".to_string(),
        ));
    }

    if let Some(position) = vocabulary.iter().position(|term| term.is_empty()) {
        return Err(CoreError::InvalidInput(format!(
            "어휘 행에 빈 단어가 있습니다: column={}",
            position + 2
        )));
    }

    Ok(vocabulary)
}

/// 문서 행을 파싱한다. line_number는 1부터 시작하는 파일 상의 행 번호다.
pub fn parse_document_row(line: &str, line_number: usize, dim: usize) -> CoreResult<Document> {
    let mut columns = line.split(COLUMN_SEPARATOR);
    let name = columns.next().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return Err(CoreError::InvalidInput(format!(
            "문서 이름이 비어 있습니다: line={}",
            line_number
        )));
    }

    let features = columns
        .map(|cell| parse_count(cell, line_number))
        .collect::<CoreResult<Vec<_>>>()?;

    if features.len() != dim {
        return Err(CoreError::InputShape(format!(
            "expected={}, actual={}, line={}, name={}",
            dim,
            features.len(),
            line_number,
            name
        )));
    }

    Ok(Document::new(name, features))
}

fn parse_count(cell: &str, line_number: usize) -> CoreResult<f64> {
    let trimmed = cell.trim();
    trimmed.parse::<i64>().map(|count| count as f64).map_err(|error| {
        CoreError::InvalidInput(format!(
            "정수 빈도가 아닙니다: line={}, value={:?}, error={}",
            line_number, trimmed, error
        ))
    })
}

/// 행 단위로 코퍼스를 조립한다. 어휘 행 이후의 행을 문서로 취급한다.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    vocabulary: Option<Vec<String>>,
    documents: Vec<Document>,
    line_number: usize,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 한 행을 소비한다.
    pub fn push_line(&mut self, line: &str) -> CoreResult<()> {
        self.line_number += 1;
        if line.trim().is_empty() {
            return Ok(());
        }

        match self.vocabulary.as_ref() {
            None => {
                self.vocabulary = Some(parse_vocabulary_row(line)?);
            }
            Some(vocabulary) => {
                let document = parse_document_row(line, self.line_number, vocabulary.len())?;
                self.documents.push(document);
            }
        }
        Ok(())
    }

    pub fn finish(self) -> CoreResult<Corpus> {
        let vocabulary = self.vocabulary.ok_or_else(|| {
            CoreError::InvalidInput("코퍼스 테이블이 비어 있습니다".to_string())
        })?;
        Corpus::new(vocabulary, self.documents)
    }
}

/// 메모리 상의 테이블 텍스트 전체를 파싱한다.
pub fn parse_corpus(text: &str) -> CoreResult<Corpus> {
    let mut builder = CorpusBuilder::new();
    for line in text.lines() {
        builder.push_line(line)?;
    }
    builder.finish()
}
