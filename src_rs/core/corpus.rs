// 목적:
// - 어휘와 문서 벡터 집합(Vector Corpus)을 보관한다.
//
// 설명:
// - 생성 시점에 모든 문서의 차원이 어휘 길이와 같은지 검증한다.
// - 생성 이후에는 불변이며 여러 실행이 Arc로 공유할 수 있다.
//
// 디자인 패턴:
// - 생성 시 검증(Validated Constructor).
//
// 참조:
// - src_rs/index/tsv_loader.rs
// - src_rs/core/clustering.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};

/// 클러스터링 대상 문서 한 건이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub features: Vec<f64>,
}

impl Document {
    pub fn new(name: impl Into<String>, features: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    vocabulary: Vec<String>,
    documents: Vec<Document>,
}

impl Corpus {
    /// 어휘 길이와 문서 차원을 검증한 뒤 코퍼스를 생성한다.
    pub fn new(vocabulary: Vec<String>, documents: Vec<Document>) -> CoreResult<Self> {
        if vocabulary.is_empty() {
            return Err(CoreError::InvalidInput(
                "vocabulary는 최소 1개 이상의 단어를 가져야 합니다".to_string(),
            ));
        }

        let dim = vocabulary.len();
        for (index, document) in documents.iter().enumerate() {
            if document.features.len() != dim {
                return Err(CoreError::InputShape(format!(
                    "expected={}, actual={}, document_index={}, name={}",
                    dim,
                    document.features.len(),
                    index,
                    document.name
                )));
            }
        }

        Ok(Self {
            vocabulary,
            documents,
        })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// 벡터 차원(어휘 길이)이다.
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
