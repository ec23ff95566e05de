// 목적:
// - 최종 배정 벡터로부터 클러스터별 그룹(Cluster Grouping)을 만든다.
//
// 설명:
// - 0..k-1 모든 인덱스가 항상 존재하며, 배정이 없는 클러스터는 count=0과 빈 목록을 가진다.
// - JSON 직렬화 시 키는 문자열화된 인덱스이며 숫자 순서로 출력된다.
//
// 디자인 패턴:
// - 파생 결과 객체(Derived Result).
//
// 참조:
// - src_rs/core/clustering.rs

use serde::ser::{Serialize, Serializer};

use crate::core::corpus::Document;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ClusterEntry {
    pub count: usize,
    pub blogs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterGrouping {
    clusters: Vec<ClusterEntry>,
}

impl ClusterGrouping {
    /// 배정 순서대로 문서 이름을 모아 k개의 그룹을 만든다.
    pub fn from_assignments(k: usize, assignments: &[usize], documents: &[Document]) -> Self {
        let mut clusters = vec![ClusterEntry::default(); k];
        for (cluster, document) in assignments.iter().zip(documents.iter()) {
            if let Some(entry) = clusters.get_mut(*cluster) {
                entry.blogs.push(document.name.clone());
                entry.count += 1;
            }
        }
        Self { clusters }
    }

    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    pub fn get(&self, cluster: usize) -> Option<&ClusterEntry> {
        self.clusters.get(cluster)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ClusterEntry)> {
        self.clusters.iter().enumerate()
    }

    /// 모든 클러스터의 count 합이다.
    pub fn total_count(&self) -> usize {
        self.clusters.iter().map(|entry| entry.count).sum()
    }

    /// 문서 이름이 속한 클러스터 인덱스를 찾는다.
    pub fn cluster_of(&self, name: &str) -> Option<usize> {
        self.clusters
            .iter()
            .position(|entry| entry.blogs.iter().any(|blog| blog == name))
    }
}

impl Serialize for ClusterGrouping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.clusters
                .iter()
                .enumerate()
                .map(|(index, entry)| (index.to_string(), entry)),
        )
    }
}
