// 목적:
// - 코퍼스 전체에서 차원별 최소/최대값을 계산한다.
//
// 설명:
// - 실행 시작 시 한 번만 계산되며 이후에는 읽기 전용이다.
//
// 참조:
// - src_rs/math/centroid.rs

use crate::core::corpus::Document;

/// 한 차원에서 관측된 값의 범위다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
}

impl DimensionRange {
    fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn observe(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// 분산이 0인 차원인지 여부다.
    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }
}

/// 모든 문서를 훑어 차원별 (min, max)를 반환한다.
pub fn dimension_ranges(documents: &[Document], dim: usize) -> Vec<DimensionRange> {
    let mut ranges = vec![DimensionRange::empty(); dim];
    for document in documents {
        for (range, value) in ranges.iter_mut().zip(document.features.iter()) {
            range.observe(*value);
        }
    }
    ranges
}
