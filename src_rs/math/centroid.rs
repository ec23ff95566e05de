// 목적:
// - 중심 벡터의 초기화와 갱신을 담당한다.
//
// 설명:
// - 초기화: 각 차원의 [min, max] 범위에서 균등 분포로 값을 뽑는다. 난수원은 호출자가 주입한다.
// - 갱신: 배정된 문서들의 원소별 산술 평균을 새 중심으로 삼는다.
// - 배정된 문서가 없는 클러스터는 0-벡터가 된다. 0-벡터는 분산이 0이라 거리 정책상
//   항상 최대 거리이므로 이후 문서를 다시 끌어오지 못한다(알려진 퇴화 클러스터 동작).
//
// 디자인 패턴:
// - 순수 함수 + 난수원 주입(Injected RNG).
//
// 참조:
// - src_rs/math/ranges.rs
// - src_rs/core/clustering.rs

use rand::Rng;

use crate::core::corpus::Document;
use crate::math::ranges::DimensionRange;

/// k개의 중심 벡터를 차원별 범위 안에서 무작위로 생성한다.
pub fn initialize_centroids<R: Rng + ?Sized>(
    k: usize,
    ranges: &[DimensionRange],
    rng: &mut R,
) -> Vec<Vec<f64>> {
    (0..k)
        .map(|_| {
            ranges
                .iter()
                .map(|range| sample_within(range, rng))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn sample_within<R: Rng + ?Sized>(range: &DimensionRange, rng: &mut R) -> f64 {
    let bounded = range.min.is_finite() && range.max.is_finite();
    if range.is_constant() || !bounded || range.max < range.min {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

/// 현재 배정 결과로 k개의 중심 벡터를 다시 계산한다.
pub fn update_centroids(
    documents: &[Document],
    assignments: &[usize],
    k: usize,
    dim: usize,
) -> Vec<Vec<f64>> {
    let mut sums = vec![vec![0.0f64; dim]; k];
    let mut counts = vec![0usize; k];

    for (document, cluster) in documents.iter().zip(assignments.iter()) {
        let Some(sum) = sums.get_mut(*cluster) else {
            continue;
        };
        for (dst, src) in sum.iter_mut().zip(document.features.iter()) {
            *dst += *src;
        }
        counts[*cluster] += 1;
    }

    for (sum, count) in sums.iter_mut().zip(counts.iter()) {
        if *count == 0 {
            continue;
        }
        let divisor = *count as f64;
        for value in sum.iter_mut() {
            *value /= divisor;
        }
    }

    sums
}
