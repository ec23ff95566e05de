// 목적:
// - 두 벡터 사이의 상관 기반 거리(1 - 피어슨 상관계수)를 계산한다.
//
// 설명:
// - 평균을 먼저 구한 뒤 중심화한 값으로 곱합과 제곱합을 누적한다(two-pass).
// - 어느 한쪽이 상수 벡터이거나 중심화 제곱합이 0 이하/비유한이면 상관계수가 정의되지
//   않으므로 최대 거리(MAX_DISTANCE)를 반환한다. NaN은 비교 단계로 흘러가지 않는다.
// - 상관계수는 [-1, 1]로 잘라 모든 거리가 [0, 2] 안에 있도록 한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function) + 순수 함수.
//
// 참조:
// - src_rs/core/clustering.rs

/// 완전 역상관일 때의 거리이자 0-분산 벡터에 부여하는 거리다.
pub const MAX_DISTANCE: f64 = 2.0;

/// 피어슨 상관 기반 거리를 반환한다. 길이가 다르면 짧은 쪽 길이까지만 본다.
pub fn pearson_distance(left: &[f64], right: &[f64]) -> f64 {
    let n = left.len().min(right.len());
    if n == 0 {
        return MAX_DISTANCE;
    }

    let left = &left[..n];
    let right = &right[..n];
    if is_constant(left) || is_constant(right) {
        return MAX_DISTANCE;
    }

    let mean_l = mean(left);
    let mean_r = mean(right);

    let mut centered_l = 0.0f64;
    let mut centered_r = 0.0f64;
    let mut numerator = 0.0f64;
    for (l, r) in left.iter().zip(right.iter()) {
        let dl = l - mean_l;
        let dr = r - mean_r;
        centered_l += dl * dl;
        centered_r += dr * dr;
        numerator += dl * dr;
    }

    if !has_variance(centered_l) || !has_variance(centered_r) {
        return MAX_DISTANCE;
    }

    let denominator = (centered_l * centered_r).sqrt();
    if !denominator.is_finite() || denominator <= 0.0 {
        return MAX_DISTANCE;
    }

    let correlation = (numerator / denominator).clamp(-1.0, 1.0);
    1.0 - correlation
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|value| value == first),
        None => true,
    }
}

fn has_variance(centered: f64) -> bool {
    centered.is_finite() && centered > 0.0
}
