use blog_cluster::core::clustering::{
    assign_documents, execute_clustering, execute_clustering_from_centroids,
    execute_clustering_with_rng, execute_request, ClusterRequestPayload, Termination,
};
use blog_cluster::core::config::ClusterParams;
use blog_cluster::core::errors::CoreError;
use blog_cluster::math::centroid::{initialize_centroids, update_centroids};
use blog_cluster::math::ranges::dimension_ranges;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;
use std::collections::HashSet;

use crate::support::{corpus, scale_corpus};

#[test]
fn scale_invariant_documents_share_a_cluster() {
    let corpus = scale_corpus();
    let params = ClusterParams::new(2, 20);
    let centroids = vec![vec![1.0, 2.0, 3.5], vec![10.0, 1.0, 1.0]];

    let outcome = execute_clustering_from_centroids(&corpus, &params, centroids).expect("run");

    assert_eq!(outcome.termination, Termination::Converged);
    assert_eq!(outcome.iterations, 2);
    assert_eq!(outcome.grouping.get(0).expect("cluster 0").blogs, vec!["A", "B"]);
    assert_eq!(outcome.grouping.get(1).expect("cluster 1").blogs, vec!["C"]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2024)]
fn seeded_runs_keep_scaled_documents_together(#[case] seed: u64) {
    let corpus = scale_corpus();
    let params = ClusterParams::new(2, 20).with_seed(seed);

    let outcome = execute_clustering(&corpus, &params).expect("run");
    let grouping = &outcome.grouping;

    assert_eq!(grouping.k(), 2);
    assert_eq!(grouping.total_count(), 3);
    assert_eq!(grouping.cluster_of("A"), grouping.cluster_of("B"));
    assert!(outcome.iterations <= params.max_iterations);

    let mut seen = HashSet::new();
    for (_, entry) in grouping.iter() {
        assert_eq!(entry.count, entry.blogs.len());
        for blog in &entry.blogs {
            assert!(seen.insert(blog.clone()), "duplicated member: {}", blog);
        }
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn same_seed_gives_same_grouping() {
    let corpus = corpus(&[
        ("a", &[1.0, 5.0, 0.0, 2.0]),
        ("b", &[2.0, 9.0, 1.0, 3.0]),
        ("c", &[8.0, 0.0, 7.0, 1.0]),
        ("d", &[9.0, 1.0, 6.0, 0.0]),
        ("e", &[0.0, 3.0, 3.0, 9.0]),
    ]);
    let params = ClusterParams::new(3, 20).with_seed(11);

    let first = execute_clustering(&corpus, &params).expect("first run");
    let second = execute_clustering(&corpus, &params).expect("second run");

    assert_eq!(first.grouping, second.grouping);
    assert_eq!(first.iterations, second.iterations);
}

#[test]
fn more_clusters_than_documents_keeps_every_index() {
    let corpus = corpus(&[("x", &[1.0, 2.0, 3.0]), ("y", &[3.0, 1.0, 0.0])]);
    let params = ClusterParams::new(3, 20)
        .with_seed(5)
        .with_sparse_clusters(true);

    let outcome = execute_clustering(&corpus, &params).expect("run");

    assert_eq!(outcome.grouping.k(), 3);
    assert_eq!(outcome.grouping.total_count(), 2);
    assert!(outcome
        .grouping
        .iter()
        .any(|(_, entry)| entry.count == 0 && entry.blogs.is_empty()));

    let json = serde_json::to_value(&outcome.grouping).expect("serialize");
    for key in ["0", "1", "2"] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
}

#[rstest]
#[case(ClusterParams::new(0, 20))]
#[case(ClusterParams::new(2, 0))]
#[case(ClusterParams::new(4, 20))]
fn invalid_parameters_are_rejected(#[case] params: ClusterParams) {
    let corpus = scale_corpus();
    let result = execute_clustering(&corpus, &params);
    assert!(matches!(result, Err(CoreError::InvalidParameter(_))));
}

#[test]
fn single_iteration_cap_reports_exhausted() {
    let corpus = scale_corpus();
    let params = ClusterParams::new(2, 1);
    let centroids = vec![vec![1.0, 2.0, 3.5], vec![10.0, 1.0, 1.0]];

    let outcome = execute_clustering_from_centroids(&corpus, &params, centroids).expect("run");

    assert_eq!(outcome.termination, Termination::Exhausted);
    assert_eq!(outcome.iterations, 1);
    assert_eq!(outcome.grouping.total_count(), 3);
}

#[test]
fn emptied_cluster_stays_empty() {
    let corpus = corpus(&[
        ("p", &[1.0, 2.0, 3.0]),
        ("q", &[2.0, 4.0, 7.0]),
        ("r", &[0.0, 1.0, 5.0]),
    ]);
    let params = ClusterParams::new(2, 20);
    let centroids = vec![vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]];

    let outcome = execute_clustering_from_centroids(&corpus, &params, centroids).expect("run");

    assert_eq!(outcome.termination, Termination::Converged);
    assert_eq!(outcome.grouping.get(0).expect("cluster 0").count, 3);
    let empty = outcome.grouping.get(1).expect("cluster 1");
    assert_eq!(empty.count, 0);
    assert!(empty.blogs.is_empty());
}

#[test]
fn initial_centroids_must_match_k_and_dimension() {
    let corpus = scale_corpus();
    let params = ClusterParams::new(2, 20);

    let too_few = execute_clustering_from_centroids(&corpus, &params, vec![vec![1.0, 2.0, 3.0]]);
    assert!(matches!(too_few, Err(CoreError::InvalidParameter(_))));

    let wrong_dim = execute_clustering_from_centroids(
        &corpus,
        &params,
        vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]],
    );
    assert!(matches!(wrong_dim, Err(CoreError::InputShape(_))));
}

#[test]
fn assignment_is_idempotent_and_prefers_lowest_index_on_ties() {
    let corpus = scale_corpus();
    let centroids = vec![vec![4.0, 1.0, 0.0], vec![4.0, 1.0, 0.0], vec![0.0, 2.0, 5.0]];

    let first = assign_documents(corpus.documents(), &centroids);
    let second = assign_documents(corpus.documents(), &centroids);

    assert_eq!(first, second);
    assert_eq!(first, vec![2, 2, 0]);
}

#[test]
fn update_step_averages_members_and_zeroes_empty_clusters() {
    let corpus = scale_corpus();
    let centroids = update_centroids(corpus.documents(), &[0, 0, 0], 2, 3);

    assert_eq!(centroids[0], vec![13.0 / 3.0, 7.0 / 3.0, 10.0 / 3.0]);
    assert_eq!(centroids[1], vec![0.0, 0.0, 0.0]);
}

#[test]
fn initial_centroids_stay_inside_dimension_ranges() {
    let corpus = corpus(&[
        ("a", &[1.0, 5.0, 2.0]),
        ("b", &[4.0, 5.0, 9.0]),
        ("c", &[2.0, 5.0, 0.0]),
    ]);
    let ranges = dimension_ranges(corpus.documents(), corpus.dimension());
    assert_eq!((ranges[0].min, ranges[0].max), (1.0, 4.0));
    assert!(ranges[1].is_constant());

    let mut rng = StdRng::seed_from_u64(3);
    let centroids = initialize_centroids(4, &ranges, &mut rng);

    assert_eq!(centroids.len(), 4);
    for centroid in &centroids {
        assert_eq!(centroid.len(), 3);
        assert_eq!(centroid[1], 5.0);
        for (value, range) in centroid.iter().zip(ranges.iter()) {
            assert!(*value >= range.min && *value <= range.max);
        }
    }
}

#[test]
fn injected_rng_drives_the_run() {
    let corpus = scale_corpus();
    let params = ClusterParams::new(2, 20);

    let mut left_rng = StdRng::seed_from_u64(99);
    let mut right_rng = StdRng::seed_from_u64(99);
    let left = execute_clustering_with_rng(&corpus, &params, &mut left_rng).expect("left");
    let right = execute_clustering_with_rng(&corpus, &params, &mut right_rng).expect("right");

    assert_eq!(left.grouping, right.grouping);
}

#[test]
fn request_payload_runs_end_to_end() {
    let payload: ClusterRequestPayload = serde_json::from_str(
        r#"{
            "vocabulary": ["w1", "w2", "w3"],
            "documents": [
                {"name": "A", "features": [1, 2, 3]},
                {"name": "B", "features": [2, 4, 6]},
                {"name": "C", "features": [10, 1, 1]}
            ],
            "params": {"k": 2, "seed": 17}
        }"#,
    )
    .expect("payload");

    let result = execute_request(payload).expect("run");
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["metrics"]["k"], 2);
    assert_eq!(json["metrics"]["document_count"], 3);
    let total = ["0", "1"]
        .iter()
        .map(|key| json["clusters"][key]["count"].as_u64().expect("count"))
        .sum::<u64>();
    assert_eq!(total, 3);
}

#[test]
fn request_payload_with_short_row_is_a_shape_error() {
    let payload = ClusterRequestPayload {
        vocabulary: vec!["w1".into(), "w2".into(), "w3".into()],
        documents: vec![blog_cluster::core::corpus::Document::new("A", vec![1.0, 2.0])],
        params: ClusterParams::default(),
    };
    assert!(matches!(execute_request(payload), Err(CoreError::InputShape(_))));
}
