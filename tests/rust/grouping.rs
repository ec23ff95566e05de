use blog_cluster::core::corpus::Document;
use blog_cluster::core::grouping::ClusterGrouping;

fn documents() -> Vec<Document> {
    ["first", "second", "third", "fourth"]
        .into_iter()
        .map(|name| Document::new(name, vec![0.0]))
        .collect()
}

#[test]
fn grouping_keeps_assignment_order() {
    let grouping = ClusterGrouping::from_assignments(2, &[1, 0, 1, 1], &documents());

    assert_eq!(grouping.get(0).expect("cluster 0").blogs, vec!["second"]);
    assert_eq!(
        grouping.get(1).expect("cluster 1").blogs,
        vec!["first", "third", "fourth"]
    );
    assert_eq!(grouping.total_count(), 4);
    assert_eq!(grouping.cluster_of("third"), Some(1));
    assert_eq!(grouping.cluster_of("missing"), None);
}

#[test]
fn grouping_serializes_with_string_keys_in_index_order() {
    let grouping = ClusterGrouping::from_assignments(3, &[2, 0, 2, 2], &documents());
    let json = serde_json::to_string(&grouping).expect("serialize");

    assert_eq!(
        json,
        r#"{"0":{"count":1,"blogs":["second"]},"1":{"count":0,"blogs":[]},"2":{"count":3,"blogs":["first","third","fourth"]}}"#
    );
}
