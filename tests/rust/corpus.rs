use blog_cluster::core::corpus::{Corpus, Document};
use blog_cluster::core::errors::CoreError;
use blog_cluster::index::tsv::{parse_corpus, parse_document_row, parse_vocabulary_row};
use rstest::rstest;

use crate::support::vocabulary;

#[test]
fn corpus_rejects_mismatched_feature_count() {
    let documents = vec![
        Document::new("ok", vec![1.0, 2.0, 3.0]),
        Document::new("short", vec![1.0, 2.0]),
    ];
    let result = Corpus::new(vocabulary(3), documents);
    assert!(matches!(result, Err(CoreError::InputShape(_))));
}

#[test]
fn corpus_rejects_empty_vocabulary() {
    let result = Corpus::new(Vec::new(), Vec::new());
    assert!(matches!(result, Err(CoreError::InvalidInput(_))));
}

#[test]
fn vocabulary_row_ignores_first_cell() {
    let vocabulary = parse_vocabulary_row("Blog\tapple\tbanana\tcherry").expect("header");
    assert_eq!(vocabulary, vec!["apple", "banana", "cherry"]);
}

#[rstest]
#[case("Blog\t")]
#[case("Blog\tapple\t\tcherry")]
fn vocabulary_row_with_empty_term_is_invalid_input(#[case] line: &str) {
    assert!(matches!(parse_vocabulary_row(line), Err(CoreError::InvalidInput(_))));
}

#[rstest]
#[case("blog-a\t1\t2", 2, vec![1.0, 2.0])]
#[case("blog-b\t0\t0\t15", 3, vec![0.0, 0.0, 15.0])]
fn document_row_is_parsed(
    #[case] line: &str,
    #[case] dim: usize,
    #[case] expected: Vec<f64>,
) {
    let document = parse_document_row(line, 2, dim).expect("row");
    assert_eq!(document.features, expected);
}

#[rstest]
#[case("blog-a\t1\t2", 3)]
#[case("blog-a\t1\t2\t3\t4", 3)]
fn document_row_with_wrong_column_count_is_a_shape_error(#[case] line: &str, #[case] dim: usize) {
    let result = parse_document_row(line, 2, dim);
    assert!(matches!(result, Err(CoreError::InputShape(_))));
}

#[test]
fn non_integer_count_is_invalid_input() {
    let result = parse_document_row("blog-a\t1\tmany", 5, 2);
    assert!(matches!(result, Err(CoreError::InvalidInput(_))));
}

#[test]
fn table_text_becomes_corpus() {
    let text = "Blog\tw1\tw2\tw3\r\nA\t1\t2\t3\r\n\r\nB\t2\t4\t6\nC\t10\t1\t1\n";
    let corpus = parse_corpus(text).expect("corpus");

    assert_eq!(corpus.vocabulary(), ["w1", "w2", "w3"]);
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.documents()[2].name, "C");
    assert_eq!(corpus.documents()[2].features, vec![10.0, 1.0, 1.0]);
}

#[test]
fn empty_table_is_invalid_input() {
    assert!(matches!(parse_corpus("\n\n"), Err(CoreError::InvalidInput(_))));
}
