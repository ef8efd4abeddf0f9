//! Tests for BkTree search against a linear scan

use std::collections::BTreeSet;

use bkcomplete::domain::{BkTree, CostModel, EditDistance, IndexBuilder, Term, TreeRender};
use bkcomplete::util::testing::{init_test_setup, sample_corpus};
use proptest::prelude::*;
use rstest::rstest;

fn build_tree(words: &[String]) -> (BkTree, EditDistance) {
    let mut metric = EditDistance::with_capacity(CostModel::default(), 10);
    let mut tree = BkTree::new();
    for w in words {
        tree.insert(Term::gene(w.as_str()), &mut metric);
    }
    (tree, metric)
}

fn tree_hits(tree: &BkTree, metric: &mut EditDistance, query: &str, radius: usize) -> BTreeSet<String> {
    tree.search_within_radius(query, radius, metric)
        .into_iter()
        .map(|c| c.term.value.clone())
        .collect()
}

fn scan_hits(words: &[String], metric: &mut EditDistance, query: &str, radius: usize) -> BTreeSet<String> {
    words
        .iter()
        .filter(|w| metric.distance(w, query) <= radius)
        .cloned()
        .collect()
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-e]{0,6}").unwrap(), 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn search_matches_linear_scan(
        words in arb_words(),
        query in prop::string::string_regex("[a-e]{0,6}").unwrap(),
        radius in 0usize..4,
    ) {
        let (tree, mut metric) = build_tree(&words);
        let expected = scan_hits(&words, &mut metric, &query, radius);
        let actual = tree_hits(&tree, &mut metric, &query, radius);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn search_hit_count_matches_linear_scan(
        words in arb_words(),
        query in prop::string::string_regex("[a-e]{0,6}").unwrap(),
        radius in 0usize..4,
    ) {
        // duplicates must all be returned, not collapsed
        let (tree, mut metric) = build_tree(&words);
        let expected = words.iter().filter(|w| metric.distance(w, &query) <= radius).count();
        let actual = tree.search_within_radius(&query, radius, &mut metric).len();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn result_set_independent_of_insertion_order(
        words in arb_words(),
        query in prop::string::string_regex("[a-e]{0,6}").unwrap(),
        radius in 0usize..4,
    ) {
        let mut reversed = words.clone();
        reversed.reverse();

        let (forward_tree, mut metric) = build_tree(&words);
        let (reverse_tree, _) = build_tree(&reversed);

        prop_assert_eq!(
            tree_hits(&forward_tree, &mut metric, &query, radius),
            tree_hits(&reverse_tree, &mut metric, &query, radius)
        );
    }

    #[test]
    fn every_edge_matches_its_distance_key(words in arb_words()) {
        let (tree, mut metric) = build_tree(&words);
        for (_, node) in tree.iter() {
            for (&key, &idx) in &node.children {
                let child = tree.get_node(idx).unwrap();
                prop_assert_eq!(metric.distance(&node.term.value, &child.term.value), key);
            }
        }
    }
}

#[test]
fn given_scenario_corpus_when_searching_cot_within_one_then_finds_cat_and_dot() {
    init_test_setup();
    let words: Vec<String> = ["cat", "cats", "dog", "dot"].iter().map(|s| s.to_string()).collect();
    let (tree, mut metric) = build_tree(&words);

    let mut hits: Vec<(String, usize)> = tree
        .search_within_radius("cot", 1, &mut metric)
        .into_iter()
        .map(|c| (c.term.value.clone(), c.distance))
        .collect();
    hits.sort();

    assert_eq!(hits, vec![("cat".to_string(), 1), ("dot".to_string(), 1)]);
    let rendered = tree.to_tree_string().to_string();
    assert!(rendered.contains("[3] dog (gene)"));
    assert!(rendered.contains("[2] dot (gene)"));
}

#[rstest]
#[case("Cd8", 1, &["Cd8a", "Cd4"])]
#[case("gapdh", 0, &["Gapdh"])]
#[case("FSC", 2, &["FSC-A"])]
#[case("Gzm", 1, &["Gzma", "Gzmb"])]
fn given_sample_corpus_when_searching_then_finds_expected(
    #[case] query: &str,
    #[case] radius: usize,
    #[case] expected: &[&str],
) {
    let mut index = IndexBuilder::default().build(sample_corpus()).unwrap();

    let hits: BTreeSet<String> = index
        .search(query, radius)
        .into_iter()
        .map(|c| c.term.value.clone())
        .collect();

    let expected: BTreeSet<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(hits, expected);
}

#[test]
fn given_sample_corpus_when_building_then_stats_are_consistent() {
    let index = IndexBuilder::default().build(sample_corpus()).unwrap();

    let stats = index.stats();

    assert_eq!(stats.nodes, sample_corpus().len());
    assert!(stats.depth >= 2);
    assert!(stats.leaves >= 1 && stats.leaves < stats.nodes);
    assert!(stats.average_children >= 1.0);
}
