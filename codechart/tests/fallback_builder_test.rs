//! Line-based fallback builder behavior on input the structural parser
//! rejects.

#![allow(clippy::unwrap_used)] // Tests use unwrap for clarity

use codechart::graph::{Bucket, NodeKind};
use codechart::scorer::LineScorer;
use codechart::{build_flowchart, build_flowchart_with, Flowchart};
use rustc_hash::FxHashMap;

/// Scorer stand-in returning a fixed map, as the remote adapter would.
struct MapScorer(FxHashMap<String, usize>);

impl LineScorer for MapScorer {
    fn score_lines(&self, _source: &str) -> FxHashMap<String, usize> {
        self.0.clone()
    }
}

fn labels(chart: &Flowchart) -> Vec<&str> {
    chart.nodes.iter().map(|n| n.label.as_str()).collect()
}

#[test]
fn test_unparsable_input_falls_back_without_error() {
    let source = "int main() {\n    if (x > 0) {\n        return 1;\n    }\n}\n";
    let chart = build_flowchart(source);

    assert_eq!(chart.nodes[0].kind, NodeKind::Start);
    let last = chart.nodes.last().unwrap();
    assert_eq!(last.kind, NodeKind::End);
    assert_eq!(last.label, "End");
}

#[test]
fn test_fallback_is_a_linear_chain() {
    let source = "int main() {\n    if (x > 0) {\n        return 1;\n    }\n}\n";
    let chart = build_flowchart(source);

    // Start, "int main() {", the if decision, the return, two "}" lines,
    // and the trailing End bookend.
    assert_eq!(
        labels(&chart),
        vec![
            "Start",
            "int main() {",
            "if (x > 0)",
            "return 1",
            "}",
            "}",
            "End"
        ]
    );

    // Every node except the bookend is chained to its predecessor.
    assert_eq!(chart.edges.len(), chart.nodes.len() - 2);
    assert!(chart.edges.iter().all(|e| e.label.is_none()));
}

#[test]
fn test_trailing_end_node_has_no_incoming_edge() {
    // The bookend is appended even after an explicit return line; its
    // in-degree 0 is long-standing behavior renderers rely on.
    let chart = build_flowchart("set x to 10\nreturn x;\n");
    let end = chart.nodes.last().unwrap();
    assert_eq!(end.label, "End");
    assert!(chart.edges.iter().all(|e| e.to != end.id));
    assert!(chart.edges.iter().all(|e| e.from != end.id));
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let source = "set x to 10\n\n// comment\n# another\n/* block\n* continued\nset y to 2\n";
    let chart = build_flowchart(source);
    assert_eq!(labels(&chart), vec!["Start", "set x to 10", "set y to 2", "End"]);
}

#[test]
fn test_conditional_and_loop_lines_become_decisions() {
    let source = "set total to 0\nforeach (item in items) {\nelse if (x) {\nwhile (y) {\n";
    let chart = build_flowchart(source);

    let decisions: Vec<&str> = chart
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Decision)
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(decisions, vec!["foreach (item in items)", "else if (x)", "while (y)"]);
}

#[test]
fn test_return_line_loses_trailing_semicolon() {
    let chart = build_flowchart("set x to 10\nreturn total;\n");
    let ret = chart
        .nodes
        .iter()
        .find(|n| n.label == "return total")
        .unwrap();
    assert_eq!(ret.kind, NodeKind::End);
}

#[test]
fn test_external_scores_override_heuristic() {
    let source = "set x to 10\nif (x > 5) {\nprint x\n}\n";
    let mut scores = FxHashMap::default();
    scores.insert("if (x > 5) {".to_owned(), 7);
    let chart = build_flowchart_with(source, &MapScorer(scores));

    let decision = chart
        .nodes
        .iter()
        .find(|n| n.kind == NodeKind::Decision)
        .unwrap();
    assert_eq!(decision.complexity_score, 7);
    assert_eq!(decision.complexity_bucket, Bucket::Medium);

    // Lines absent from the map keep their heuristic score.
    let process = chart.nodes.iter().find(|n| n.label == "print x").unwrap();
    assert_eq!(process.complexity_score, 1);
}

#[test]
fn test_empty_scorer_map_means_heuristic_everywhere() {
    let source = "set x to 10\nif (x > 5) {\n";
    let chart = build_flowchart_with(source, &MapScorer(FxHashMap::default()));
    let decision = chart
        .nodes
        .iter()
        .find(|n| n.kind == NodeKind::Decision)
        .unwrap();
    // 1 base + 1 for the if keyword.
    assert_eq!(decision.complexity_score, 2);
}

#[test]
fn test_long_fallback_line_is_truncated_with_ellipsis() {
    let long = format!("call {}", "a".repeat(40));
    let source = format!("set x to 10\n{long}\n");
    let chart = build_flowchart(&source);
    let node = chart
        .nodes
        .iter()
        .find(|n| n.label.ends_with("..."))
        .unwrap();
    assert_eq!(node.label.chars().count(), 30);
}
