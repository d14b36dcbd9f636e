use regex::Regex;
use std::sync::OnceLock;

use crate::complexity::heuristic_score;
use crate::graph::{Flowchart, GraphBuilder, NodeKind};
use crate::scorer::LineScorer;
use crate::utils::{clip, truncate_label};

const COMMENT_MARKERS: &[&str] = &["//", "#", "/*", "*"];

fn conditional_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^(?:if|else if|elif)\s*\(?").expect("Invalid conditional pattern")
    })
}

fn loop_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^(?:for|while|foreach)\s*\(?").expect("Invalid loop pattern"))
}

/// Line-based flowchart builder for input the structural parser rejects.
///
/// Pattern-matches each line and emits a single linear chain. Some nodes are
/// typed `decision` for rendering purposes, but no branching or merging
/// topology is produced — a known structural limitation relative to the
/// tree-walking builder.
pub(super) struct FallbackBuilder {
    graph: GraphBuilder,
}

impl FallbackBuilder {
    pub(super) fn new() -> Self {
        Self {
            graph: GraphBuilder::new(),
        }
    }

    /// Scans `source` line by line, skipping blanks and comments.
    ///
    /// Scores come from the external collaborator's batch map when the exact
    /// trimmed line is present, else from the local keyword heuristic. A
    /// final `End` node is always appended, deliberately without an incoming
    /// edge — downstream renderers depend on this terminal being present
    /// even after an explicit `return` line.
    pub(super) fn build(mut self, source: &str, scorer: &dyn LineScorer) -> Flowchart {
        let mut prev = self.graph.add_node("Start", NodeKind::Start, 1);

        // One batch call for the whole text; an unreachable scorer yields
        // the empty map and every line falls through to the heuristic.
        let external_scores = scorer.score_lines(source);

        for raw_line in source.lines() {
            let line = raw_line.trim();
            if line.is_empty() || COMMENT_MARKERS.iter().any(|m| line.starts_with(m)) {
                continue;
            }

            let score = external_scores
                .get(line)
                .copied()
                .unwrap_or_else(|| heuristic_score(line));

            if conditional_re().is_match(line) || loop_re().is_match(line) {
                let head = line.find('{').map_or(line, |brace| &line[..brace]).trim();
                let node = self
                    .graph
                    .add_node(clip(head, 30), NodeKind::Decision, score);
                self.graph.add_edge(&prev, &node, None);
                prev = node;
            } else if line.starts_with("return") {
                let label = line.strip_suffix(';').unwrap_or(line).trim_end();
                let node = self.graph.add_node(label, NodeKind::End, 1);
                self.graph.add_edge(&prev, &node, None);
                prev = node;
            } else {
                let label = line.strip_suffix(';').unwrap_or(line).trim_end();
                let node = self
                    .graph
                    .add_node(truncate_label(label), NodeKind::Process, score);
                self.graph.add_edge(&prev, &node, None);
                prev = node;
            }
        }

        self.graph.add_node("End", NodeKind::End, 1);
        self.graph.finish()
    }
}
