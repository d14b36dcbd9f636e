use std::collections::VecDeque;

use ruff_python_ast::{self as ast, Stmt};
use ruff_text_size::{Ranged, TextRange};

use crate::complexity::{elif_chain_score, statement_score};
use crate::graph::{Flowchart, GraphBuilder, NodeId, NodeKind};
use crate::utils::{collapse_whitespace, truncate_label};

/// Tree-walking flowchart builder.
///
/// Converts a statement sequence into a graph fragment with real
/// branching/merging/looping topology by recursing the way the syntax tree
/// nests. One instance per conversion; the node counter lives on the inner
/// [`GraphBuilder`].
pub(super) struct StructuredBuilder<'a> {
    source: &'a str,
    graph: GraphBuilder,
}

/// Slices the statement or expression text out of the source and joins it
/// onto one line, so a label never carries embedded newlines.
fn snippet(source: &str, range: TextRange) -> String {
    collapse_whitespace(&source[range.start().to_usize()..range.end().to_usize()])
}

/// Finds the first function definition in the module, breadth-first, so a
/// shallower definition wins over one nested deeper in the same prefix.
fn first_function_def(body: &[Stmt]) -> Option<&ast::StmtFunctionDef> {
    let mut queue: VecDeque<&Stmt> = body.iter().collect();
    while let Some(stmt) = queue.pop_front() {
        if let Stmt::FunctionDef(func) = stmt {
            return Some(func);
        }
        for nested in child_bodies(stmt) {
            queue.extend(nested.iter());
        }
    }
    None
}

fn child_bodies(stmt: &Stmt) -> Vec<&[Stmt]> {
    match stmt {
        Stmt::If(if_stmt) => {
            let mut bodies = vec![if_stmt.body.as_slice()];
            bodies.extend(if_stmt.elif_else_clauses.iter().map(|c| c.body.as_slice()));
            bodies
        }
        Stmt::For(for_stmt) => vec![&for_stmt.body, &for_stmt.orelse],
        Stmt::While(while_stmt) => vec![&while_stmt.body, &while_stmt.orelse],
        Stmt::With(with_stmt) => vec![&with_stmt.body],
        Stmt::Try(try_stmt) => {
            let mut bodies = vec![try_stmt.body.as_slice()];
            for handler in &try_stmt.handlers {
                let ast::ExceptHandler::ExceptHandler(except_handler) = handler;
                bodies.push(&except_handler.body);
            }
            bodies.push(&try_stmt.orelse);
            bodies.push(&try_stmt.finalbody);
            bodies
        }
        Stmt::ClassDef(class_def) => vec![&class_def.body],
        Stmt::Match(match_stmt) => match_stmt
            .cases
            .iter()
            .map(|case| case.body.as_slice())
            .collect(),
        _ => Vec::new(),
    }
}

impl<'a> StructuredBuilder<'a> {
    pub(super) fn new(source: &'a str) -> Self {
        Self {
            source,
            graph: GraphBuilder::new(),
        }
    }

    /// Builds the full flowchart for a parsed module.
    ///
    /// The unit converted is the first function definition when one exists,
    /// else the top-level statement sequence. No closing end node is forced:
    /// a body ending in `return` already terminates the chart, and multiple
    /// terminal nodes are valid.
    pub(super) fn build(mut self, module: &ast::ModModule) -> Flowchart {
        let start = self.graph.add_node("Start", NodeKind::Start, 1);
        if let Some(func) = first_function_def(&module.body) {
            self.process_sequence(&func.body, start);
        } else {
            self.process_sequence(&module.body, start);
        }
        self.graph.finish()
    }

    /// Converts a statement sequence left to right, chaining from
    /// `predecessor`, and returns the id the caller should chain onward from.
    fn process_sequence(&mut self, statements: &[Stmt], predecessor: NodeId) -> NodeId {
        let mut prev = predecessor;
        for stmt in statements {
            prev = match stmt {
                Stmt::If(if_stmt) => {
                    let score = statement_score(stmt);
                    self.process_conditional(
                        &if_stmt.test,
                        &if_stmt.body,
                        &if_stmt.elif_else_clauses,
                        score,
                        prev,
                    )
                }
                Stmt::For(for_stmt) => {
                    self.process_loop("For Loop".to_owned(), statement_score(stmt), &for_stmt.body, prev)
                }
                Stmt::While(while_stmt) => {
                    let condition = truncate_label(&snippet(self.source, while_stmt.test.range()));
                    self.process_loop(
                        format!("Loop {condition}"),
                        statement_score(stmt),
                        &while_stmt.body,
                        prev,
                    )
                }
                Stmt::Return(return_stmt) => {
                    let value = return_stmt
                        .value
                        .as_deref()
                        .map_or_else(|| "None".to_owned(), |expr| snippet(self.source, expr.range()));
                    let node = self.graph.add_node(
                        truncate_label(&format!("Return {value}")),
                        NodeKind::End,
                        1,
                    );
                    self.graph.add_edge(&prev, &node, None);
                    node
                }
                other => {
                    let text = snippet(self.source, other.range());
                    let node = self
                        .graph
                        .add_node(truncate_label(&text), NodeKind::Process, 1);
                    self.graph.add_edge(&prev, &node, None);
                    node
                }
            };
        }
        prev
    }

    /// Emits a decision node plus both branches and their merge.
    ///
    /// With no else branch the decision gets a `No` edge straight to the
    /// merge node; with one, the false branch itself supplies the path and
    /// both branch tails converge unlabeled.
    fn process_conditional(
        &mut self,
        test: &ast::Expr,
        body: &[Stmt],
        clauses: &[ast::ElifElseClause],
        score: usize,
        predecessor: NodeId,
    ) -> NodeId {
        let condition = truncate_label(&snippet(self.source, test.range()));
        let decision = self
            .graph
            .add_node(format!("Is {condition}?"), NodeKind::Decision, score);
        self.graph.add_edge(&predecessor, &decision, None);

        let last_true = self.process_sequence(body, decision.clone());

        if clauses.is_empty() {
            let merge = self.graph.add_node("End If", NodeKind::Merge, 1);
            self.graph.add_edge(&last_true, &merge, None);
            self.graph.add_edge(&decision, &merge, Some("No"));
            merge
        } else {
            let last_false = self.process_clause_chain(clauses, decision);
            let merge = self.graph.add_node("End If", NodeKind::Merge, 1);
            self.graph.add_edge(&last_true, &merge, None);
            self.graph.add_edge(&last_false, &merge, None);
            merge
        }
    }

    /// Converts an `elif`/`else` clause chain. An `elif` becomes a nested
    /// decision (with its own merge), a final bare `else` is just the false
    /// branch's statement sequence.
    fn process_clause_chain(
        &mut self,
        clauses: &[ast::ElifElseClause],
        predecessor: NodeId,
    ) -> NodeId {
        // Callers only pass non-empty chains.
        let Some((clause, rest)) = clauses.split_first() else {
            return predecessor;
        };
        match &clause.test {
            Some(test) => {
                let score = elif_chain_score(clauses);
                self.process_conditional(test, &clause.body, rest, score, predecessor)
            }
            None => self.process_sequence(&clause.body, predecessor),
        }
    }

    /// Emits a loop header decision, the cyclic `Next` edge from the body's
    /// tail, and the `Done` edge into an `End Loop` node. The back edge is
    /// the one place the graph is not a DAG.
    fn process_loop(
        &mut self,
        label: String,
        score: usize,
        body: &[Stmt],
        predecessor: NodeId,
    ) -> NodeId {
        let header = self.graph.add_node(label, NodeKind::Decision, score);
        self.graph.add_edge(&predecessor, &header, None);

        let last_body = self.process_sequence(body, header.clone());
        self.graph.add_edge(&last_body, &header, Some("Next"));

        let end_loop = self.graph.add_node("End Loop", NodeKind::Process, 1);
        self.graph.add_edge(&header, &end_loop, Some("Done"));
        end_loop
    }
}
