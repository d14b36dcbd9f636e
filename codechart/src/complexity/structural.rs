use ruff_python_ast::visitor::{self, Visitor};
use ruff_python_ast::{self as ast, Expr, Stmt};

/// Weighted score counter over a syntax subtree.
///
/// Starts at 1 and adds 1 for every conditional, loop, except handler and
/// `with` block found anywhere below the entry point, plus `k - 1` for each
/// boolean expression combining `k` operands. An `elif` clause counts as a
/// conditional of its own, matching how a nested `if` would score.
struct StructuralScore {
    score: usize,
}

impl<'a> Visitor<'a> for StructuralScore {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::If(if_stmt) => {
                self.score += 1;
                for clause in &if_stmt.elif_else_clauses {
                    if clause.test.is_some() {
                        self.score += 1;
                    }
                }
            }
            Stmt::For(_) | Stmt::While(_) | Stmt::With(_) => self.score += 1,
            Stmt::Try(try_stmt) => self.score += try_stmt.handlers.len(),
            _ => {}
        }
        visitor::walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        if let Expr::BoolOp(bool_op) = expr {
            if bool_op.values.len() > 1 {
                self.score += bool_op.values.len() - 1;
            }
        }
        visitor::walk_expr(self, expr);
    }
}

/// Scores a whole statement, including everything nested within it.
#[must_use]
pub fn statement_score(stmt: &Stmt) -> usize {
    let mut scorer = StructuralScore { score: 1 };
    scorer.visit_stmt(stmt);
    scorer.score
}

/// Scores an `elif`/`else` clause chain as if it were a standalone
/// conditional, the way the chain would score had it been written as a
/// nested `if` statement.
pub(crate) fn elif_chain_score(clauses: &[ast::ElifElseClause]) -> usize {
    let mut scorer = StructuralScore { score: 1 };
    for clause in clauses {
        if let Some(test) = &clause.test {
            scorer.score += 1;
            scorer.visit_expr(test);
        }
        for stmt in &clause.body {
            scorer.visit_stmt(stmt);
        }
    }
    scorer.score
}
