//! The Read transform: parse tree to terms.

use rf_ir::{Def, Eff, Prog, Term};
use rf_stack::ensure_sufficient_stack;

use crate::error::{ParseError, ParseErrorKind};
use crate::node::{EffectNode, Node, NodeKind, ParsedProgram};

/// Convert a whole parsed program into a [`Prog`].
pub fn read_tree(program: &ParsedProgram) -> Result<Prog, ParseError> {
    let terms = read_nodes(&program.nodes)?;
    Ok(Prog::new(terms))
}

/// Convert one parse-tree node, recursing into arrays, quotations and
/// definition bodies.
pub fn read_node(node: &Node) -> Result<Term, ParseError> {
    ensure_sufficient_stack(|| match &node.kind {
        NodeKind::Bool(b) => Ok(Term::Bool(*b)),
        NodeKind::Num(digits) => Term::num_from_token(digits)
            .map_err(|e| ParseError::new(ParseErrorKind::from_term_error(e), node.span)),
        NodeKind::Str(s) => Ok(Term::str(s.as_str())),
        NodeKind::Array(values) => Ok(Term::ary(read_nodes(values)?)),
        NodeKind::Word(name) => Ok(Term::word(name.as_str())),
        NodeKind::Quotation(body) => Ok(Term::quot(read_nodes(body)?)),
        NodeKind::Definition(def) => Ok(Term::Def(Def::new(
            def.name.as_str(),
            read_effect_node(&def.effect),
            read_nodes(&def.body)?,
        ))),
    })
}

pub fn read_effect_node(effect: &EffectNode) -> Eff {
    Eff::new(effect.pre.iter().cloned(), effect.post.iter().cloned())
}

fn read_nodes(nodes: &[Node]) -> Result<Vec<Term>, ParseError> {
    nodes.iter().map(read_node).collect()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
