//! Parse tree produced by the grammar and consumed by the reader.

use rf_ir::Span;

/// A parsed source unit: the top-level nodes in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedProgram {
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Bool(bool),
    /// Digit string; converted to an integer by the reader.
    Num(String),
    Str(String),
    Array(Vec<Node>),
    Word(String),
    Quotation(Vec<Node>),
    Definition(DefinitionNode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionNode {
    pub name: String,
    pub name_span: Span,
    pub effect: EffectNode,
    pub body: Vec<Node>,
}

/// `( pre -- post )`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectNode {
    pub pre: Vec<String>,
    pub post: Vec<String>,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}
