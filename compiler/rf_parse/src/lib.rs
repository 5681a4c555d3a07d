//! Reader for Factor' source text.
//!
//! Reading happens in two steps:
//!
//! ```text
//! source ──lex──► TokenList ──parse──► ParsedProgram ──read──► Term
//! ```
//!
//! [`parse`] checks the grammar and builds a spanned parse tree; [`read`]
//! additionally converts that tree into [`rf_ir::Term`] values.

mod cursor;
mod error;
mod grammar;
mod node;
mod read;

use rf_ir::{Eff, Prog, Term};
use tracing::debug;

pub use error::{ParseError, ParseErrorKind};
pub use node::{DefinitionNode, EffectNode, Node, NodeKind, ParsedProgram};
pub use read::{read_effect_node, read_node, read_tree};

use grammar::Parser;

/// Parse `source` into a parse tree.
///
/// The empty string (or whitespace only) parses to an empty program.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<ParsedProgram, ParseError> {
    let tokens = rf_lexer::lex(source)?;
    let program = Parser::new(&tokens).parse_program()?;
    debug!(nodes = program.nodes.len(), "parsed");
    Ok(program)
}

/// Read `source` into a single term.
///
/// A source holding exactly one top-level term reads as that term;
/// anything else (including nothing) reads as a [`Term::Prog`].
pub fn read(source: &str) -> Result<Term, ParseError> {
    let terms = read_program(source)?.into_terms();
    match <[Term; 1]>::try_from(terms) {
        Ok([term]) => Ok(term),
        Err(terms) => Ok(Term::Prog(Prog::new(terms))),
    }
}

/// Read `source` as a program, even when it holds a single term.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn read_program(source: &str) -> Result<Prog, ParseError> {
    read_tree(&parse(source)?)
}

/// Read a standalone stack effect clause such as `( x y -- y x )`.
pub fn read_effect(source: &str) -> Result<Eff, ParseError> {
    let tokens = rf_lexer::lex(source)?;
    let mut parser = Parser::new(&tokens);
    let effect = parser.parse_effect()?;
    parser.expect_end()?;
    Ok(read_effect_node(&effect))
}
