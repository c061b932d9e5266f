//! Restricted regular-expression matching over a spliced-chain NFA
//!
//! This library compiles a minimal pattern language (ASCII literals, the
//! `.` wildcard, and the postfix quantifiers `*` and `+`, each applying to
//! the single atom before it) into a graph of states, then decides whether
//! an input string is fully matched by simulating that graph with a
//! worklist of (state, position) pairs.
//!
//! The construction is a single left-to-right pass: atoms extend a chain of
//! states, and a quantifier splices a repeat state into the edge that
//! currently points at the atom it wraps. The compiled automaton is
//! immutable and can be matched against any number of inputs, concurrently.

pub mod automaton;
pub mod compiler;
pub mod matcher;

pub use automaton::{Automaton, State, StateId, StateKind};
pub use compiler::Compiler;
pub use matcher::Matcher;

/// The result of compiling a pattern to an automaton
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `*` or `+` with no atom before it to quantify
    LeadingQuantifier(char),
    /// A pattern character outside the supported alphabet
    UnsupportedToken(char),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::LeadingQuantifier(quantifier) => {
                write!(f, "quantifier '{}' has no preceding atom", quantifier)
            }
            CompileError::UnsupportedToken(token) => {
                write!(f, "unsupported token: '{}'", token)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Compile a pattern into an automaton.
pub fn compile(pattern: &str) -> CompileResult<Automaton> {
    Compiler::new().compile(pattern)
}

/// Check whether the automaton fully matches the input string.
pub fn matches(automaton: &Automaton, input: &str) -> bool {
    Matcher::new(automaton).is_match(input)
}
