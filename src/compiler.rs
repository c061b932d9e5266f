use crate::automaton::{Automaton, StateId, StateKind};
use crate::{CompileError, CompileResult};

/// Metacharacters reserved for features this pattern language does not
/// implement. They are rejected rather than silently treated as literals.
const RESERVED: &[char] = &['|', '(', ')', '[', ']', '{', '}', '?', '^', '$', '\\'];

/// Compiler that turns a pattern string into an automaton in a single
/// left-to-right pass.
///
/// The pass maintains the most recently appended chain state (`last_atom`)
/// together with the exact edge-list slot that references it. A quantifier
/// wraps `last_atom` in a repeat state and rewrites that slot, so splicing
/// always targets the true predecessor in the chain rather than a fixed
/// anchor. Getting this wrong silently mis-wires any pattern where a
/// quantifier follows more than one atom (`ab*c`).
pub struct Compiler {
    automaton: Automaton,
    /// Most recent chain state: an atom, or the repeat that replaced one
    last_atom: Option<StateId>,
    /// Edge-list slot currently referencing `last_atom`
    splice_slot: Option<(StateId, usize)>,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self {
            automaton: Automaton::new(),
            last_atom: None,
            splice_slot: None,
        }
    }

    /// Compile a pattern into an automaton
    pub fn compile(mut self, pattern: &str) -> CompileResult<Automaton> {
        for token in pattern.chars() {
            match token {
                '*' => self.wrap_repeat(0, token)?,
                '+' => self.wrap_repeat(1, token)?,
                '.' => self.push_atom(StateKind::Wildcard),
                _ if RESERVED.contains(&token) || !token.is_ascii() => {
                    return Err(CompileError::UnsupportedToken(token));
                }
                _ => self.push_atom(StateKind::Literal(token)),
            }
        }

        // The terminal hangs off whatever the chain ends with; for an empty
        // pattern that is the start state itself.
        let tail = self.last_atom.unwrap_or(self.automaton.start);
        self.automaton.connect(tail, self.automaton.terminal);

        log::debug!(
            "compiled pattern {:?} into {} states",
            pattern,
            self.automaton.states.len()
        );
        Ok(self.automaton)
    }

    /// Append an ordinary atom (literal or wildcard) to the chain
    fn push_atom(&mut self, kind: StateKind) {
        let atom = self.automaton.add_state(kind);
        let predecessor = self.last_atom.unwrap_or(self.automaton.start);
        let slot = self.automaton.connect(predecessor, atom);
        self.last_atom = Some(atom);
        self.splice_slot = Some((predecessor, slot));
    }

    /// Wrap the last atom in a repeat state and splice it into the chain
    fn wrap_repeat(&mut self, min: u32, quantifier: char) -> CompileResult<()> {
        // Both fields are set together whenever an atom exists.
        let (Some(inner), Some((predecessor, slot))) = (self.last_atom, self.splice_slot) else {
            return Err(CompileError::LeadingQuantifier(quantifier));
        };

        let repeat = self.automaton.add_state(StateKind::Repeat { min, inner });
        self.automaton.splice(predecessor, slot, repeat);
        self.automaton.connect(repeat, inner);
        self.automaton.connect(repeat, repeat); // self-loop for repetition
        log::trace!(
            "spliced repeat {} over state {} at edge ({}, {})",
            repeat,
            inner,
            predecessor,
            slot
        );

        // Subsequent atoms attach after the repeat, and a following
        // quantifier wraps the repeat itself (a degenerate but accepted
        // double-repeat). The slot still references the same edge cell,
        // which now holds the repeat.
        self.last_atom = Some(repeat);
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn empty_pattern_links_start_to_terminal() {
        let automaton = compile("").unwrap();
        assert_eq!(
            automaton.state(automaton.start).edges,
            vec![automaton.terminal]
        );
    }

    #[test]
    fn literal_chain_wiring() {
        let automaton = compile("ab").unwrap();
        // start(0), terminal(1), a(2), b(3)
        assert_eq!(automaton.state(0).edges, vec![2]);
        assert_eq!(automaton.state(2).kind, StateKind::Literal('a'));
        assert_eq!(automaton.state(2).edges, vec![3]);
        assert_eq!(automaton.state(3).kind, StateKind::Literal('b'));
        assert_eq!(automaton.state(3).edges, vec![1]);
    }

    #[test]
    fn quantifier_splices_at_true_predecessor() {
        let automaton = compile("ab*c").unwrap();
        // start(0), terminal(1), a(2), b(3), repeat(4), c(5)
        let repeat = 4;
        assert_eq!(
            automaton.state(repeat).kind,
            StateKind::Repeat { min: 0, inner: 3 }
        );
        // The edge a -> b was rewritten to a -> repeat; start's edge to a is
        // untouched.
        assert_eq!(automaton.state(0).edges, vec![2]);
        assert_eq!(automaton.state(2).edges, vec![repeat]);
        // Repeat edges: wrapped atom, self-loop, then the following atom.
        assert_eq!(automaton.state(repeat).edges, vec![3, repeat, 5]);
        assert_eq!(automaton.state(5).edges, vec![1]);
        // The bypassed atom keeps no continuation of its own.
        assert!(automaton.state(3).edges.is_empty());
    }

    #[test]
    fn leading_quantifier_is_rejected() {
        assert_eq!(
            compile("*abc").unwrap_err(),
            CompileError::LeadingQuantifier('*')
        );
        assert_eq!(
            compile("+x").unwrap_err(),
            CompileError::LeadingQuantifier('+')
        );
    }

    #[test]
    fn unsupported_tokens_are_rejected() {
        assert_eq!(
            compile("caf\u{e9}").unwrap_err(),
            CompileError::UnsupportedToken('\u{e9}')
        );
        assert_eq!(compile("(x)").unwrap_err(), CompileError::UnsupportedToken('('));
        assert_eq!(compile("a|b").unwrap_err(), CompileError::UnsupportedToken('|'));
        assert_eq!(compile("a?").unwrap_err(), CompileError::UnsupportedToken('?'));
    }

    #[test]
    fn one_or_more_wiring() {
        let automaton = compile("x+").unwrap();
        // start(0), terminal(1), x(2), repeat(3)
        let repeat = 3;
        assert_eq!(
            automaton.state(repeat).kind,
            StateKind::Repeat { min: 1, inner: 2 }
        );
        assert_eq!(automaton.state(0).edges, vec![repeat]);
        assert_eq!(automaton.state(repeat).edges, vec![2, repeat, 1]);
    }

    #[test]
    fn double_quantifier_wraps_the_previous_repeat() {
        let automaton = compile("a**").unwrap();
        // start(0), terminal(1), a(2), inner repeat(3), outer repeat(4)
        assert_eq!(
            automaton.state(4).kind,
            StateKind::Repeat { min: 0, inner: 3 }
        );
        assert_eq!(automaton.state(0).edges, vec![4]);
        assert_eq!(automaton.state(4).edges, vec![3, 4, 1]);
    }

    #[test]
    fn start_state_never_gains_incoming_edges() {
        for pattern in ["", "abc", "a*b+c.", "a**", ".*"] {
            let automaton = compile(pattern).unwrap();
            for state in &automaton.states {
                assert!(!state.edges.contains(&automaton.start));
            }
            assert!(automaton.state(automaton.terminal).edges.is_empty());
        }
    }
}
