use crate::automaton::{Automaton, StateId};
use std::collections::{HashSet, VecDeque};

/// A matcher that simulates an automaton against an input string
///
/// This is a breadth-first worklist simulation over (state, position)
/// pairs: an NFA simulation without a precomputed epsilon closure. The
/// automaton is only read, so one automaton can serve many matchers and
/// many threads at once.
pub struct Matcher<'a> {
    automaton: &'a Automaton,
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given automaton
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// Check if the entire input matches
    ///
    /// A pair (state, pos) means the simulation stands at `state` with
    /// `pos` characters consumed. Stepping to a successor consumes one
    /// character if that successor accepts it. A successor that is a
    /// skippable repeat may also be entered without consuming anything,
    /// which models "repeat zero times": from inside the repeat, its
    /// continuation edges become reachable at the same position. The
    /// visited set bounds the epsilon steps, so chained or nested repeats
    /// cannot loop forever.
    pub fn is_match(&self, input: &str) -> bool {
        let chars: Vec<char> = input.chars().collect();

        let mut worklist = VecDeque::new();
        let mut visited: HashSet<(StateId, usize)> = HashSet::new();
        visited.insert((self.automaton.start, 0));
        worklist.push_back((self.automaton.start, 0));

        while let Some((state, pos)) = worklist.pop_front() {
            let edges = &self.automaton.state(state).edges;

            if pos == chars.len() {
                // The whole string is consumed; this path accepts if the
                // terminal is adjacent, possibly behind repeats that are
                // allowed to be skipped.
                if edges.contains(&self.automaton.terminal) {
                    log::trace!("accepted at state {} after {} characters", state, pos);
                    return true;
                }
                for &next in edges {
                    if self.automaton.is_skippable_repeat(next) && visited.insert((next, pos)) {
                        worklist.push_back((next, pos));
                    }
                }
                continue;
            }

            let ch = chars[pos];
            for &next in edges {
                if self.automaton.check_self(next, ch) && visited.insert((next, pos + 1)) {
                    worklist.push_back((next, pos + 1));
                }
                if self.automaton.is_skippable_repeat(next) && visited.insert((next, pos)) {
                    worklist.push_back((next, pos));
                }
            }
        }

        false
    }
}
