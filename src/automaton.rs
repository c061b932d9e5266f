/// A state ID in the automaton
pub type StateId = usize;

/// Acceptance behavior of a single state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKind {
    /// Entry point; accepts nothing itself
    Start,
    /// Reaching this with no remaining input means success; accepts nothing
    Terminal,
    /// Accepts exactly one character
    Literal(char),
    /// Accepts any single character
    Wildcard,
    /// Wraps another state and delegates its acceptance predicate to it.
    /// `min` is 0 for a zero-or-more repeat and 1 for one-or-more.
    Repeat { min: u32, inner: StateId },
}

/// A node in the automaton: a kind plus an ordered list of outgoing edges.
/// Edge order only affects traversal order, never the match result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub kind: StateKind,
    pub edges: Vec<StateId>,
}

/// The compiled graph of states. Owns every state it contains; edges are
/// arena indices, so repeat self-loops need no shared ownership.
///
/// Immutable once compilation returns, and therefore safe to match against
/// from multiple threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    /// All states in the automaton
    pub states: Vec<State>,
    /// Entry state; never the target of any edge
    pub start: StateId,
    /// Accepting state; has no outgoing edges
    pub terminal: StateId,
}

impl Automaton {
    /// Create an automaton containing only the start and terminal states.
    pub fn new() -> Self {
        let states = vec![
            State {
                kind: StateKind::Start,
                edges: Vec::new(),
            },
            State {
                kind: StateKind::Terminal,
                edges: Vec::new(),
            },
        ];
        Self {
            states,
            start: 0,
            terminal: 1,
        }
    }

    /// Add a new state with no edges and return its ID
    pub fn add_state(&mut self, kind: StateKind) -> StateId {
        let id = self.states.len();
        self.states.push(State {
            kind,
            edges: Vec::new(),
        });
        id
    }

    /// Append an edge from `from` to `to`, returning its slot index in
    /// `from`'s edge list
    pub fn connect(&mut self, from: StateId, to: StateId) -> usize {
        let edges = &mut self.states[from].edges;
        edges.push(to);
        edges.len() - 1
    }

    /// Rewrite the existing edge at `(from, slot)` to point at `to` instead
    /// of its prior target
    pub fn splice(&mut self, from: StateId, slot: usize, to: StateId) {
        self.states[from].edges[slot] = to;
    }

    /// Borrow a state by ID
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Does the state accept this character?
    ///
    /// Repeat states delegate to the state they wrap; the recursion bottoms
    /// out because repeat chains always end at an ordinary atom.
    pub fn check_self(&self, id: StateId, ch: char) -> bool {
        match self.states[id].kind {
            StateKind::Start | StateKind::Terminal => false,
            StateKind::Literal(expected) => expected == ch,
            StateKind::Wildcard => true,
            StateKind::Repeat { inner, .. } => self.check_self(inner, ch),
        }
    }

    /// A repeat that may be skipped without consuming any input
    pub fn is_skippable_repeat(&self, id: StateId) -> bool {
        matches!(self.states[id].kind, StateKind::Repeat { min: 0, .. })
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
