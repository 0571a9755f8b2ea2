//! Engine configuration: evaluation weights, search depth and the policy for
//! positions where the side to move is blocked.
//!
//! All values are plain data passed down into evaluation and search, so one
//! engine build can be exercised against several weight profiles.

/// Integer weights for the static evaluator.
///
/// `score = material + stability * positional + mobility * mobility_diff`
/// where the positional tally counts `corner` per corner stone and `edge`
/// per non-corner border stone. Interior stones contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub corner: i32,
    pub edge: i32,
    pub stability: i32,
    pub mobility: i32,
}

impl EvalWeights {
    pub const fn new(corner: i32, edge: i32, stability: i32, mobility: i32) -> Self {
        Self { corner, edge, stability, mobility }
    }

    /// Only stone difference counts
    pub const fn material_only() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::new(100, 10, 25, 15)
    }
}

/// What negamax does when the side to move has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoMovePolicy {
    /// Score the position statically, as a leaf
    #[default]
    StaticEval,
    /// Hand the turn to the opponent at the same remaining depth. Falls back to
    /// a static score only when neither side can move.
    PassTurn,
}

/// Maximum depth accepted by the engine. Each ply holds one board copy on the stack.
pub const MAX_SUPPORTED_DEPTH: u8 = 16;

/// Default lookahead in plies, root ply included
pub const DEFAULT_MAX_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Total lookahead in plies, root ply included. Clamped to `1..=MAX_SUPPORTED_DEPTH`.
    pub max_depth: u8,
    pub weights: EvalWeights,
    pub no_move_policy: NoMovePolicy,
}

impl EngineConfig {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth: max_depth.clamp(1, MAX_SUPPORTED_DEPTH),
            ..Self::default()
        }
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_no_move_policy(mut self, policy: NoMovePolicy) -> Self {
        self.no_move_policy = policy;
        self
    }

    /// Effective depth after clamping
    pub fn depth(&self) -> u8 {
        self.max_depth.clamp(1, MAX_SUPPORTED_DEPTH)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            weights: EvalWeights::default(),
            no_move_policy: NoMovePolicy::default(),
        }
    }
}
