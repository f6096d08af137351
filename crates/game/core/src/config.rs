/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Number of hex steps an actor may travel during its move sub-phase.
    pub move_range: u32,

    /// Duration of a single step's placement transition, in milliseconds.
    pub step_duration_ms: u64,

    /// Upper bound on route iterations before the path finder gives up.
    pub max_route_steps: usize,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of notices a single turn operation can emit.
    pub const MAX_TURN_NOTICES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVE_RANGE: u32 = 3;
    pub const DEFAULT_STEP_DURATION_MS: u64 = 250;
    pub const DEFAULT_MAX_ROUTE_STEPS: usize = 1024;

    pub fn new() -> Self {
        Self {
            move_range: Self::DEFAULT_MOVE_RANGE,
            step_duration_ms: Self::DEFAULT_STEP_DURATION_MS,
            max_route_steps: Self::DEFAULT_MAX_ROUTE_STEPS,
        }
    }

    pub fn with_move_range(mut self, move_range: u32) -> Self {
        self.move_range = move_range;
        self
    }

    pub fn with_step_duration_ms(mut self, step_duration_ms: u64) -> Self {
        self.step_duration_ms = step_duration_ms;
        self
    }

    pub fn with_max_route_steps(mut self, max_route_steps: usize) -> Self {
        self.max_route_steps = max_route_steps;
        self
    }

    /// Step duration as a [`core::time::Duration`].
    pub fn step_duration(&self) -> core::time::Duration {
        core::time::Duration::from_millis(self.step_duration_ms)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
