//! Search parameters

use std::env::VarError;

use crate::{error::EngineError, HEIGHT, WIDTH};

/// Default depth of the alpha-beta search in plies
pub const ALPHA_BETA_DEPTH: u32 = 5;
/// Default depth of the expectimax search in plies
pub const EXPECTIMAX_DEPTH: u32 = 4;
/// No game lasts longer than this many plies
pub const MAX_DEPTH: u32 = (WIDTH * HEIGHT) as u32;

/// Environment variable overriding [`SearchConfig::alpha_beta_depth`]
pub const ALPHA_BETA_DEPTH_VAR: &str = "C4_ALPHA_BETA_DEPTH";
/// Environment variable overriding [`SearchConfig::expectimax_depth`]
pub const EXPECTIMAX_DEPTH_VAR: &str = "C4_EXPECTIMAX_DEPTH";

/// How the expectimax root turns per-column values into a choice
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RootSelection {
    /// Each column is recorded with the best value seen so far across the
    /// scan, then the highest pair wins with ties toward the larger column.
    /// The running value never decreases, so this settles on the last legal
    /// column.
    RunningBest,
    /// Each column is recorded with its own expected value.
    PerColumn,
}

impl Default for RootSelection {
    fn default() -> Self {
        RootSelection::RunningBest
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    pub alpha_beta_depth: u32,
    pub expectimax_depth: u32,
    pub expectimax_root: RootSelection,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha_beta_depth: ALPHA_BETA_DEPTH,
            expectimax_depth: EXPECTIMAX_DEPTH,
            expectimax_root: RootSelection::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_alpha_beta_depth(mut self, depth: u32) -> Self {
        self.alpha_beta_depth = depth;
        self
    }

    pub fn with_expectimax_depth(mut self, depth: u32) -> Self {
        self.expectimax_depth = depth;
        self
    }

    pub fn with_expectimax_root(mut self, selection: RootSelection) -> Self {
        self.expectimax_root = selection;
        self
    }

    /// Applies depth overrides from the environment, ignoring unset variables
    ///
    /// A variable that is set but not a number fails with `InvalidSetting`.
    pub fn with_env_overrides(mut self) -> Result<Self, EngineError> {
        if let Some(depth) = depth_from_env(ALPHA_BETA_DEPTH_VAR)? {
            self.alpha_beta_depth = depth;
        }
        if let Some(depth) = depth_from_env(EXPECTIMAX_DEPTH_VAR)? {
            self.expectimax_depth = depth;
        }
        self.validate()
    }

    /// Checks both depths are within 1 and [`MAX_DEPTH`]
    pub fn validate(self) -> Result<Self, EngineError> {
        validate_depth(self.alpha_beta_depth)?;
        validate_depth(self.expectimax_depth)?;
        Ok(self)
    }
}

pub(crate) fn validate_depth(depth: u32) -> Result<u32, EngineError> {
    if depth == 0 || depth > MAX_DEPTH {
        Err(EngineError::InvalidDepth(depth))
    } else {
        Ok(depth)
    }
}

fn depth_from_env(var: &str) -> Result<Option<u32>, EngineError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| EngineError::InvalidSetting {
                name: var.to_string(),
                value,
            }),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(EngineError::InvalidSetting {
            name: var.to_string(),
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}
