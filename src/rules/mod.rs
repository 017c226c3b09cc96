//! The move-rules engine: validators, state-transition rules, and the
//! engine that orchestrates them.

mod capture;
mod context;
mod distribute;
mod engine;
mod game_over;
mod next_player;
mod validators;

pub use capture::CaptureStonesRule;
pub use context::GameContext;
pub use distribute::DistributeStonesRule;
pub use engine::{GameRule, MancalaRulesEngine, RulesEngine};
pub use game_over::DetermineGameOverRule;
pub use next_player::DetermineNextPlayerRule;
pub use validators::{
    EmptyPitValidator, GameOverValidator, PitBelongsToPlayerValidator, PitIsMancalaValidator,
    PitIsValidValidator, PlayerMoveValidator, ValidationError,
};
