//! Game logic: ranking, roster, dice, session operations and the hold gesture.

mod hold;
mod ranking;
mod roll;
mod roster;
mod session;

pub use hold::{HoldConfig, HoldGesture, HoldInput, HoldPhase, HoldStep};
pub use ranking::{compare_players, recompute_ranks};
pub use roll::{roll_once, RngRollSource, RollOutcome, RollSource, ScriptedRolls, FACES};
pub use roster::reconcile_roster;
pub use session::{
    apply_roll, apply_settings, commit_roll, preview_roll, restore_session, save_session,
};
