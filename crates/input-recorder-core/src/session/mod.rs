mod control_state;
mod outcome;
mod session_context;

pub use {
    control_state::ControlState,
    outcome::Outcome,
    session_context::{SessionContext, SessionSnapshot},
};
