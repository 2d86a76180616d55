mod cancel_token;
mod held_input_guard;
mod replay_engine;

pub use {
    cancel_token::CancelToken,
    replay_engine::{ReplayEngine, ReplayReport},
};
