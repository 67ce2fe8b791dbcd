mod engine;
mod models;

pub use engine::{
    count_occurrences, evaluate, next_target, phase, time_until_next, CountdownService,
};
pub use models::{CountdownPhase, CountdownResult, RemainingTime};
