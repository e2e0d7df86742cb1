// Engine modules: input and frame pacing

pub mod game_loop;
pub mod input;
