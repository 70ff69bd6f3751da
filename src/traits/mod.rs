mod runner;
mod sqlizer;

pub use runner::Runner;
pub use sqlizer::Sqlizer;
