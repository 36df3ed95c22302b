pub mod config;
pub mod logging;

pub mod fixtures;
pub mod generate;
pub mod message;
pub mod sampler;
pub mod templates;
pub mod url_gen;
