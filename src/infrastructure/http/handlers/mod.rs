//! HTTP Handlers

mod line;
mod ping;
mod station;

pub use line::*;
pub use ping::*;
pub use station::*;
