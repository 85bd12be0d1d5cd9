pub mod client;
pub mod coerce;
pub mod config;
pub mod display;
pub mod error;
pub mod listing;
pub mod pokemon;
pub mod resource;
pub mod sprite;

pub use client::*;
pub use coerce::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use listing::*;
pub use pokemon::*;
pub use resource::*;
pub use sprite::*;
