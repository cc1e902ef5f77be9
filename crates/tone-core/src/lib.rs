pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod note;
pub mod oscillator;
pub mod params;
pub mod render;
pub mod session;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::ToneError;
pub use note::*;
pub use oscillator::*;
pub use params::*;
pub use render::*;
pub use session::*;
