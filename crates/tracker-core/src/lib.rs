pub mod clock;
pub mod error;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod progress;
pub mod release;
pub mod screenshot;
pub mod workspace;

pub use error::{Result, TrackerError};
