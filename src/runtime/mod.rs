//! Runtime configuration forwarded to the vector kernels, and the
//! global error checking switch.

mod errcheck;
mod settings;
pub use errcheck::*;
pub use settings::*;
