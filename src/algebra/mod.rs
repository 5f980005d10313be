//! __hermchol__ algebra module.
//!
//! Scalar traits, data type tags, strided matrix views and the small
//! dense matrix type used to hold owned problem data.

// import and flatten the collection of core numeric
// types and matrix / vector traits.

mod error_types;
mod floats;
mod matrix_traits;
mod matrix_types;
mod scalar;
mod strided;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use scalar::*;
pub use strided::*;
pub use vecmath::*;

mod dense;
pub use dense::*;
