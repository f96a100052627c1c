//! Content-aware width reduction.
//!
//! Every iteration maps the pixel grid to luminance, runs a Sobel edge detector over it,
//! accumulates the cheapest vertical path energy top to bottom and then removes the
//! lowest-energy seam in place. See [`seam_carving::carve`].

pub mod error;
pub mod fast_image;
pub mod io;
pub mod seam_carving;

pub use error::{CarveError, Result};
pub use fast_image::FastImage;
pub use seam_carving::{carve, carve_with_progress, easy_carve, CarveOptions};
