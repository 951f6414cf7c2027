//! Max-chroma colors on the Display P3 gamut boundary, found in the
//! Jzazbz perceptual color space.
//!
//! This is the engine behind a hue-dial color picker: for any angle
//! around the wheel it returns the most saturated color Display P3 can
//! reproduce. The boundary is approximated by eight precomputed corner
//! colors in LMS space ([`gamut`]); a bracketed bisection reconciles
//! that piecewise-linear boundary with the perceptual hue ([`solver`]);
//! the Jzazbz, LMS, and linear Display P3 conversions live in
//! [`jzazbz`]; [`dial`] sweeps the full circle to build widget-sized
//! tables.
//!
//! ```
//! use huedial::solver::find_max_chroma_color;
//!
//! // Half way around the dial sits on the cyan side of the gamut.
//! let color = find_max_chroma_color(180.0);
//! assert!(color.green > 0.99);
//! ```

pub mod cli;
pub mod config;
pub mod dial;
pub mod gamut;
pub mod jzazbz;
pub mod logging;
pub mod solver;
