//! Error functions, Dawson's function, the Faddeeva function and the Voigt profile, for real and
//! complex arguments.
//!
//! The algorithms follow the Faddeeva package of S. G. Johnson: a continued fraction for large |z|,
//! the sums of algorithm 916 (Zaghloul & Ali, ACM TOMS 38, 2011) elsewhere in the complex plane,
//! and Chebyshev tables in 100 subintervals for the real-valued erfcx and Im[w(x)].
//! Results are accurate to a few ulp everywhere; NaN, infinite and signed-zero arguments give
//! the IEEE limits rather than NaN wherever a limit exists.
//!
//! Real arguments:
//!
//! ```
//! use cerf::*;
//!
//! let x = 1.0_f64;
//! assert!((x.dawson() - 0.5380795069127684).abs() < 1.0e-15);
//! assert_eq!(RealErrorFunctions::erfc(f64::INFINITY), 0.0);
//! ```
//!
//! Complex arguments:
//!
//! ```
//! use cerf::*;
//!
//! let z = Complex64::new(1.0, 2.0);
//! let sum = z.erf() + z.erfc();
//! assert!((sum - 1.0).norm() < 1.0e-13);
//!
//! // trade accuracy for speed
//! let w = w_with_relerror(z, 1.0e-6);
//! assert!((w - z.w()).norm() < 1.0e-5);
//! ```
//!
//! The Voigt profile and its half width at half maximum:
//!
//! ```
//! use cerf::{voigt, voigt_hwhm};
//!
//! let h = voigt_hwhm(1.0_f64, 0.5);
//! let half_maximum = 0.5 * voigt(0.0, 1.0, 0.5);
//! assert!((voigt(h, 1.0, 0.5) - half_maximum).abs() < 1.0e-12 * half_maximum);
//! ```

mod auxilliary;
mod edgecases;
pub mod complexerrorfunctions;
pub mod precision;
pub mod realerrorfunctions;
pub mod voigt;

pub use num_complex::{Complex, Complex32, Complex64};

pub use crate::complexerrorfunctions::{
    dawson_with_relerror, erf_with_relerror, erfc_with_relerror, erfcx_with_relerror,
    erfi_with_relerror, faddeeva_w, im_w, im_w_of_x, re_w, w_with_relerror, ComplexErrorFunctions,
};
pub use crate::precision::WorkingPrecision;
pub use crate::realerrorfunctions::RealErrorFunctions;
pub use crate::voigt::{voigt, voigt_hwhm, voigt_with_relerror};
