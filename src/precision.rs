//! Reduced-precision arguments.
//!
//! Every function is computed once, in `f64`. Narrower floating-point types are widened to
//! `f64`, evaluated, and the result is rounded back to the narrower type (round to nearest,
//! ties to even), so e.g. `x.erf()` for an `f32` equals `(x as f64).erf() as f32`.
//!
//! With the `f16` feature (on by default) this also covers [`half::f16`] and [`half::bf16`].

use num::complex::Complex;

use crate::complexerrorfunctions::ComplexErrorFunctions;
use crate::realerrorfunctions::RealErrorFunctions;

type Complex64 = Complex<f64>;
type Complex32 = Complex<f32>;


/// A floating-point type that is evaluated in double precision.
pub trait WorkingPrecision: Copy {
    /// Widen to `f64`, exactly.
    fn to_f64(self) -> f64;

    /// Round an `f64` result to this type.
    fn from_f64(v: f64) -> Self;
}


impl WorkingPrecision for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}


impl WorkingPrecision for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}


#[cfg(feature = "f16")]
impl WorkingPrecision for half::f16 {
    #[inline]
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }
}


#[cfg(feature = "f16")]
impl WorkingPrecision for half::bf16 {
    #[inline]
    fn to_f64(self) -> f64 {
        half::bf16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::bf16::from_f64(v)
    }
}




// RealErrorFunctions for the narrow types, through the f64 implementation

macro_rules! impl_real_error_functions_via_f64 {
    ($($t:ty),*) => {
        $(
            impl RealErrorFunctions for $t {
                fn erfcx(self) -> Self {
                    <$t>::widened(self, <f64 as RealErrorFunctions>::erfcx)
                }

                fn erf(self) -> Self {
                    <$t>::widened(self, <f64 as RealErrorFunctions>::erf)
                }

                fn w_im(self) -> Self {
                    <$t>::widened(self, <f64 as RealErrorFunctions>::w_im)
                }

                fn erfi(self) -> Self {
                    <$t>::widened(self, <f64 as RealErrorFunctions>::erfi)
                }

                fn erfc(self) -> Self {
                    <$t>::widened(self, <f64 as RealErrorFunctions>::erfc)
                }

                fn dawson(self) -> Self {
                    <$t>::widened(self, <f64 as RealErrorFunctions>::dawson)
                }
            }
        )*
    };
}


// Evaluate f in double precision and round back

trait Widened: WorkingPrecision {
    #[inline]
    fn widened(self, f: fn(f64) -> f64) -> Self {
        Self::from_f64(f(self.to_f64()))
    }
}

impl<T: WorkingPrecision> Widened for T {}


impl_real_error_functions_via_f64!(f32);

#[cfg(feature = "f16")]
impl_real_error_functions_via_f64!(half::f16, half::bf16);




fn widen(z: Complex32) -> Complex64 {
    Complex64::new(z.re.to_f64(), z.im.to_f64())
}

fn narrow(z: Complex64) -> Complex32 {
    Complex32::new(f32::from_f64(z.re), f32::from_f64(z.im))
}


impl ComplexErrorFunctions for Complex32 {

    fn erfcx(self) -> Self {
        narrow(widen(self).erfcx())
    }

    fn erf(self) -> Self {
        narrow(widen(self).erf())
    }

    fn w(self) -> Self {
        narrow(widen(self).w())
    }

    fn erfi(self) -> Self {
        narrow(widen(self).erfi())
    }

    fn erfc(self) -> Self {
        narrow(widen(self).erfc())
    }

    fn dawson(self) -> Self {
        narrow(widen(self).dawson())
    }
}








#[cfg(test)]
mod tests {

    use super::*;
    use crate::complexerrorfunctions::{im_w, re_w};
    use crate::voigt::{voigt, voigt_hwhm};

    fn f32_arguments() -> Vec<f32> {
        vec![-1.0e30, -27.5, -3.0, -0.75, -1.0e-3, -0.0, 0.0, 1.0e-30, 0.03, 0.5, 1.0, 2.5, 9.0, 44.0, 3.0e9]
    }

    #[test]
    fn test_f32_is_rounded_f64() {
        let functions: [fn(f64) -> f64; 6] = [
            <f64 as RealErrorFunctions>::erfcx,
            <f64 as RealErrorFunctions>::erf,
            <f64 as RealErrorFunctions>::w_im,
            <f64 as RealErrorFunctions>::erfi,
            <f64 as RealErrorFunctions>::erfc,
            <f64 as RealErrorFunctions>::dawson,
        ];
        let narrow_functions: [fn(f32) -> f32; 6] = [
            <f32 as RealErrorFunctions>::erfcx,
            <f32 as RealErrorFunctions>::erf,
            <f32 as RealErrorFunctions>::w_im,
            <f32 as RealErrorFunctions>::erfi,
            <f32 as RealErrorFunctions>::erfc,
            <f32 as RealErrorFunctions>::dawson,
        ];
        for x in f32_arguments() {
            for (f, g) in functions.iter().zip(narrow_functions.iter()) {
                let expected = f(x as f64) as f32;
                let computed = g(x);
                assert!(computed == expected || (computed.is_nan() && expected.is_nan()));
                assert_eq!(computed.is_sign_negative(), expected.is_sign_negative());
            }
        }
    }

    #[test]
    fn test_f32_special_values() {
        assert_eq!(<f32 as RealErrorFunctions>::erf(f32::INFINITY), 1.0);
        assert_eq!(<f32 as RealErrorFunctions>::erfc(f32::NEG_INFINITY), 2.0);
        assert_eq!(<f32 as RealErrorFunctions>::erfi(100.0), f32::INFINITY);
        assert!(<f32 as RealErrorFunctions>::dawson(f32::NAN).is_nan());
        // erfcx(-10) = 2 exp(100) - erfcx(10) is finite in f64 but not in f32
        assert_eq!(<f32 as RealErrorFunctions>::erfcx(-10.0), f32::INFINITY);
    }

    #[test]
    fn test_complex32_is_rounded_complex64() {
        let z = [
            Complex32::new(1.0, 2.0),
            Complex32::new(-0.3, 0.001),
            Complex32::new(5.5, -7.25),
            Complex32::new(0.0, -3.0),
            Complex32::new(1.0e-20, 0.0),
        ];
        for zn in z.iter() {
            let wide = Complex64::new(zn.re as f64, zn.im as f64);
            let pairs = [
                (zn.erfcx(), wide.erfcx()),
                (zn.erf(), wide.erf()),
                (zn.w(), wide.w()),
                (zn.erfi(), wide.erfi()),
                (zn.erfc(), wide.erfc()),
                (zn.dawson(), wide.dawson()),
            ];
            for (computed, expected) in pairs.iter() {
                assert_eq!(computed.re, expected.re as f32);
                assert_eq!(computed.im, expected.im as f32);
            }
        }
    }

    #[test]
    fn test_generic_functions_in_f32() {
        let (x, y) = (0.625_f32, 1.25_f32);
        assert_eq!(re_w(x, y), re_w(x as f64, y as f64) as f32);
        assert_eq!(im_w(x, y), im_w(x as f64, y as f64) as f32);
        assert_eq!(voigt(x, 0.5_f32, y), voigt(x as f64, 0.5, y as f64) as f32);
        assert_eq!(voigt_hwhm(0.5_f32, y), voigt_hwhm(0.5, y as f64) as f32);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_precision() {
        use half::{bf16, f16};

        for &x in [-4.0, -0.5, 0.0, 0.125, 1.0, 3.5].iter() {
            let h = f16::from_f64(x);
            let b = bf16::from_f64(x);
            // these arguments are exact in both formats
            assert_eq!(h.to_f64(), x);
            assert_eq!(b.to_f64(), x);

            assert_eq!(RealErrorFunctions::erf(h), f16::from_f64(<f64 as RealErrorFunctions>::erf(x)));
            assert_eq!(RealErrorFunctions::dawson(h), f16::from_f64(<f64 as RealErrorFunctions>::dawson(x)));
            assert_eq!(RealErrorFunctions::erfc(b), bf16::from_f64(<f64 as RealErrorFunctions>::erfc(x)));
            assert_eq!(RealErrorFunctions::w_im(b), bf16::from_f64(<f64 as RealErrorFunctions>::w_im(x)));
        }

        assert_eq!(voigt_hwhm(f16::from_f64(1.0), f16::from_f64(0.0)), f16::from_f64(1.1774100225154747));
        assert!(RealErrorFunctions::erfcx(f16::NAN).is_nan());
    }
}
