use crate::auxilliary::*;
use crate::edgecases::FloatClass;


const ISPI: f64 = 0.56418958354775628694807945156;                      // 1 / sqrt(pi)
const SPI2: f64 = 0.8862269254527580136490837416705725913990;           // sqrt(pi)/2

// erfcx: continued fraction above ERFCX_CF_MIN, 1-term expansion above CF_ONE_TERM_MIN.
// Below ERFCX_OVERFLOW_MAX, 2*exp(x^2) exceeds f64::MAX; below ERFCX_ERFC_NEGLIGIBLE_MAX,
// erfcx(-x) is negligible next to 2*exp(x^2).
const ERFCX_CF_MIN: f64 = 50.0;
const CF_ONE_TERM_MIN: f64 = 5.0e7;
const ERFCX_OVERFLOW_MAX: f64 = -26.7;
const ERFCX_ERFC_NEGLIGIBLE_MAX: f64 = -6.1;

// w_im: continued fraction for |x| above W_IM_CF_MIN
const W_IM_CF_MIN: f64 = 45.0;

// exp(-x^2) underflows for x^2 > 750, exp(x^2) overflows for x^2 > 720
const EXP_MX2_UNDERFLOW: f64 = 750.0;
const EXP_X2_OVERFLOW: f64 = 720.0;

// erf: Taylor series below this |x|
const ERF_TAYLOR_MAX: f64 = 0.08;


/// Error functions of a real argument.
///
/// Implemented for `f64` directly, and for `f32` (and `half::f16`, `half::bf16` with the `f16`
/// feature) by evaluating in `f64` and rounding the result back, see [`crate::precision`].
pub trait RealErrorFunctions {
    /// Scaled complementary error function erfcx(x) = exp(x^2) erfc(x).
    fn erfcx(self) -> Self;
    /// Error function.
    fn erf(self) -> Self;
    /// Im[w(x)] for real x, i.e. 2*dawson(x)/sqrt(pi).
    fn w_im(self) -> Self;
    /// Imaginary error function erfi(x) = -i erf(ix).
    fn erfi(self) -> Self;
    /// Complementary error function erfc(x) = 1 - erf(x).
    fn erfc(self) -> Self;
    /// Dawson's integral.
    fn dawson(self) -> Self;
}


impl RealErrorFunctions for f64 {

    // Compute erfcx(x) = exp(x^2) erfc(x) function, for real x
    // For x > 50, a continued-fraction expansion (same as for the Faddeeva function, but with
    // algebraic simplifications for z=i*x).
    // For 0 <= x <= 50, Chebyshev polynomials in y = 4 / (4+x) in [0,1], with the y interval
    // split into 100 equal subintervals and a low degree polynomial in each of them
    // (see auxilliary.rs).
    // For x < 0, the relationship erfcx(-x) = 2 exp(x^2) - erfc(x), with the usual checks
    // for overflow.
    //
    fn erfcx(self) -> Self {
        match FloatClass::of(self) {
            FloatClass::Nan => return self,
            FloatClass::PosInfinity => return 0.0,
            FloatClass::NegInfinity => return f64::INFINITY,
            FloatClass::Zero => return 1.0,
            FloatClass::Finite => {}
        }

        if self >= 0.0 {
            if self > ERFCX_CF_MIN {
                // continued-fraction expansion is faster
                if self > CF_ONE_TERM_MIN {
                    // 1-term expansion, important to avoid overflow
                    ISPI / self
                } else {
                    //  5-term expansion (rely on compiler for CSE), simplified from:
                    //  ispi / (x+0.5/(x+1/(x+1.5/(x+2/x))))
                    let selfsqr = self * self;
                    ISPI * (selfsqr * (selfsqr + 4.5) + 2.0) / (self * (selfsqr * (selfsqr + 5.0) + 3.75))
                }
            } else {
                erfcx_y100(400.0 / (4.0 + self))
            }
        } else if self < ERFCX_OVERFLOW_MAX {
            f64::INFINITY
        } else if self < ERFCX_ERFC_NEGLIGIBLE_MAX {
            2.0 * (self * self).exp()
        } else {
            2.0 * (self * self).exp() - erfcx_y100(400.0 / (4.0 - self))
        }
    }




    // The error function
    fn erf(self) -> Self {
        match FloatClass::of(self) {
            FloatClass::Nan | FloatClass::Zero => return self,     // keeps the sign of 0
            FloatClass::PosInfinity => return 1.0,
            FloatClass::NegInfinity => return -1.0,
            FloatClass::Finite => {}
        }

        let mx2 = -self * self;
        if mx2 < -EXP_MX2_UNDERFLOW {
            return 1.0_f64.copysign(self);
        }
        if self.abs() < ERF_TAYLOR_MAX {
            // Use Taylor series for small |x|, to avoid cancellation inaccuracy
            //   erf(x) = 2/sqrt(pi) * x * (1 - x^2/3 + x^4/10 - x^6/42 + x^8/216 + ...)
            self * (1.1283791670955125739 + mx2 * (0.37612638903183752464 + mx2 * (0.11283791670955125739 + mx2 * (0.026866170645131251760 + mx2 * 0.0052239776254421878422))))
        } else if self >= 0.0 {
            1.0 - mx2.exp() * self.erfcx()
        } else {
            mx2.exp() * (-self).erfcx() - 1.0
        }
    }




    // Compute a scaled Dawson integral
    //        w_im(x) = 2*Dawson(x)/sqrt(pi)
    // equivalent to the imaginary part w(x) for real x.
    // Uses methods similar to the erfcx calculation above: continued fractions for large |x|,
    // a lookup table of Chebyshev polynomials for smaller |x|, and finally a Taylor expansion for |x|<0.0309.
    // w_im is odd, so negative x are mirrored.
    //
    fn w_im(self) -> Self {
        match FloatClass::of(self) {
            FloatClass::Nan | FloatClass::Zero => return self,
            FloatClass::PosInfinity => return 0.0,
            FloatClass::NegInfinity => return -0.0,
            FloatClass::Finite => {}
        }

        let x = self.abs();
        if x > W_IM_CF_MIN {
            // continued-fraction expansion is faster; both expansions are odd in x
            if x > CF_ONE_TERM_MIN {
                // 1-term expansion, important to avoid overflow
                ISPI / self
            } else {
                // 5-term expansion (rely on compiler for CSE), simplified from:
                //       ispi / (x-0.5/(x-1/(x-1.5/(x-2/x))))
                let selfsqr = self * self;
                ISPI * (selfsqr * (selfsqr - 4.5) + 2.0) / (self * (selfsqr * (selfsqr - 5.0) + 3.75))
            }
        } else if self >= 0.0 {
            w_im_y100(100.0 / (1.0 + x), x)
        } else {
            -w_im_y100(100.0 / (1.0 + x), x)
        }
    }




    // The imaginary error function erfi(x) = -i erf(ix)

    fn erfi(self) -> Self {
        match FloatClass::of(self) {
            FloatClass::Nan | FloatClass::Zero => return self,
            FloatClass::PosInfinity => return f64::INFINITY,
            FloatClass::NegInfinity => return f64::NEG_INFINITY,
            FloatClass::Finite => {}
        }

        if self * self > EXP_X2_OVERFLOW {
            f64::INFINITY.copysign(self)
        } else {
            (self * self).exp() * self.w_im()
        }
    }




    // The complementary error function erfc(x) = 1 - erf(x)

    fn erfc(self) -> Self {
        match FloatClass::of(self) {
            FloatClass::Nan => return self,
            FloatClass::PosInfinity => return 0.0,
            FloatClass::NegInfinity => return 2.0,
            FloatClass::Zero => return 1.0,
            FloatClass::Finite => {}
        }

        if self * self > EXP_MX2_UNDERFLOW {
            // underflow
            if self >= 0.0 {
                0.0
            } else {
                2.0
            }
        } else if self >= 0.0 {
            (-self * self).exp() * self.erfcx()
        } else {
            2.0 - (-self * self).exp() * (-self).erfcx()
        }
    }




    // Dawson's function Dawson(x) = sqrt(pi)/2  *  exp(-x^2) * erfi(x)

    fn dawson(self) -> Self {
        SPI2 * self.w_im()
    }

}
