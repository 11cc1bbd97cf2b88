use num::complex::Complex;

use std::f64::consts::PI;
use crate::realerrorfunctions::RealErrorFunctions;
use crate::auxilliary::*;
use crate::edgecases::{nan_keeping_zero_parts, ComplexClass};
use crate::precision::WorkingPrecision;

type Complex64 = Complex<f64>;


const ISPI: f64 = 0.56418958354775628694807945156;                  // 1 / sqrt(pi)
const SPI2: f64 = 0.8862269254527580136490837416705725913990;       // sqrt(pi)/2

// Continued fraction for w(z): |x|+|y| above CF_TWO_TERMS_MIN needs at most 2 terms,
// above CF_ONE_TERM_MIN a single one.
const CF_TWO_TERMS_MIN: f64 = 4000.0;
const CF_ONE_TERM_MIN: f64 = 1.0e7;

// Fit of the number of continued-fraction terms, nu = floor(C0 + C1 / (C2*|x| + C3*|y| + C4))
const CF_NU_C0: f64 = 3.9;
const CF_NU_C1: f64 = 11.398;
const CF_NU_C2: f64 = 0.08254;
const CF_NU_C3: f64 = 0.1421;
const CF_NU_C4: f64 = 0.2023;

// Above this |x| only sum3 and sum5 of algorithm 916 contribute
const SUMS_LARGE_X_MIN: f64 = 10.0;

// exp(-z^2) underflows when Re(-z^2) < -750
const EXP_MZ2_UNDERFLOW: f64 = -750.0;




// Parameters of the Zaghloul & Ali sums (algorithm 916) for a requested relative error.
// At full double precision (relerr <= eps) the constants and the exp(-a^2 n^2) table are
// precomputed; otherwise they are derived from relerr, which is capped at 0.1.

struct SumParameters {
    relerr: f64,
    a: f64,
    a2: f64,
    c: f64,
}


impl SumParameters {

    fn new(relerr: f64) -> Self {
        if relerr <= f64::EPSILON {
            SumParameters {
                relerr: f64::EPSILON,
                a: 0.518321480430085929872,         // pi / sqrt(-log(eps*0.5))
                a2: 0.268657157075235951582,        // a^2
                c: 0.329973702884629072537,         // (2/pi) * a
            }
        } else {
            let relerr = relerr.min(0.1);           // not sensible to compute < 1 digit
            let a = PI / (-(relerr * 0.5).ln()).sqrt();
            SumParameters { relerr, a, a2: a * a, c: (2.0 / PI) * a }
        }
    }

    fn uses_table(&self) -> bool {
        self.relerr == f64::EPSILON
    }

    fn exp_a2n2(&self, n: usize) -> f64 {
        if self.uses_table() {
            EXPA2N2[n - 1]
        } else {
            let nf = n as f64;
            (-self.a2 * (nf * nf)).exp()
        }
    }
}




// The Faddeeva function

pub fn w_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    // A NaN on the imaginary axis is let through: the axis shortcut below returns the sign of
    // Re z as the imaginary part, so Im w(0 + NaN i) is 0, not NaN.
    if ComplexClass::of(z) == ComplexClass::Nan && z.re != 0.0 {
        return Complex64::new(f64::NAN, f64::NAN);
    }

    if z.re == 0.0 {
        return Complex64::new(z.im.erfcx(), z.re); // give correct sign of 0 in w.im
    } else if z.im == 0.0 {
        return Complex64::new((-z.re * z.re).exp(), z.re.w_im());
    }

    let x = z.re.abs();
    let ya = z.im.abs();

    // Use a continued fraction for large |z|, as it is faster.
    // As pointed out by M. Zaghloul, the continued fraction seems to give a large relative error in
    //    Re w(z) for |x| ~ 6 and small |y|, so use algorithm 916 in this region.
    if ya > 7.0 || (x > 6.0 && (ya > 0.1 || (x > 8.0 && ya > 1e-10) || x > 28.0)) {
        w_continued_fraction(z)
    } else if x < SUMS_LARGE_X_MIN {
        w_sums(z, &SumParameters::new(relerr))
    } else {
        w_sums_large_x(z, &SumParameters::new(relerr))
    }
}




// w(z) for large |z| by the continued fraction of Poppe & Wijers, evaluated for Im z >= 0
// and mapped to the lower half plane through w(z) = 2 exp(-z^2) - w(-z).

fn w_continued_fraction(z: Complex64) -> Complex64 {
    let x = z.re.abs();
    let y = z.im;
    let ya = y.abs();
    let xs = if y < 0.0 { -z.re } else { z.re }; // Compute for -z if y < 0

    let ret = if x + ya > CF_TWO_TERMS_MIN {
        if x + ya > CF_ONE_TERM_MIN {
            // nu == 1, w(z) = i/sqrt(pi) / z
            // scale to avoid overflow
            if x > ya {
                let yax = ya / xs;
                let denom = ISPI / (xs + yax * ya);
                Complex64::new(denom * yax, denom)
            } else if ya.is_infinite() {
                if x.is_nan() || y < 0.0 {
                    return Complex64::new(f64::NAN, f64::NAN);
                } else {
                    return Complex64::new(0.0, 0.0);
                }
            } else {
                let xya = xs / ya;
                let denom = ISPI / (xya * xs + ya);
                Complex64::new(denom, denom * xya)
            }
        } else {
            // nu == 2, w(z) = i/sqrt(pi) * z / (z*z - 0.5)
            let dr = xs * xs - ya * ya - 0.5;
            let di = 2.0 * xs * ya;
            let denom = ISPI / (dr * dr + di * di);
            Complex64::new(denom * (xs * di - ya * dr), denom * (xs * dr + ya * di))
        }
    } else {
        // Poppe & Wijers suggest nu = 3 + 1442 / (26*rho + 77) with rho = sqrt((x/x0)^2 + (y/y0)^2),
        // x0=6.3, y0=4.4. The fit used here avoids the hypotenuse and was constrained to never
        // underestimate the nu needed for machine precision.
        let nu = (CF_NU_C0 + CF_NU_C1 / (CF_NU_C2 * x + CF_NU_C3 * ya + CF_NU_C4)).floor();
        let mut wr = xs;
        let mut wi = ya;
        let mut nu = 0.5 * (nu - 1.0);
        while nu > 0.4 {
            // w <- z - nu/w:
            let denom = nu / (wr * wr + wi * wi);
            wr = xs - wr * denom;
            wi = ya + wi * denom;
            nu -= 0.5;
        }
        // w(z) = i/sqrt(pi) / w:
        let denom = ISPI / (wr * wr + wi * wi);
        Complex64::new(denom * wi, denom * wr)
    };

    if y < 0.0 {
        // use w(z) = 2.0*exp(-z*z) - w(-z), but be careful of overflow in exp(-z*z) = exp(-(xs*xs-ya*ya) -2*i*xs*ya)
        2.0 * cexp(Complex64::new((ya - xs) * (xs + ya), 2.0 * xs * y)) - ret
    } else {
        ret
    }
}




// w(z) for |x| < 10 by algorithm 916 (Zaghloul & Ali, ACM TOMS 38, 2011), with all five sums.
//
// The test suggested in the paper is x < sqrt(-log(DBL_MIN)), about 26.6, since otherwise exp(-x^2)
// underflows to zero and sum1,sum2,sum4 are zero. Long before that, the sum1,sum2,sum4 contributions
// are negligible in double precision (x > about 6), and for x > 20 the coefficients of the sums start
// to underflow/overflow, hence the split at x = 10.

fn w_sums(z: Complex64, p: &SumParameters) -> Complex64 {
    let x = z.re.abs();
    let y = z.im;

    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    let mut sum4 = 0.0;
    let mut sum5 = 0.0;
    let mut prod2ax = 1.0;
    let mut prodm2ax = 1.0;
    let expx2;

    if x < 5e-4 {
        // compute sum4 and sum5 together as sum5-sum4, which needs the Taylor forms for accuracy
        let x2 = x * x;
        expx2 = 1.0 - x2 * (1.0 - 0.5 * x2); // exp(-x*x) via Taylor
        let (exp2ax, expm2ax) = if p.uses_table() {
            // exp(2*a*x) and exp(-2*a*x) via Taylor, to double precision
            let ax2 = 1.036642960860171859744 * x; // 2*a*x
            (
                1.0 + ax2 * (1.0 + ax2 * (0.5 + 0.166666666666666666667 * ax2)),
                1.0 - ax2 * (1.0 - ax2 * (0.5 - 0.166666666666666666667 * ax2)),
            )
        } else {
            let exp2ax = (2.0 * p.a * x).exp();
            (exp2ax, 1.0 / exp2ax)
        };
        for n in 1..=EXPA2N2.len() {
            let nf = n as f64;
            let coef = p.exp_a2n2(n) * expx2 / (p.a2 * (nf * nf) + y * y);
            prod2ax *= exp2ax;
            prodm2ax *= expm2ax;
            sum1 += coef;
            sum2 += coef * prodm2ax;
            sum3 += coef * prod2ax;
            // really = sum5 - sum4
            sum5 += coef * (2.0 * p.a) * nf * sinh_taylor((2.0 * p.a) * nf * x);
            // test convergence via sum3
            if coef * prod2ax < p.relerr * sum3 {
                break;
            }
        }
    } else {
        // x > 5e-4, compute sum4 and sum5 separately
        expx2 = (-x * x).exp();
        let exp2ax = ((2.0 * p.a) * x).exp();
        let expm2ax = 1.0 / exp2ax;
        for n in 1..=EXPA2N2.len() {
            let nf = n as f64;
            let coef = p.exp_a2n2(n) * expx2 / (p.a2 * (nf * nf) + y * y);
            prod2ax *= exp2ax;
            prodm2ax *= expm2ax;
            sum1 += coef;
            sum2 += coef * prodm2ax;
            sum4 += (coef * prodm2ax) * (p.a * nf);
            sum3 += coef * prod2ax;
            sum5 += (coef * prod2ax) * (p.a * nf);
            // test convergence via sum5, since this sum has the slowest decay
            if (coef * prod2ax) * (p.a * nf) < p.relerr * sum5 {
                break;
            }
        }
    }

    // avoid spurious overflow for large negative y
    let expx2erfcxy = if y > -6.0 {
        expx2 * y.erfcx()
    } else {
        2.0 * (y * y - x * x).exp()
    };

    let c = p.c;
    let ret = if y > 5.0 {
        // imaginary terms cancel
        let sinxy = (x * y).sin();
        Complex64::new(
            (expx2erfcxy - c * y * sum1) * (2.0 * x * y).cos() + (c * x * expx2) * sinxy * sinc(x * y, sinxy),
            0.0,
        )
    } else {
        let xs = z.re;
        let sinxy = (xs * y).sin();
        let sin2xy = (2.0 * xs * y).sin();
        let cos2xy = (2.0 * xs * y).cos();
        let coef1 = expx2erfcxy - c * y * sum1;
        let coef2 = c * xs * expx2;
        Complex64::new(
            coef1 * cos2xy + coef2 * sinxy * sinc(xs * y, sinxy),
            coef2 * sinc(2.0 * xs * y, sin2xy) - coef1 * sin2xy,
        )
    };

    ret + Complex64::new((0.5 * c) * y * (sum2 + sum3), (0.5 * c) * (sum5 - sum4).copysign(z.re))
}




// w(z) for |x| >= 10 (and |y| < 1e-10, else the continued fraction applies): only sum3 and sum5
// contribute. They are summed in both directions, starting at n0 = round(x/a) where the terms peak.

fn w_sums_large_x(z: Complex64, p: &SumParameters) -> Complex64 {
    let x = z.re.abs();
    let y = z.im;
    let (a, a2, c) = (p.a, p.a2, p.c);

    let ret = Complex64::new((-x * x).exp(), 0.0); // |y| < 1e-10, so we only need exp(-x*x) term
    let finish = |sum3: f64, sum5: f64| ret + Complex64::new((0.5 * c) * y * sum3, (0.5 * c) * sum5.copysign(z.re));

    // Round instead of ceil as in Zaghloul & Ali; note that x/a > 1 here
    let n0 = (x / a + 0.5).floor();
    let dx = a * n0 - x;
    let mut sum3 = (-dx * dx).exp() / (a2 * (n0 * n0) + y * y);
    let mut sum5 = a * n0 * sum3;
    let exp1 = (4.0 * a * dx).exp();
    let mut exp1dn = 1.0;
    let mut dn = 1.0;
    while dn < n0 {
        // loop over n0-dn and n0+dn terms
        let np = n0 + dn;
        let nm = n0 - dn;
        let mut tp = (-sqr(a * dn + dx)).exp();
        exp1dn *= exp1;
        let mut tm = tp * exp1dn; // trick to get tm from tp
        tp /= a2 * (np * np) + y * y;
        tm /= a2 * (nm * nm) + y * y;
        sum3 += tp + tm;
        sum5 += a * (np * tp + nm * tm);
        if a * (np * tp + nm * tm) < p.relerr * sum5 {
            return finish(sum3, sum5);
        }
        dn += 1.0;
    }

    loop {
        // loop over n0+dn terms only (since n0-dn <= 0)
        let np = n0 + dn;
        let tp = (-sqr(a * dn + dx)).exp() / (a2 * (np * np) + y * y);
        sum3 += tp;
        sum5 += a * np * tp;
        if a * np * tp < p.relerr * sum5 {
            return finish(sum3, sum5);
        }
        dn += 1.0;
    }
}




/// The Faddeeva function w(z) = exp(-z^2) erfc(-iz) at full double precision.
pub fn faddeeva_w(z: Complex64) -> Complex64 {
    w_with_relerror(z, 0.0)
}


/// Re[w(x + iy)] from two real arguments.
///
/// On the real axis this is exp(-x^2), evaluated without a complex intermediate.
pub fn re_w<T: WorkingPrecision>(x: T, y: T) -> T {
    let (x, y) = (x.to_f64(), y.to_f64());
    let re = if y == 0.0 {
        (-x * x).exp()
    } else {
        w_with_relerror(Complex64::new(x, y), 0.0).re
    };
    T::from_f64(re)
}


/// Im[w(x + iy)] from two real arguments.
///
/// On the real axis this is [`im_w_of_x`], so `im_w(x, 0) == im_w_of_x(x)`.
pub fn im_w<T: WorkingPrecision>(x: T, y: T) -> T {
    let (x, y) = (x.to_f64(), y.to_f64());
    let im = if y == 0.0 {
        x.w_im()
    } else {
        w_with_relerror(Complex64::new(x, y), 0.0).im
    };
    T::from_f64(im)
}


/// Im[w(x)] for real x, the scaled Dawson function 2*dawson(x)/sqrt(pi).
pub fn im_w_of_x<T: WorkingPrecision>(x: T) -> T {
    T::from_f64(x.to_f64().w_im())
}




// The complex scaled complementary error function

pub fn erfcx_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    w_with_relerror(Complex64::new(-z.im, z.re), relerr)
}




// Taylor series of erf for small |z|, to avoid cancellation inaccuracy
//   erf(z) = 2/sqrt(pi) * z * (1 - z^2/3 + z^4/10 - z^6/42 + z^8/216 + ...)

fn erf_taylor(z: Complex64, mz2: Complex64) -> Complex64 {
    z * (1.1283791670955125739 + mz2 * (0.37612638903183752464 + mz2 * (0.11283791670955125739 + mz2 * (0.026866170645131251760 + mz2 * 0.0052239776254421878422))))
}


// For small |x| and small |xy|, use Taylor series to avoid cancellation inaccuracy:
//     erf(x+iy) = erf(iy)
//        + 2*exp(y^2)/sqrt(pi) *
//          [ x * (1 - x^2 * (1+2y^2)/3 + x^4 * (3+12y^2+4y^4)/30 + ...
//            - i * x^2 * y * (1 - x^2 * (3+2y^2)/6 + ...) ]
//   where:
//      erf(iy) = exp(y^2) * Im[w(y)]

fn erf_near_imaginary_axis(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    let y2 = y * y;
    let expy2 = y2.exp();
    Complex64::new(
        expy2 * x * (1.1283791670955125739
                - x2 * (0.37612638903183752464 + 0.75225277806367504925 * y2)
                + x2 * x2 * (0.11283791670955125739 + y2 * (0.45135166683820502956 + 0.15045055561273500986 * y2))),
        expy2 * (y.w_im() - x2 * y * (1.1283791670955125739 - x2 * (0.56418958354775628695 + 0.37612638903183752464 * y2)))
    )
}


// The complex error function

pub fn erf_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let x = z.re;
    let y = z.im;

    if ComplexClass::of(z) == ComplexClass::Nan {
        return nan_keeping_zero_parts(z);
    }

    // If the imaginary part is 0, make sure the sign of 0 is preserved
    if y == 0.0 {
        return Complex64::new(RealErrorFunctions::erf(x), y);
    }

    // If the real part is 0, make sure the sign of 0 is preserved.
    // erf(iy) = i erfi(y), which also handles the y -> Inf limit (exp(y^2) -> Inf but Im[w(y)] -> 0).
    if x == 0.0 {
        return Complex64::new(x, y.erfi());
    }

    let m_re_z2: f64 = (y - x) * (x + y);                    // Re(-z^2), being careful of overflow
    let m_im_z2: f64 = -2.0 * x * y;                         // Im(-z^2)
    if m_re_z2 < EXP_MZ2_UNDERFLOW {
        // underflow
        return Complex64::new(1.0_f64.copysign(x), 0.0);
    }

    if x.abs() < 8.0e-2 {
        if y.abs() < 1.0e-2 {
            return erf_taylor(z, Complex64::new(m_re_z2, m_im_z2));
        } else if m_im_z2.abs() < 5.0e-3 && x.abs() < 5.0e-3 {
            return erf_near_imaginary_axis(x, y);
        }
    }

    // Handle positive and negative x via different formulas, using the mirror symmetries of w,
    // to avoid overflow/underflow problems from multiplying exponentially large and small quantities.
    // Don't use the complex exp function, since that will produce spurious NaN values when multiplying w
    // in an overflow situation.
    let phase = Complex64::new(m_im_z2.cos(), m_im_z2.sin());
    if x >= 0.0 {
        1.0 - m_re_z2.exp() * phase * w_with_relerror(Complex64::new(-y, x), relerr)
    } else {
        // a * (b * c) rather than a * b * c: the other association turns (-Inf, -Inf) into (NaN, -Inf)
        // for some arguments with huge |y|.
        m_re_z2.exp() * (phase * w_with_relerror(Complex64::new(y, -x), relerr)) - 1.0
    }
}




// The imaginary error function

pub fn erfi_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let e: Complex64 = erf_with_relerror(Complex64::new(-z.im, z.re), relerr);
    Complex64::new(e.im, -e.re)
}




// The complex complementary error function

pub fn erfc_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let x: f64 = z.re;
    let y: f64 = z.im;

    if x == 0.0 {
        // erfc(iy) = 1 - i erfi(y)
        return Complex64::new(1.0, -y.erfi());
    }

    if y == 0.0 {
        return Complex64::new(RealErrorFunctions::erfc(x), -y); // Preserve sign of 0
    }

    let m_re_z2: f64 = (y - x) * (x + y);      // Re(-z^2), being careful of overflow
    let m_im_z2: f64 = -2.0 * x * y;           // Im(-z^2)
    if m_re_z2 < EXP_MZ2_UNDERFLOW {
        // underflow
        if x >= 0.0 {
            return Complex64::new(0.0, 0.0);
        } else {
            return Complex64::new(2.0, 0.0);
        }
    }

    let mz2 = Complex64::new(m_re_z2, m_im_z2);
    if x >= 0.0 {
        cexp(mz2) * w_with_relerror(Complex64::new(-y, x), relerr)
    } else {
        2.0 - cexp(mz2) * w_with_relerror(Complex64::new(y, -x), relerr)
    }
}




// Dawson's function for small |y| and small |xy|, by Taylor series around the real axis:
//     dawson(x + iy) = D + y^2 (D + x - 2Dx^2) + y^4 (D/2 + 5x/6 - 2Dx^2 - x^3/3 + 2Dx^4/3)
//                        + iy [ (1-2Dx) + 2/3 y^2 (1 - 3Dx - x^2 + 2Dx^3)
//                        + y^4/15 (4 - 15Dx - 9x^2 + 20Dx^3 + 2x^4 - 4Dx^5) ] + ...
// where D = dawson(x)
//
// For large |x|, 2Dx -> 1 which gives cancellation problems in this series (many of the leading terms
// cancel). So, for |x| > 40, D is replaced by its continued-fraction expansion
//     dawson(x) = 0.5 / (x-0.5/(x-1/(x-1.5/(x-2/(x-2.5/(x...))))))
// truncated at 6 terms, the minimum that is accurate as soon as the simpler Taylor expansion breaks down.
// Factoring out the denominator and simplifying:
//     Re dawson(x + iy) * (-15 + 90x^2 - 60x^4 + 8x^6) / x = 33 - 28x^2 + 4x^4 + y^2 (18 - 4x^2) + 4 y^4
//     Im dawson(x + iy) * (-15 + 90x^2 - 60x^4 + 8x^6) / y = -15 + 24x^2 - 4x^4 + 2/3 y^2 (6x^2 - 15) - 4 y^4
//
// Finally, for |x| > 5e7 a 1-term continued fraction for the real part and a 2-term one for the
// imaginary part avoid overflow:
//     Re dawson(x + iy) = [1 + y^2 (1 + y^2/2 - (xy)^2/3)] / (2x)
//     Im dawson(x + iy) = y [ -1 - 2/3 y^2 + y^4/15 (2x^2 - 4) ] / (2x^2 - 1)

fn dawson_near_real_axis(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    let y2 = y * y;
    if x2 > 1600.0 {
        // |x| > 40
        if x2 > 25.0e14 {
            // |x| > 5e7
            let xy2 = (x * y) * (x * y);
            return Complex64::new(
                (0.5 + y2 * (0.5 + 0.25 * y2 - 0.16666666666666666667 * xy2)) / x,
                y * (-1.0
                    + y2 * (-0.66666666666666666667
                        + 0.13333333333333333333 * xy2
                        - 0.26666666666666666667 * y2))
                    / (2.0 * x2 - 1.0),
            );
        }
        return (1. / (-15. + x2 * (90. + x2 * (-60. + 8. * x2))))
            * Complex64::new(
                x * (33. + x2 * (-28. + 4. * x2) + y2 * (18. - 4. * x2 + 4. * y2)),
                y * (-15. + x2 * (24. - 4. * x2) + y2 * (4. * x2 - 10. - 4. * y2)),
            );
    }

    let d = SPI2 * x.w_im();
    Complex64::new(
        d + y2 * (d + x - 2. * d * x2)
            + y2 * y2
                * (d * (0.5 - x2 * (2. - 0.66666666666666666667 * x2))
                    + x * (0.83333333333333333333
                        - 0.33333333333333333333 * x2)),
        y * (1. - 2. * d * x
            + y2 * 0.66666666666666666667 * (1. - x2 - d * x * (3. - 2. * x2))
            + y2 * y2
                * (0.26666666666666666667
                    - x2 * (0.6 - 0.13333333333333333333 * x2)
                    - d * x
                        * (1.
                            - x2 * (1.3333333333333333333
                                - 0.26666666666666666667 * x2)))),
    )
}


// Dawson's function

pub fn dawson_with_relerror(z: Complex64, relerr: f64) -> Complex64 {
    let x = z.re;
    let y = z.im;

    if ComplexClass::of(z) == ComplexClass::Nan {
        return nan_keeping_zero_parts(z);
    }

    // Handle axes separately for speed & proper handling of x or y = Inf

    if y == 0.0 {
        return Complex64::new(SPI2 * x.w_im(), -y); // preserve sign of 0
    }

    if x == 0.0 {
        let y2 = y * y;
        if y2 < 2.5e-5 {
            // Taylor expansion
            return Complex64::new(x, y * (1. + y2 * (0.6666666666666666666666666666666666666667 + y2 * 0.26666666666666666666666666666666666667)));
        } else if y >= 0.0 {
            // Preserve sign of 0
            return Complex64::new(x, SPI2 * (y2.exp() - y.erfcx()));
        } else {
            return Complex64::new(x, SPI2 * ((-y).erfcx() - y2.exp()));
        }
    }

    let m_re_z2 = (y - x) * (x + y);             // Re(-z^2), being careful of overflow
    let m_im_z2 = -2.0 * x * y;                  // Im(-z^2)
    let mz2 = Complex64::new(m_re_z2, m_im_z2);  // -z^2

    if y.abs() < 5e-3 {
        if x.abs() < 5e-3 {
            // Use Taylor series for small |z|, to avoid cancellation inaccuracy: dawson(z) = z - 2/3 z^3 + 4/15 z^5 + ...
            return z * (1. + mz2 * (0.6666666666666666666666666666666666666667 + mz2 * 0.2666666666666666666666666666666666666667));
        } else if m_im_z2.abs() < 5.0e-3 {
            return dawson_near_real_axis(x, y);
        }
    }

    // Handle positive and negative y via different formulas, using the mirror symmetries of w, to avoid
    // overflow/underflow problems from multiplying exponentially large and small quantities.
    let res = if y >= 0.0 {
        cexp(mz2) - w_with_relerror(z, relerr)
    } else {
        w_with_relerror(-z, relerr) - cexp(mz2)
    };
    SPI2 * Complex64::new(-res.im, res.re)
}




/// Error functions of a complex argument, at full double precision.
///
/// Implemented for `Complex<f64>`, and for `Complex<f32>` by evaluating in double precision,
/// see [`crate::precision`]. Use the `*_with_relerror` functions to trade accuracy for speed.
pub trait ComplexErrorFunctions {
    /// Scaled complementary error function erfcx(z) = exp(z^2) erfc(z) = w(iz).
    fn erfcx(self) -> Self;
    /// Error function.
    fn erf(self) -> Self;
    /// Faddeeva function w(z) = exp(-z^2) erfc(-iz).
    fn w(self) -> Self;
    /// Imaginary error function erfi(z) = -i erf(iz).
    fn erfi(self) -> Self;
    /// Complementary error function erfc(z) = 1 - erf(z).
    fn erfc(self) -> Self;
    /// Dawson's integral.
    fn dawson(self) -> Self;
}



impl ComplexErrorFunctions for Complex64 {

    fn erfcx(self) -> Self {
        erfcx_with_relerror(self, 0.0)
    }

    fn erf(self) -> Self {
        erf_with_relerror(self, 0.0)
    }

    fn w(self) -> Self {
        w_with_relerror(self, 0.0)
    }

    fn erfi(self) -> Self {
        erfi_with_relerror(self, 0.0)
    }

    fn erfc(self) -> Self {
        erfc_with_relerror(self, 0.0)
    }

    fn dawson(self) -> Self {
        dawson_with_relerror(self, 0.0)
    }
}
