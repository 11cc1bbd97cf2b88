use num::complex::Complex;

use std::f64::consts::{PI, SQRT_2};
use crate::complexerrorfunctions::w_with_relerror;
use crate::precision::WorkingPrecision;
use crate::realerrorfunctions::RealErrorFunctions;

type Complex64 = Complex<f64>;


const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530070;      // sqrt(2 pi)
const SQRT_2LN2: f64 = 1.1774100225154746910115693264596996377473;     // sqrt(2 ln 2), HWHM of a unit Gaussian

// A Newton correction larger than this fraction of the half-width is not trusted
const HWHM_NEWTON_MAX_STEP: f64 = 1.0e-6;

// Below this ratio of sigma to |x + i gamma| the Gaussian changes the profile by less than
// (sigma / |x + i gamma|)^2 relative, and the profile is the Lorentzian to double precision
const LORENTZIAN_SIGMA_RATIO: f64 = 1.0e-8;


// Chebyshev coefficients of g(rho) in t = 2 rho - 1, rho = gamma / (sigma + gamma), where
//     hwhm(sigma, gamma) / (sigma + gamma) = (1-rho) sqrt(2 ln 2) + rho + rho (1-rho) g(rho)
// The two end points are exact (pure Gaussian and pure Lorentzian); the series was fitted to
// half-widths solved at 30 significant digits and is good to about 1e-9 before refinement.
// The first coefficient is stored doubled, see clenshaw().

const HWHM_CHEBYSHEV: [f64; 24] = [
    -1.5979414463272464, -0.3761489935508447, -0.0337154795140175, 0.019741619254943873,
    0.011031666047414023, 0.0019349325684175492, -0.0006922116118968141, -0.0005504635138056625,
    -0.00011394668961471909, 4.206928449265157e-05, 3.421299802457493e-05, 4.54613125271987e-06,
    -5.344653532802358e-06, -3.1007840059865985e-06, 6.578365746460727e-08, 8.966214452885423e-07,
    4.443504799477338e-07, -2.029768579936316e-08, -1.4241960758533738e-07, -7.677097071751833e-08,
    -3.540741419312391e-09, 2.0340440584210228e-08, 1.326027709275646e-08, 2.0801802859036833e-09,
];




// Chebyshev series sum_k c[k] T_k(t) - c[0]/2 by Clenshaw's recurrence, for t in [-1, 1]

fn clenshaw(c: &[f64], t: f64) -> f64 {
    let t2 = 2.0 * t;
    let mut d = 0.0;
    let mut dd = 0.0;
    for &ck in c.iter().skip(1).rev() {
        let sv = d;
        d = t2 * d - dd + ck;
        dd = sv;
    }
    t * d - dd + 0.5 * c[0]
}




// Lorentzian of half-width gamma, without overflow of x^2 + gamma^2

fn lorentzian(x: f64, gamma: f64) -> f64 {
    let r = x.hypot(gamma);
    (gamma / r) / (PI * r)
}


// The Voigt profile in double precision

fn voigt_f64(x: f64, sigma: f64, gamma: f64, relerr: f64) -> f64 {
    if x.is_nan() || sigma.is_nan() || gamma.is_nan() {
        return f64::NAN;
    }

    let sigma = sigma.abs();
    let gamma = gamma.abs();

    if sigma == 0.0 && gamma == 0.0 {
        // a delta function, no finite value at any x
        return f64::NAN;
    }

    if x.is_infinite() || sigma.is_infinite() || gamma.is_infinite() {
        return 0.0;
    }

    if sigma == 0.0 {
        return lorentzian(x, gamma);
    }

    if gamma == 0.0 {
        // Gaussian
        let u = x / sigma;
        return (-0.5 * u * u).exp() / (sigma * SQRT_2PI);
    }

    // (x + i gamma) / (sigma sqrt 2) would overflow or leave w(z) in its asymptotic regime
    if sigma < LORENTZIAN_SIGMA_RATIO * x.hypot(gamma) {
        return lorentzian(x, gamma);
    }

    let s2 = SQRT_2 * sigma;
    w_with_relerror(Complex64::new(x / s2, gamma / s2), relerr).re / (sigma * SQRT_2PI)
}




/// The Voigt profile, the convolution of a centred Gaussian of standard deviation `sigma` and
/// a centred Lorentzian of half-width `gamma`, evaluated at `x`:
///
/// voigt(x, sigma, gamma) = Re[w((x + i gamma) / (sigma sqrt(2)))] / (sigma sqrt(2 pi))
///
/// The profile only depends on |sigma| and |gamma|. It reduces to the Lorentzian for sigma = 0 and
/// to the Gaussian for gamma = 0; for sigma = gamma = 0 the result is NaN. When sigma is negligible
/// next to |x + i gamma| the Lorentzian is returned as well.
///
/// The function is generic over the float type, so bare literal arguments need a suffix or an
/// annotation when a method is called on the result (`voigt(0.0_f64, 1.0, 1.0).is_nan()`).
///
/// ```
/// use cerf::voigt;
///
/// let lorentzian: f64 = voigt(2.0, 0.0, 1.0);
/// assert!((lorentzian - 1.0 / (5.0 * std::f64::consts::PI)).abs() < 1.0e-15);
/// ```
pub fn voigt<T: WorkingPrecision>(x: T, sigma: T, gamma: T) -> T {
    voigt_with_relerror(x, sigma, gamma, 0.0)
}


/// The Voigt profile, with the Faddeeva function evaluated to the relative error `relerr`.
pub fn voigt_with_relerror<T: WorkingPrecision>(x: T, sigma: T, gamma: T, relerr: f64) -> T {
    T::from_f64(voigt_f64(x.to_f64(), sigma.to_f64(), gamma.to_f64(), relerr))
}




// Half width at half maximum of the Voigt profile.
// The fitted approximation gives about 9 digits; one Newton step on
//     f(h) = Re w((h + i gamma)/(sigma sqrt 2)) - erfcx(gamma/(sigma sqrt 2)) / 2
// with f'(h) = -sqrt(2) Re[z w(z)] / sigma (from w'(z) = -2z w(z) + 2i/sqrt(pi)) brings it to
// machine precision.

fn voigt_hwhm_f64(sigma: f64, gamma: f64) -> f64 {
    if sigma.is_nan() || gamma.is_nan() {
        return f64::NAN;
    }

    let sigma = sigma.abs();
    let gamma = gamma.abs();

    if sigma.is_infinite() || gamma.is_infinite() {
        return f64::INFINITY;
    }
    if sigma == 0.0 {
        return gamma;
    }
    if gamma == 0.0 {
        return SQRT_2LN2 * sigma;
    }

    let sum = sigma + gamma;
    if sum.is_infinite() {
        // the half-width is homogeneous of degree 1
        return 2.0 * voigt_hwhm_f64(0.5 * sigma, 0.5 * gamma);
    }

    let rho = gamma / sum;
    let mrho = sigma / sum;
    let hwhm = sum * (mrho * SQRT_2LN2 + rho + rho * mrho * clenshaw(&HWHM_CHEBYSHEV, 2.0 * rho - 1.0));

    let s2 = SQRT_2 * sigma;
    let half_max = 0.5 * (gamma / s2).erfcx();
    let z = Complex64::new(hwhm / s2, gamma / s2);
    let wz = w_with_relerror(z, 0.0);
    let f = wz.re - half_max;
    let df = -SQRT_2 * (z * wz).re / sigma;
    let step = f / df;
    if step.is_finite() && step.abs() < HWHM_NEWTON_MAX_STEP * hwhm {
        hwhm - step
    } else {
        hwhm
    }
}


/// Half width at half maximum of the Voigt profile with parameters `sigma` and `gamma`, i.e.
/// the h >= 0 for which voigt(h, sigma, gamma) = voigt(0, sigma, gamma) / 2.
///
/// voigt_hwhm(sigma, 0) = sigma sqrt(2 ln 2), voigt_hwhm(0, gamma) = gamma and voigt_hwhm(0, 0) = 0.
/// Negative arguments are taken by absolute value, an infinite argument gives +Inf. As for
/// [`voigt`], literal arguments may need a type: `voigt_hwhm(1.0_f64, 0.5)`.
pub fn voigt_hwhm<T: WorkingPrecision>(sigma: T, gamma: T) -> T {
    T::from_f64(voigt_hwhm_f64(sigma.to_f64(), gamma.to_f64()))
}








#[cfg(test)]
mod tests {

    use super::*;
    use crate::auxilliary::relerr;

    #[test]
    fn test_voigt() {
        // (x, sigma, gamma)
        let args: [(f64, f64, f64); 7] = [
            (0.0, 1.0, 1.0),
            (1.5, 0.5, 2.0),
            (-3.0, 2.0, 0.1),
            (10.0, 1.0, 1.0e-3),
            (0.2, 1.0e-3, 1.0),
            (2.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
        ];

        let expected: [f64; 7] = [
            0.2087092805203676891488,
            0.1030887243242241897249,
            0.06568137439006163104336,
            0.000003283734563383111551542,
            0.3060669492349519062109,
            0.06366197723675813430755,
            0.2419707245191433497978,
        ];

        let tolerance = 1.0e-12;
        for ((x, sigma, gamma), e) in args.iter().zip(expected.iter()) {
            let computed = voigt(*x, *sigma, *gamma);
            let relative_error = relerr(computed, *e);
            if relative_error >= tolerance {
                println!("voigt({}, {}, {}) computed: {} expected: {}", x, sigma, gamma, computed, e);
            }
            assert!(relative_error < tolerance);
        }
    }

    #[test]
    fn test_voigt_special_arguments() {
        assert!(voigt(0.0_f64, 0.0, 0.0).is_nan());
        assert!(voigt(f64::NAN, 1.0, 1.0).is_nan());
        assert!(voigt(1.0, f64::NAN, 1.0).is_nan());
        assert!(voigt(1.0, 1.0, f64::NAN).is_nan());
        assert!(voigt(f64::NAN, 0.0, 0.0).is_nan());
        assert_eq!(voigt(f64::INFINITY, 1.0, 1.0), 0.0);
        assert_eq!(voigt(f64::NEG_INFINITY, 1.0, 1.0), 0.0);
        assert_eq!(voigt(1.0, f64::INFINITY, 1.0), 0.0);
        assert_eq!(voigt(1.0, 1.0, f64::INFINITY), 0.0);

        // only |sigma| and |gamma| matter
        assert_eq!(voigt(0.7, -1.3, 0.4), voigt(0.7, 1.3, 0.4));
        assert_eq!(voigt(0.7, 1.3, -0.4), voigt(0.7, 1.3, 0.4));

        // even in x
        assert_eq!(voigt(-2.5, 0.8, 0.3), voigt(2.5, 0.8, 0.3));
    }

    #[test]
    fn test_voigt_is_a_density() {
        // trapezoidal rule on a wide grid; the Lorentzian tails beyond |x| = 400 hold
        // about 2 gamma / (400 pi) of the mass
        let (sigma, gamma) = (1.0, 0.05);
        let h = 0.01;
        let mut integral = 0.0;
        for k in -40000..=40000 {
            let x = k as f64 * h;
            let v = voigt(x, sigma, gamma);
            assert!(v >= 0.0);
            integral += v * h;
        }
        let tail = 2.0 * gamma / (400.0 * PI);
        assert!((integral + tail - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn test_voigt_hwhm() {
        let args: [(f64, f64); 6] = [(1.0, 1.0), (0.3, 2.0), (2.0, 0.3), (1.0e-3, 1.0), (1.0, 1.0e-3), (5.0, 5.0e-2)];
        let expected: [f64; 6] = [
            1.800567838601578690431,
            2.065068207600700743286,
            2.518888532463368441287,
            1.000001499997375011437,
            1.177942665821442283494,
            5.91372554777115396106,
        ];

        let tolerance = 1.0e-12;
        for ((sigma, gamma), e) in args.iter().zip(expected.iter()) {
            let computed = voigt_hwhm(*sigma, *gamma);
            let relative_error = relerr(computed, *e);
            if relative_error >= tolerance {
                println!("voigt_hwhm({}, {}) computed: {} expected: {}", sigma, gamma, computed, e);
            }
            assert!(relative_error < tolerance);
        }
    }

    #[test]
    fn test_voigt_hwhm_limits() {
        assert_eq!(voigt_hwhm(0.0, 1.0), 1.0);
        assert_eq!(voigt_hwhm(0.0, 0.0), 0.0);
        assert!(relerr(voigt_hwhm(1.0, 0.0), 1.1774100225154746910) < 1.0e-15);
        assert!(voigt_hwhm(f64::NAN, 1.0).is_nan());
        assert!(voigt_hwhm(1.0, f64::NAN).is_nan());
        assert_eq!(voigt_hwhm(f64::INFINITY, 1.0), f64::INFINITY);
        assert_eq!(voigt_hwhm(1.0, f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(voigt_hwhm(-1.0, -1.0), voigt_hwhm(1.0, 1.0));

        // sigma + gamma overflows, the half-width does not
        let big = voigt_hwhm(0.55 * f64::MAX, 0.55 * f64::MAX);
        assert!(big.is_finite());
        assert!(relerr(big, 0.55 * f64::MAX * 1.800567838601578690431) < 1.0e-12);

        // the half-width itself overflows
        assert_eq!(voigt_hwhm(f64::MAX, f64::MAX), f64::INFINITY);
    }

    #[test]
    fn test_voigt_with_negligible_sigma() {
        // (x, sigma, gamma, expected)
        let cases: [(f64, f64, f64, f64); 5] = [
            (0.0, 1.0e-320, 1.0, 0.3183098861837906715378),
            (1.0e10, 1.0e-300, 1.0, 3.183098861837906715346e-21),
            (-3.0, 1.0e-200, 2.0, 0.04897075172058318023658),
            (0.0, 1.0, 1.0e200, 3.183098861837906715378e-201),
            (1.0e300, 1.0, 1.0e300, 1.591549430918953357689e-301),
        ];
        for (x, sigma, gamma, e) in cases.iter() {
            let computed = voigt(*x, *sigma, *gamma);
            if relerr(computed, *e) >= 1.0e-14 {
                println!("voigt({}, {}, {}) computed: {} expected: {}", x, sigma, gamma, computed, e);
            }
            assert!(relerr(computed, *e) < 1.0e-14);
        }

        // no jump where the Lorentzian takes over from w(z)
        let (x, gamma) = (0.5, 1.0);
        let lorentzian = 0.2546479089470325372302;
        assert!(relerr(voigt(x, 1.0e-7, gamma), lorentzian) < 1.0e-12);
        assert!(relerr(voigt(x, 1.0e-9, gamma), lorentzian) < 1.0e-15);
    }

    #[test]
    fn test_voigt_at_hwhm_is_half_maximum() {
        let mut worst: f64 = 0.0;
        for i in -12..=12 {
            for j in -12..=12 {
                let sigma = 10f64.powf(i as f64 / 4.0);
                let gamma = 10f64.powf(j as f64 / 4.0);
                let h = voigt_hwhm(sigma, gamma);
                let half_max = 0.5 * voigt(0.0, sigma, gamma);
                worst = worst.max(relerr(voigt(h, sigma, gamma), half_max));
            }
        }
        println!("worst relative deviation from half maximum: {}", worst);
        assert!(worst < 1.0e-10);
    }

    #[test]
    fn test_clenshaw() {
        // T0 + T1 + T2 at t = 0.5: 1 + 0.5 - 0.5
        assert!((clenshaw(&[2.0, 1.0, 1.0], 0.5) - 1.0).abs() < 1.0e-15);
        // T3(t) = 4t^3 - 3t
        assert!((clenshaw(&[0.0, 0.0, 0.0, 1.0], 0.3) - (4.0 * 0.027 - 0.9)).abs() < 1.0e-15);
    }
}
