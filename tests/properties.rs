use approx::{assert_abs_diff_eq, assert_relative_eq};
use cerf::*;
use proptest::prelude::*;


fn moderate() -> impl Strategy<Value = f64> {
    -5.0..5.0_f64
}

fn width() -> impl Strategy<Value = f64> {
    (-3.0..3.0_f64).prop_map(|e| 10f64.powf(e))
}


proptest! {

    #[test]
    fn real_functions_are_odd(x in -1.0e3..1.0e3_f64) {
        prop_assert_eq!(RealErrorFunctions::erf(-x), -RealErrorFunctions::erf(x));
        prop_assert_eq!(RealErrorFunctions::erfi(-x), -RealErrorFunctions::erfi(x));
        prop_assert_eq!(RealErrorFunctions::dawson(-x), -RealErrorFunctions::dawson(x));
        prop_assert_eq!(im_w_of_x(-x), -im_w_of_x(x));
    }

    #[test]
    fn real_erf_plus_erfc_is_one(x in -30.0..30.0_f64) {
        let sum = RealErrorFunctions::erf(x) + RealErrorFunctions::erfc(x);
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1.0e-14);
    }

    #[test]
    fn erfcx_is_scaled_erfc(x in -5.0..20.0_f64) {
        let scaled = (x * x).exp() * RealErrorFunctions::erfc(x);
        assert_relative_eq!(RealErrorFunctions::erfcx(x), scaled, max_relative = 1.0e-13);
    }

    #[test]
    fn complex_erf_plus_erfc_is_one(x in moderate(), y in moderate()) {
        let z = Complex64::new(x, y);
        let erf = z.erf();
        let sum = erf + z.erfc();
        let scale = erf.norm().max(1.0);
        assert_abs_diff_eq!(sum.re, 1.0, epsilon = 1.0e-13 * scale);
        assert_abs_diff_eq!(sum.im, 0.0, epsilon = 1.0e-13 * scale);
    }

    #[test]
    fn w_agrees_with_its_parts(x in -50.0..50.0_f64, y in -5.0..50.0_f64) {
        let w = faddeeva_w(Complex64::new(x, y));
        prop_assert_eq!(re_w(x, y), w.re);
        prop_assert_eq!(im_w(x, y), w.im);
        let e = Complex64::new(y, -x).erfcx();
        prop_assert_eq!(e, w);
    }

    #[test]
    fn nan_argument_gives_nan(x in moderate()) {
        prop_assert!(RealErrorFunctions::erf(f64::NAN).is_nan());
        let w = faddeeva_w(Complex64::new(x, f64::NAN));
        prop_assert!(w.re.is_nan());
        let w = faddeeva_w(Complex64::new(f64::NAN, x));
        prop_assert!(w.re.is_nan() && w.im.is_nan());
        prop_assert!(voigt(f64::NAN, 1.0, x.abs()).is_nan());
        prop_assert!(voigt_hwhm(f64::NAN, x).is_nan());
    }

    #[test]
    fn voigt_is_non_negative_and_even(x in -1.0e3..1.0e3_f64, sigma in width(), gamma in width()) {
        let v = voigt(x, sigma, gamma);
        prop_assert!(v >= 0.0);
        prop_assert_eq!(v, voigt(-x, sigma, gamma));
        prop_assert!(v <= voigt(0.0, sigma, gamma) * (1.0 + 1.0e-13));
    }

    #[test]
    fn voigt_at_hwhm_is_half_maximum(sigma in width(), gamma in width()) {
        let h = voigt_hwhm(sigma, gamma);
        let half_maximum = 0.5 * voigt(0.0, sigma, gamma);
        assert_relative_eq!(voigt(h, sigma, gamma), half_maximum, max_relative = 1.0e-10);
    }

    #[test]
    fn hwhm_is_homogeneous(sigma in width(), gamma in width(), scale in 1.0e-3..1.0e3_f64) {
        let h = voigt_hwhm(sigma, gamma);
        assert_relative_eq!(voigt_hwhm(scale * sigma, scale * gamma), scale * h, max_relative = 1.0e-13);
    }

    #[test]
    fn f32_matches_rounded_f64(x in -10.0..10.0_f32) {
        prop_assert_eq!(RealErrorFunctions::erf(x), RealErrorFunctions::erf(x as f64) as f32);
        prop_assert_eq!(RealErrorFunctions::erfcx(x), RealErrorFunctions::erfcx(x as f64) as f32);
    }
}
