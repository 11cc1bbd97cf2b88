// Run with: cargo run --release --example example

use num::complex::Complex;
use cerf::*;

fn main() {

let z = Complex::<f64>::new(1.21, -0.93);
let relerror = 1.0e-3;

println!("z = {}", z);
println!("erf(z)    = {}",    erf_with_relerror(z, relerror));
println!("erfc(z)   = {}",   erfc_with_relerror(z, relerror));
println!("erfcx(z)  = {}",  erfcx_with_relerror(z, relerror));
println!("erfi(z)   = {}",   erfi_with_relerror(z, relerror));
println!("w(z)      = {}",      w_with_relerror(z, relerror));
println!("dawson(z) = {}", dawson_with_relerror(z, relerror));

let x = 0.75_f64;
println!();
println!("x = {}", x);
println!("erf(x)    = {}", RealErrorFunctions::erf(x));
println!("erfcx(x)  = {}", x.erfcx());
println!("dawson(x) = {}", x.dawson());
println!("im_w(x)   = {}", im_w_of_x(x));
println!("re_w(x, 0.4) = {}, im_w(x, 0.4) = {}", re_w(x, 0.4), im_w(x, 0.4));

let xf = 0.75_f32;
println!("erf(x) in f32 = {}", RealErrorFunctions::erf(xf));

let (sigma, gamma) = (1.0, 0.5);
let hwhm = voigt_hwhm(sigma, gamma);
println!();
println!("voigt(0; sigma={}, gamma={}) = {}", sigma, gamma, voigt(0.0, sigma, gamma));
println!("voigt_hwhm(sigma={}, gamma={}) = {}", sigma, gamma, hwhm);
println!("voigt(hwhm)/voigt(0) = {}", voigt(hwhm, sigma, gamma) / voigt(0.0, sigma, gamma));
}
