/// Sample from a normal distribution with the given mean and standard
/// deviation using the Box-Muller transform.
#[inline]
pub(crate) fn normal(rng: &mut fastrand::Rng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.f64().max(f64::EPSILON);
    let u2 = rng.f64();
    let z = (-2.0 * u1.ln()).sqrt() * (core::f64::consts::TAU * u2).cos();
    mean + z * std_dev
}
