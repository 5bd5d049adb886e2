//! A tool to generate and clamp noise.

use rand_distr::{Normal, Distribution};


/// Samples a normal distribution at the given mean and standard deviation and clamps
/// the output between the given minimum and maximum, if the standard deviation is
/// not positive the mean is always returned
pub fn clamped_normal(mean: f32, std: f32, minimum: f32, maximum: f32) -> f32 {
    if std <= 0.0 {
        return mean.clamp(minimum, maximum);
    }

    let normal = Normal::new(mean, std).unwrap();
    let output: f32 = normal.sample(&mut rand::thread_rng());

    output.clamp(minimum, maximum)
}
