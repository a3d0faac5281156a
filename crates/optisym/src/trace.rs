//! Synthetic traces drawn on instrument screens.
//!
//! Each generator returns raw samples: `x` runs over `[0, 0.8·W)` where `W`
//! is the screen width, and `y` is already scaled but not yet moved onto the
//! screen. [`Screen::place`] does the final translation.
//!
//! Randomized generators draw uniform values from the RNG they are given, so
//! a seeded RNG reproduces a trace exactly.

use std::f32::consts::PI;

use log::trace;
use rand::Rng;

use optisym_core::geometry::Point;

use crate::symbols::panel::Screen;

/// Half width, in samples, of every spectral peak.
const PEAK_HALF_WIDTH: f32 = 5.0;

/// Uniform value in `[-0.5, 0.5)`.
fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random::<f32>() - 0.5
}

/// Horizontal position of sample `i` of `samples`.
fn sample_x(screen: &Screen, i: usize, samples: usize) -> f32 {
    i as f32 / samples as f32 * 0.8 * screen.width()
}

/// Triangular peak of height `amplitude` centered on `center`, or `None`
/// outside the open interval `center ± 5`.
fn peak(x: usize, center: usize, amplitude: f32) -> Option<f32> {
    let distance = (x as f32 - center as f32).abs();
    (distance < PEAK_HALF_WIDTH).then(|| amplitude * (1.0 - distance / PEAK_HALF_WIDTH))
}

/// One sharp peak in the middle of a low noise floor, scaled by 0.8.
pub fn single_peak<R: Rng + ?Sized>(screen: &Screen, samples: usize, rng: &mut R) -> Vec<Point> {
    let height = screen.height();
    let center = samples / 2;

    let points: Vec<_> = (0..samples)
        .map(|x| {
            let y = peak(x, center, 0.8 * height).unwrap_or_else(|| 0.2 * height * jitter(rng));
            Point::new(sample_x(screen, x, samples), 0.8 * y)
        })
        .collect();

    trace!(samples = points.len(); "Generated single-peak spectrum");
    points
}

/// Three peaks at the quarter points with amplitudes 0.5, 0.7 and 0.5 over
/// a noise floor, scaled by 0.9.
///
/// Noise is added once for every peak a sample lies outside of.
pub fn multi_peak<R: Rng + ?Sized>(screen: &Screen, samples: usize, rng: &mut R) -> Vec<Point> {
    let height = screen.height();
    let peaks = [
        (samples / 4, 0.5),
        (samples / 2, 0.7),
        (3 * samples / 4, 0.5),
    ];

    let points: Vec<_> = (0..samples)
        .map(|x| {
            let y: f32 = peaks
                .iter()
                .map(|&(center, amplitude)| {
                    peak(x, center, amplitude * height)
                        .unwrap_or_else(|| 0.08 * height * jitter(rng))
                })
                .sum();
            Point::new(sample_x(screen, x, samples), 0.9 * y)
        })
        .collect();

    trace!(samples = points.len(); "Generated multi-peak spectrum");
    points
}

/// Sum of three sines at 2.5, 5 and 7.5 periods per trace, scaled by 0.45.
///
/// Deterministic.
pub fn sum_of_sines(screen: &Screen, samples: usize) -> Vec<Point> {
    let height = screen.height();
    let length = samples as f32;

    let points: Vec<_> = (0..samples)
        .map(|x| {
            let phase = PI * x as f32 / length;
            let y = 0.2 * height * (5.0 * phase).sin()
                + 0.2 * height * (10.0 * phase).sin()
                + 0.4 * height * (15.0 * phase).sin();
            Point::new(sample_x(screen, x, samples), 0.45 * y)
        })
        .collect();

    trace!(samples = points.len(); "Generated sum of sines");
    points
}

/// One period of a sine with uniform noise, scaled by 0.55.
pub fn noisy_sine<R: Rng + ?Sized>(screen: &Screen, samples: usize, rng: &mut R) -> Vec<Point> {
    let height = screen.height();
    let length = samples as f32;

    let points: Vec<_> = (0..samples)
        .map(|x| {
            let y = 0.5 * height * (2.0 * PI * x as f32 / length).sin()
                + 0.3 * height * jitter(rng);
            Point::new(sample_x(screen, x, samples), 0.55 * y)
        })
        .collect();

    trace!(samples = points.len(); "Generated noisy sine");
    points
}
