//! Synthetic dataset generation
//!
//! Produces the fixed boundary points for garden 1 and a grid of
//! interpolated color samples spanning the garden's bounding box. Structure
//! is deterministic; color and timestamp content comes from the injected
//! random source, so a seeded generator yields reproducible files while
//! `rand::thread_rng()` reproduces the original unseeded behavior.

use crate::models::{ColorSample, Dataset, Point};
use rand::Rng;

/// Garden covered by the seed dataset.
pub const GARDEN_ID: u32 = 1;

/// Device id stamped on every grid sample.
pub const DEVICE_ID: &str = "esp32s3_01";

/// Bounding box of garden 1.
pub const LAT_MIN: f64 = 14.042;
pub const LAT_MAX: f64 = 14.045;
pub const LNG_MIN: f64 = 100.610;
pub const LNG_MAX: f64 = 100.615;

/// Grid dimensions.
pub const ROWS: u32 = 10;
pub const COLS: u32 = 10;

/// The four boundary vertices of garden 1, in manual order.
pub fn boundary_points() -> Vec<Point> {
    vec![
        Point { garden_id: GARDEN_ID, point_no: 1, latitude: LAT_MAX, longitude: LNG_MIN },
        Point { garden_id: GARDEN_ID, point_no: 2, latitude: LAT_MAX, longitude: LNG_MAX },
        Point { garden_id: GARDEN_ID, point_no: 3, latitude: LAT_MIN, longitude: LNG_MAX },
        Point { garden_id: GARDEN_ID, point_no: 4, latitude: LAT_MIN, longitude: LNG_MIN },
    ]
}

/// Generate the full seed dataset: 4 boundary points plus ROWS×COLS color
/// samples in row-major order.
pub fn generate_dataset(rng: &mut impl Rng) -> Dataset {
    let mut colors = Vec::with_capacity((ROWS * COLS) as usize);

    for i in 0..ROWS {
        for j in 0..COLS {
            // Row index walks latitude down from lat_max; column index walks
            // longitude up from lng_min.
            let lat = LAT_MAX - f64::from(i) * (LAT_MAX - LAT_MIN) / f64::from(ROWS);
            let lng = LNG_MIN + f64::from(j) * (LNG_MAX - LNG_MIN) / f64::from(COLS);

            colors.push(ColorSample {
                device_id: DEVICE_ID.to_string(),
                garden_id: GARDEN_ID,
                latitude: round6(lat),
                longitude: round6(lng),
                r: rng.gen_range(150..=255),
                g: rng.gen_range(150..=255),
                b: rng.gen_range(0..=100),
                ts: rng.gen_range(1_000_000..=2_000_000),
            });
        }
    }

    Dataset {
        points: boundary_points(),
        colors,
    }
}

/// Round a coordinate to 6 decimal places.
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
