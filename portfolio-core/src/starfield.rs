//! Starry-night backdrop for hero sections.
//!
//! Only the geometry lives here; the web crate turns a [`Starfield`] into
//! absolutely positioned elements inside `.stars-container`.

use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarfieldConfig {
    /// `(star count, layer class)` from small to large stars.
    pub layers: Vec<(usize, &'static str)>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                (50, "stars-layer-1"),
                (30, "stars-layer-2"),
                (15, "stars-layer-3"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    pub class: &'static str,
    pub stars: Vec<Star>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShootingStar {
    pub top: &'static str,
    pub left: &'static str,
    pub delay: &'static str,
    pub duration: &'static str,
}

pub const SHOOTING_STARS: [ShootingStar; 5] = [
    ShootingStar { top: "20%", left: "10%", delay: "0s", duration: "3s" },
    ShootingStar { top: "40%", left: "60%", delay: "5s", duration: "4s" },
    ShootingStar { top: "70%", left: "30%", delay: "8s", duration: "3.5s" },
    ShootingStar { top: "15%", left: "80%", delay: "12s", duration: "3.2s" },
    ShootingStar { top: "60%", left: "5%", delay: "15s", duration: "3.8s" },
];

/// Closed outline; the last point repeats the first.
pub const CONSTELLATION: [(f64, f64); 5] = [(20.0, 30.0), (35.0, 25.0), (45.0, 40.0), (30.0, 50.0), (20.0, 30.0)];

pub const NEBULAS: [&str; 2] = ["nebula-glow nebula-1", "nebula-glow nebula-2"];

/// One segment, anchored at its start point and rotated toward its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstellationLine {
    pub left_pct: f64,
    pub top_pct: f64,
    pub length_pct: f64,
    pub angle_deg: f64,
    pub delay_s: f64,
}

#[must_use]
pub fn constellation_lines() -> Vec<ConstellationLine> {
    CONSTELLATION
        .windows(2)
        .zip(0_u32..)
        .map(|(pair, i)| {
            let (x1, y1) = pair[0];
            let (x2, y2) = pair[1];
            let (dx, dy) = (x2 - x1, y2 - y1);
            ConstellationLine {
                left_pct: x1,
                top_pct: y1,
                length_pct: dx.hypot(dy),
                angle_deg: dy.atan2(dx).to_degrees(),
                delay_s: f64::from(i) * 0.5,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    pub layers: Vec<StarLayer>,
    pub shooting_stars: Vec<ShootingStar>,
    pub constellation: Vec<ConstellationLine>,
    pub nebulas: Vec<&'static str>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let layers = config
            .layers
            .iter()
            .map(|&(count, class)| StarLayer {
                class,
                stars: (0..count)
                    .map(|_| Star {
                        left_pct: rng.gen_range(0.0..100.0),
                        top_pct: rng.gen_range(0.0..100.0),
                        delay_s: rng.gen_range(0.0..3.0),
                        opacity: rng.gen_range(0.5..1.0),
                    })
                    .collect(),
            })
            .collect();
        Self {
            layers,
            shooting_stars: SHOOTING_STARS.to_vec(),
            constellation: constellation_lines(),
            nebulas: NEBULAS.to_vec(),
        }
    }

    #[must_use]
    pub fn star_count(&self) -> usize {
        self.layers.iter().map(|l| l.stars.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn layers_have_expected_densities_and_ranges() {
        let field = Starfield::generate(&StarfieldConfig::default(), &mut ChaCha8Rng::seed_from_u64(3));
        let counts: Vec<usize> = field.layers.iter().map(|l| l.stars.len()).collect();
        assert_eq!(counts, vec![50, 30, 15]);
        assert_eq!(field.star_count(), 95);
        for star in field.layers.iter().flat_map(|l| &l.stars) {
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.0..3.0).contains(&star.delay_s));
            assert!((0.5..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn fixed_decorations() {
        let field = Starfield::generate(&StarfieldConfig::default(), &mut ChaCha8Rng::seed_from_u64(0));
        assert_eq!(field.shooting_stars.len(), 5);
        assert_eq!(field.nebulas.len(), 2);
        assert_eq!(field.constellation.len(), 4);
    }

    #[test]
    fn constellation_segment_geometry() {
        let lines = constellation_lines();
        let first = lines[0];
        assert!((first.length_pct - 15.0_f64.hypot(-5.0)).abs() < 1e-9);
        assert!((first.angle_deg - (-5.0_f64).atan2(15.0).to_degrees()).abs() < 1e-9);
        assert!((lines[3].delay_s - 1.5).abs() < f64::EPSILON);
        // closed shape: last segment ends at the first point
        assert!((lines[3].left_pct - 30.0).abs() < f64::EPSILON);
        assert!((lines[3].top_pct - 50.0).abs() < f64::EPSILON);
    }
}
