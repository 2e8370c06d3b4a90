//! Harmony engine
//!
//! Derives a family of related colors from one base color by rotating its
//! hue (or darkening it, for monochromatic), then nudges saturation and
//! lightness of every derived color by a small random amount.

use crate::color::Hex;
use crate::error::ColorError;
use rand::Rng;

/// Rule used to derive related colors from a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyScheme {
    Analogous,
    Triadic,
    Complementary,
    Split,
    Tetradic,
    Monochromatic,
}

impl HarmonyScheme {
    pub const ALL: [HarmonyScheme; 6] = [
        Self::Analogous,
        Self::Triadic,
        Self::Complementary,
        Self::Split,
        Self::Tetradic,
        Self::Monochromatic,
    ];

    /// Uniform pick over all schemes.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The un-jittered color at position `i` (i >= 1) of the sequence.
    pub fn variant(self, base: Hex, i: usize) -> Hex {
        let step = i as f32;
        match self {
            Self::Analogous => base.rotate_hue(step * 30.0),
            Self::Triadic => base.rotate_hue(step * 120.0),
            Self::Complementary => base.rotate_hue(step * 180.0),
            Self::Split => base.rotate_hue(if i % 2 == 0 { 150.0 } else { -150.0 }),
            Self::Tetradic => base.rotate_hue(step * 90.0),
            Self::Monochromatic => base.darken(step * 0.5),
        }
    }
}

impl std::fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::Split => "split",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        };
        f.write_str(name)
    }
}

/// Uniformly random opaque color.
pub fn random_hex<R: Rng + ?Sized>(rng: &mut R) -> Hex {
    Hex::new(rng.random(), rng.random(), rng.random())
}

/// `count` colors in one randomly chosen scheme, starting with `base`.
pub fn generate_harmony<R: Rng + ?Sized>(base: Hex, count: usize, rng: &mut R) -> Vec<Hex> {
    let scheme = HarmonyScheme::pick(rng);
    tracing::debug!(%base, %scheme, count, "generate harmony");
    generate_with_scheme(base, count, scheme, rng)
}

/// Like [`generate_harmony`] for a caller-supplied hex string.
pub fn generate_harmony_str<R: Rng + ?Sized>(
    base: &str,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Hex>, ColorError> {
    let base = Hex::parse(base)?;
    Ok(generate_harmony(base, count, rng))
}

pub fn generate_with_scheme<R: Rng + ?Sized>(
    base: Hex,
    count: usize,
    scheme: HarmonyScheme,
    rng: &mut R,
) -> Vec<Hex> {
    let mut colors = Vec::with_capacity(count);
    if count == 0 {
        return colors;
    }
    colors.push(base);
    for i in 1..count {
        colors.push(jitter(scheme.variant(base, i), rng));
    }
    colors
}

/// Symmetric saturation then brightness nudge in [-0.5, 0.5).
fn jitter<R: Rng + ?Sized>(color: Hex, rng: &mut R) -> Hex {
    let saturation = rng.random_range(-0.5f32..0.5);
    let brightness = rng.random_range(-0.5f32..0.5);
    color.saturate(saturation).brighten(brightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BASES: [&str; 5] = ["#3366CC", "ff0000", "#808080", "#000000", "#FFFFFF"];

    #[test]
    fn first_element_is_the_base() {
        let mut rng = StdRng::seed_from_u64(7);
        for base in BASES {
            for n in 1..=15 {
                let colors = generate_harmony_str(base, n, &mut rng).unwrap();
                assert_eq!(colors[0], Hex::parse(base).unwrap());
            }
        }
    }

    #[test]
    fn output_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(11);
        let base = Hex::new(10, 200, 90);
        for n in 1..=15 {
            assert_eq!(generate_harmony(base, n, &mut rng).len(), n);
        }
        assert!(generate_harmony(base, 0, &mut rng).is_empty());
    }

    #[test]
    fn count_one_is_just_the_base() {
        let mut rng = StdRng::seed_from_u64(3);
        let base = Hex::new(1, 2, 3);
        assert_eq!(generate_harmony(base, 1, &mut rng), vec![base]);
    }

    #[test]
    fn invalid_base_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_harmony_str("#12345", 4, &mut rng).is_err());
        assert!(generate_harmony_str("zzzzzz", 4, &mut rng).is_err());
    }

    #[test]
    fn every_scheme_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(HarmonyScheme::pick(&mut rng));
        }
        assert_eq!(seen.len(), HarmonyScheme::ALL.len());
    }

    #[test]
    fn hue_schemes_rotate_before_jitter() {
        let base = Hex::new(255, 0, 0);
        assert_eq!(HarmonyScheme::Triadic.variant(base, 1), Hex::new(0, 255, 0));
        assert_eq!(HarmonyScheme::Triadic.variant(base, 3), base);
        assert_eq!(HarmonyScheme::Complementary.variant(base, 2), base);
        assert_eq!(
            HarmonyScheme::Split.variant(base, 1),
            HarmonyScheme::Split.variant(base, 3)
        );
        assert_eq!(HarmonyScheme::Tetradic.variant(base, 4), base);
    }

    #[test]
    fn monochromatic_gets_darker() {
        let base = Hex::new(120, 180, 240);
        let mut last = base.relative_luminance();
        for i in 1..5 {
            let shade = HarmonyScheme::Monochromatic.variant(base, i);
            let lum = shade.relative_luminance();
            assert!(lum <= last);
            last = lum;
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let base = Hex::new(40, 90, 160);
        let a = generate_harmony(base, 8, &mut StdRng::seed_from_u64(99));
        let b = generate_harmony(base, 8, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
