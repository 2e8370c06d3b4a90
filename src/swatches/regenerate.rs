//! Lock-aware palette regeneration.
//!
//! Locked swatches stay exactly where they are. Every unlocked slot is
//! refilled, left to right, from one harmony sequence anchored on the first
//! locked color (or on a random color when nothing is locked). Harmony colors
//! equal to a locked color are skipped; once the sequence runs dry the slot
//! gets a random color instead.

use super::Palette;
use crate::color::Hex;
use crate::harmony::{generate_harmony, random_hex};
use rand::Rng;

/// Extra harmony colors requested beyond the palette length, consumed by
/// collision skips.
const HARMONY_MARGIN: usize = 5;

impl Palette {
    /// New palette with the same ids and order; only unlocked hexes change.
    pub fn regenerated<R: Rng + ?Sized>(&self, rng: &mut R) -> Palette {
        let supply = harmony_supply(self, rng);
        self.refill(supply, rng)
    }

    /// In-place form of [`Palette::regenerated`].
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = self.regenerated(rng);
    }

    /// Fill unlocked slots from `supply`, skipping locked hexes and falling
    /// back to random colors once `supply` is exhausted.
    pub(crate) fn refill<R, I>(&self, supply: I, rng: &mut R) -> Palette
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Hex>,
    {
        let locked: Vec<Hex> = self
            .swatches
            .iter()
            .filter(|s| s.locked)
            .map(|s| s.hex)
            .collect();

        let mut supply = supply.into_iter();
        let mut next = self.clone();
        for swatch in next.swatches.iter_mut().filter(|s| !s.locked) {
            swatch.hex = match supply.by_ref().find(|hex| !locked.contains(hex)) {
                Some(hex) => hex,
                None => {
                    tracing::debug!(slot = %swatch.id, "harmony supply exhausted");
                    random_hex(rng)
                }
            };
        }
        next
    }
}

fn harmony_supply<R: Rng + ?Sized>(palette: &Palette, rng: &mut R) -> Vec<Hex> {
    let anchor = match palette.swatches.iter().find(|s| s.locked) {
        Some(swatch) => swatch.hex,
        None => random_hex(rng),
    };
    generate_harmony(anchor, palette.len() + HARMONY_MARGIN, rng)
}
