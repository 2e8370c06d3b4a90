pub mod regenerate;

use crate::color::Hex;
use crate::harmony::random_hex;
use rand::Rng;

pub const MIN_SLOTS: usize = 2;
pub const MAX_SLOTS: usize = 10;

/// Stable identity of a slot. Never reused within a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub id: SlotId,
    pub hex: Hex,
    pub locked: bool,
}

/// Ordered row of 2..=10 swatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Swatch>,
    next_id: u64,
}

impl Palette {
    /// `size` random unlocked swatches, size clamped into bounds.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut palette = Self {
            swatches: Vec::new(),
            next_id: 0,
        };
        for _ in 0..size.clamp(MIN_SLOTS, MAX_SLOTS) {
            let swatch = palette.fresh(random_hex(rng));
            palette.swatches.push(swatch);
        }
        palette
    }

    /// Unlocked swatches for the given colors. `None` below the minimum;
    /// anything past the maximum is dropped.
    pub fn from_hexes(hexes: &[Hex]) -> Option<Self> {
        if hexes.len() < MIN_SLOTS {
            return None;
        }
        let mut palette = Self {
            swatches: Vec::new(),
            next_id: 0,
        };
        palette.fill(hexes);
        Some(palette)
    }

    /// Swap every swatch for fresh unlocked ones with new ids.
    pub fn replace_all(&mut self, hexes: &[Hex]) -> bool {
        if hexes.len() < MIN_SLOTS {
            return false;
        }
        self.swatches.clear();
        self.fill(hexes);
        true
    }

    fn fill(&mut self, hexes: &[Hex]) {
        for hex in hexes.iter().take(MAX_SLOTS) {
            let swatch = self.fresh(*hex);
            self.swatches.push(swatch);
        }
    }

    fn fresh(&mut self, hex: Hex) -> Swatch {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        Swatch {
            id,
            hex,
            locked: false,
        }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn hexes(&self) -> Vec<Hex> {
        self.swatches.iter().map(|s| s.hex).collect()
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    pub fn position(&self, id: SlotId) -> Option<usize> {
        self.swatches.iter().position(|s| s.id == id)
    }

    /// Flip the lock of the swatch with this id.
    pub fn toggle_lock(&mut self, id: SlotId) -> bool {
        match self.swatches.iter_mut().find(|s| s.id == id) {
            Some(swatch) => {
                swatch.locked = !swatch.locked;
                true
            }
            None => false,
        }
    }

    /// Lock or unlock the swatch at `index`.
    pub fn set_locked(&mut self, index: usize, locked: bool) -> bool {
        match self.swatches.get_mut(index) {
            Some(swatch) => {
                swatch.locked = locked;
                true
            }
            None => false,
        }
    }

    /// Insert a random unlocked swatch right after `index` (at the end if
    /// `index` is past it). No-op when full.
    pub fn add_after<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> bool {
        if self.swatches.len() >= MAX_SLOTS {
            return false;
        }
        let at = (index + 1).min(self.swatches.len());
        let swatch = self.fresh(random_hex(rng));
        self.swatches.insert(at, swatch);
        true
    }

    /// Remove the swatch with this id. No-op at the minimum size.
    pub fn remove(&mut self, id: SlotId) -> bool {
        if self.swatches.len() <= MIN_SLOTS {
            return false;
        }
        match self.position(id) {
            Some(index) => {
                self.swatches.remove(index);
                true
            }
            None => false,
        }
    }

    /// Grow with random unlocked swatches at the end, or truncate from the end.
    pub fn resize<R: Rng + ?Sized>(&mut self, new_size: usize, rng: &mut R) -> bool {
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&new_size) || new_size == self.swatches.len() {
            return false;
        }
        if new_size < self.swatches.len() {
            self.swatches.truncate(new_size);
        } else {
            while self.swatches.len() < new_size {
                let swatch = self.fresh(random_hex(rng));
                self.swatches.push(swatch);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    fn ids(p: &Palette) -> Vec<SlotId> {
        p.swatches().iter().map(|s| s.id).collect()
    }

    #[test]
    fn random_palette_is_unlocked_and_bounded() {
        let mut rng = rng();
        let p = Palette::random(5, &mut rng);
        assert_eq!(p.len(), 5);
        assert!(!p.is_empty());
        assert!(p.swatches().iter().all(|s| !s.locked));
        assert_eq!(Palette::random(0, &mut rng).len(), MIN_SLOTS);
        assert_eq!(Palette::random(50, &mut rng).len(), MAX_SLOTS);
    }

    #[test]
    fn toggle_lock_flips_only_that_slot() {
        let mut p = Palette::random(4, &mut rng());
        let id = p.swatches()[2].id;
        assert!(p.toggle_lock(id));
        let locked: Vec<bool> = p.swatches().iter().map(|s| s.locked).collect();
        assert_eq!(locked, vec![false, false, true, false]);
        assert!(p.toggle_lock(id));
        assert!(!p.swatches()[2].locked);
    }

    #[test]
    fn toggle_lock_unknown_id_is_noop() {
        let mut p = Palette::random(3, &mut rng());
        let before = p.clone();
        assert!(!p.toggle_lock(SlotId(999)));
        assert_eq!(p, before);
    }

    #[test]
    fn add_inserts_after_index() {
        let mut rng = rng();
        let mut p = Palette::random(3, &mut rng);
        let before = ids(&p);
        assert!(p.add_after(0, &mut rng));
        let after = ids(&p);
        assert_eq!(after.len(), 4);
        assert_eq!(after[0], before[0]);
        assert!(!before.contains(&after[1]));
        assert_eq!(&after[2..], &before[1..]);
        assert!(!p.swatches()[1].locked);
    }

    #[test]
    fn add_past_end_appends() {
        let mut rng = rng();
        let mut p = Palette::random(3, &mut rng);
        assert!(p.add_after(42, &mut rng));
        assert_eq!(p.len(), 4);
        assert_eq!(p.swatches()[3].id, SlotId(3));
    }

    #[test]
    fn full_palette_rejects_add() {
        let mut rng = rng();
        let mut p = Palette::random(MAX_SLOTS, &mut rng);
        let before = p.clone();
        assert!(!p.add_after(3, &mut rng));
        assert_eq!(p, before);
    }

    #[test]
    fn minimal_palette_rejects_remove() {
        let mut p = Palette::random(MIN_SLOTS, &mut rng());
        for s in p.clone().swatches() {
            assert!(!p.remove(s.id));
            assert_eq!(p.len(), MIN_SLOTS);
        }
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let mut rng = rng();
        let mut p = Palette::random(4, &mut rng);
        let gone = p.swatches()[3].id;
        assert!(p.remove(gone));
        assert!(p.add_after(2, &mut rng));
        assert!(!ids(&p).contains(&gone));
    }

    #[test]
    fn resize_grows_and_truncates_from_end() {
        let mut rng = rng();
        let mut p = Palette::random(5, &mut rng);
        let before = ids(&p);
        assert!(p.resize(8, &mut rng));
        assert_eq!(&ids(&p)[..5], &before[..]);
        assert!(p.swatches()[5..].iter().all(|s| !s.locked));
        assert!(p.resize(3, &mut rng));
        assert_eq!(ids(&p), before[..3].to_vec());
    }

    #[test]
    fn resize_out_of_bounds_is_noop() {
        let mut rng = rng();
        let mut p = Palette::random(5, &mut rng);
        let before = p.clone();
        assert!(!p.resize(1, &mut rng));
        assert!(!p.resize(11, &mut rng));
        assert_eq!(p, before);
    }

    #[test]
    fn length_stays_in_bounds_under_any_sequence() {
        let mut rng = rng();
        let mut p = Palette::random(5, &mut rng);
        for step in 0..200usize {
            match step % 4 {
                0 => {
                    p.add_after(step % 7, &mut rng);
                }
                1 | 2 => {
                    let id = p.swatches()[step % p.len()].id;
                    p.remove(id);
                }
                _ => {
                    p.resize(step % 13, &mut rng);
                }
            }
            assert!((MIN_SLOTS..=MAX_SLOTS).contains(&p.len()));
        }
    }

    #[test]
    fn from_hexes_enforces_bounds() {
        let hexes: Vec<Hex> = (0..12).map(|i| Hex::new(i, i, i)).collect();
        assert!(Palette::from_hexes(&hexes[..1]).is_none());
        let p = Palette::from_hexes(&hexes).unwrap();
        assert_eq!(p.len(), MAX_SLOTS);
        assert_eq!(p.hexes(), hexes[..MAX_SLOTS].to_vec());
    }

    #[test]
    fn replace_all_issues_fresh_ids() {
        let mut p = Palette::random(3, &mut rng());
        let old = ids(&p);
        assert!(p.replace_all(&[Hex::new(1, 1, 1), Hex::new(2, 2, 2)]));
        assert_eq!(p.len(), 2);
        assert!(ids(&p).iter().all(|id| !old.contains(id)));
        assert!(!p.replace_all(&[Hex::new(3, 3, 3)]));
        assert_eq!(p.len(), 2);
    }
}
