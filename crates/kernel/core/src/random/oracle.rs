/// Source of gameplay randomness: hit chance, loot rolls, stat variance.
///
/// Ranges are inclusive and may be given in either order; `min == max`
/// always returns that value.
pub trait RandomOracle: Send + Sync {
    /// Uniform draw from `[min, max]`.
    fn uniform(&self, min: i32, max: i32) -> i32;

    /// Bell-shaped draw from `[min, max]` concentrated around the midpoint.
    fn weighted(&self, min: i32, max: i32) -> i32;

    /// True with the given probability.
    fn bernoulli(&self, probability: f64) -> bool;

    /// Fair coin flip.
    fn bernoulli_even(&self) -> bool {
        self.bernoulli(0.5)
    }

    /// Percentage roll in `[1, 100]`.
    fn roll_d100(&self) -> i32 {
        self.uniform(1, 100)
    }

    /// True when a `[1, 100]` roll lands at or below `chance`.
    fn chance(&self, chance: i32) -> bool {
        self.roll_d100() <= chance
    }
}
