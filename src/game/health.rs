/// Bounded resource meter. All mutation clamps to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    current: i32,
    max: i32,
}

impl Meter {
    /// Create a meter filled to `max`.
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn set(&mut self, value: i32) {
        self.current = value.clamp(0, self.max);
    }

    pub fn deplete(&mut self, amount: i32) {
        self.set(self.current - amount);
    }

    pub fn restore(&mut self, amount: i32) {
        self.set(self.current + amount);
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Fill fraction in `[0.0, 1.0]`, for bar presentation.
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }
}

/// Default health pool for a fighter.
pub const MAX_HEALTH: i32 = 100;
/// Default EX gauge for a fighter.
pub const MAX_EX: i32 = 100;

/// One fighter's depletable resources: health and the EX gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    pub health: Meter,
    pub ex: Meter,
}

impl Vitals {
    pub fn new() -> Self {
        Self {
            health: Meter::full(MAX_HEALTH),
            ex: Meter::full(MAX_EX),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_empty()
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_starts_full() {
        let meter = Meter::full(100);
        assert_eq!(meter.current(), 100);
        assert!(!meter.is_empty());
    }

    #[test]
    fn test_deplete_clamps_at_zero() {
        let mut meter = Meter::full(100);
        meter.deplete(150);
        assert_eq!(meter.current(), 0);
        assert!(meter.is_empty());
    }

    #[test]
    fn test_restore_clamps_at_max() {
        let mut meter = Meter::full(100);
        meter.deplete(10);
        meter.restore(50);
        assert_eq!(meter.current(), 100);
    }

    #[test]
    fn test_ratio() {
        let mut meter = Meter::full(100);
        meter.deplete(25);
        assert!((meter.ratio() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_vitals_death() {
        let mut vitals = Vitals::new();
        assert!(!vitals.is_dead());
        vitals.health.deplete(MAX_HEALTH);
        assert!(vitals.is_dead());
    }
}
