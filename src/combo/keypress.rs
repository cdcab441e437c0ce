/// A single timed symbol constraint within a combo sequence.
///
/// Durations are in seconds. A negative `min_duration` marks an
/// instantaneous step: the symbol must match on a single tick and the
/// cursor moves past it immediately. A non-negative `min_duration` requires
/// the symbol to be held at least that long; a non-negative `max_duration`
/// invalidates the attempt once the hold runs over it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPress<S> {
    symbol: S,
    min_duration: f32,
    max_duration: f32,
}

impl<S> KeyPress<S> {
    /// A step that matches on a single tick, no hold required.
    pub fn instant(symbol: S) -> Self {
        Self {
            symbol,
            min_duration: -1.0,
            max_duration: -1.0,
        }
    }

    /// A step held for at least `min_duration` seconds, with no upper bound.
    pub fn held(symbol: S, min_duration: f32) -> Self {
        Self {
            symbol,
            min_duration,
            max_duration: -1.0,
        }
    }

    /// A step held between `min_duration` and `max_duration` seconds.
    pub fn held_within(symbol: S, min_duration: f32, max_duration: f32) -> Self {
        Self {
            symbol,
            min_duration,
            max_duration,
        }
    }

    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn min_duration(&self) -> f32 {
        self.min_duration
    }

    pub fn max_duration(&self) -> f32 {
        self.max_duration
    }

    pub fn is_instant(&self) -> bool {
        self.min_duration < 0.0
    }

    /// Whether the hold times out after `max_duration` seconds.
    pub fn has_timeout(&self) -> bool {
        self.max_duration >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_step() {
        let step = KeyPress::instant("Fire1");
        assert!(step.is_instant());
        assert!(!step.has_timeout());
    }

    #[test]
    fn test_held_step() {
        let step = KeyPress::held("Down", 1.0);
        assert!(!step.is_instant());
        assert!(!step.has_timeout());
        assert_eq!(step.min_duration(), 1.0);
    }

    #[test]
    fn test_held_within_step() {
        let step = KeyPress::held_within("Right", 0.0, 1.0);
        assert!(!step.is_instant());
        assert!(step.has_timeout());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(KeyPress::instant("A"), KeyPress::instant("A"));
        assert_ne!(KeyPress::instant("A"), KeyPress::held("A", 0.0));
        assert_ne!(
            KeyPress::held_within("A", 0.0, 1.0),
            KeyPress::held_within("A", 0.0, 2.0)
        );
    }
}
