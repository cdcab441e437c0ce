/// One per-tick input observation.
///
/// A frame either carries a recognized symbol (a button or direction name)
/// or is explicitly empty: nothing was pressed this tick. An empty frame is
/// a real observation and is distinct from a suppressed tick, where the
/// source produces no frame at all (`InputSource::poll` returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFrame<S> {
    symbol: Option<S>,
}

impl<S> InputFrame<S> {
    /// Create a frame carrying a recognized symbol.
    pub fn new(symbol: S) -> Self {
        Self {
            symbol: Some(symbol),
        }
    }

    /// Create an explicitly empty frame ("no buttons, no direction").
    pub fn empty() -> Self {
        Self { symbol: None }
    }

    /// The symbol sensed this tick, if any.
    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_with_symbol() {
        let frame = InputFrame::new("Fire1");
        assert_eq!(frame.symbol(), Some(&"Fire1"));
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_empty_frame() {
        let frame: InputFrame<&str> = InputFrame::empty();
        assert_eq!(frame.symbol(), None);
        assert!(frame.is_empty());
    }
}
