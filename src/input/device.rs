use crate::config::ButtonLayout;
use crate::input::frame::InputFrame;
use crate::input::source::InputSource;

/// Direction symbols produced from axis readings.
pub mod direction {
    pub const UP: &str = "Up";
    pub const DOWN: &str = "Down";
    pub const LEFT: &str = "Left";
    pub const RIGHT: &str = "Right";
}

/// Host-side view of the raw device for one player.
///
/// The crate never reads hardware itself; the host implements this over
/// whatever backend it uses (keyboard polling, gamepad axes, a replay log).
pub trait DeviceState {
    /// Whether the named button went down this tick.
    fn button_down(&self, button: &str) -> bool;

    /// Current value of the named axis, in `[-1.0, 1.0]`.
    fn axis(&self, axis: &str) -> f32;
}

/// Translates raw device state into at most one symbol per tick.
///
/// Buttons are scanned in layout order and the first pressed one wins;
/// otherwise a saturated horizontal or vertical axis produces a direction
/// symbol. One parameterized type covers every player; per-player button
/// sets differ only in their [`ButtonLayout`].
pub struct DeviceSource<D> {
    layout: ButtonLayout,
    device: D,
}

impl<D: DeviceState> DeviceSource<D> {
    pub fn new(layout: ButtonLayout, device: D) -> Self {
        Self { layout, device }
    }

    pub fn layout(&self) -> &ButtonLayout {
        &self.layout
    }
}

impl<D: DeviceState> InputSource<String> for DeviceSource<D> {
    fn poll(&mut self, _dt: f32) -> Option<InputFrame<String>> {
        for button in self.layout.buttons() {
            if self.device.button_down(button) {
                return Some(InputFrame::new(button.to_string()));
            }
        }

        let horizontal = self.device.axis(&self.layout.horizontal_axis);
        if horizontal >= 1.0 {
            return Some(InputFrame::new(direction::RIGHT.to_string()));
        } else if horizontal <= -1.0 {
            return Some(InputFrame::new(direction::LEFT.to_string()));
        }

        let vertical = self.device.axis(&self.layout.vertical_axis);
        if vertical >= 1.0 {
            return Some(InputFrame::new(direction::UP.to_string()));
        } else if vertical <= -1.0 {
            return Some(InputFrame::new(direction::DOWN.to_string()));
        }

        Some(InputFrame::empty())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeDevice {
        buttons: Vec<String>,
        axes: HashMap<String, f32>,
    }

    impl DeviceState for FakeDevice {
        fn button_down(&self, button: &str) -> bool {
            self.buttons.iter().any(|b| b == button)
        }

        fn axis(&self, axis: &str) -> f32 {
            self.axes.get(axis).copied().unwrap_or(0.0)
        }
    }

    #[test]
    fn test_first_pressed_button_wins() {
        let mut source = DeviceSource::new(
            ButtonLayout::player1(),
            FakeDevice {
                buttons: vec!["HeavyPunch".into(), "LightPunch".into()],
                axes: HashMap::new(),
            },
        );

        // Scan order follows the layout, not press order.
        assert_eq!(source.poll(0.016), Some(InputFrame::new("LightPunch".to_string())));
    }

    #[test]
    fn test_axis_thresholds() {
        let layout = ButtonLayout::player1();
        let mut axes = HashMap::new();
        axes.insert(layout.horizontal_axis.clone(), -1.0);
        let mut source = DeviceSource::new(layout, FakeDevice { buttons: vec![], axes });

        assert_eq!(source.poll(0.016), Some(InputFrame::new("Left".to_string())));
    }

    #[test]
    fn test_buttons_shadow_axes() {
        let layout = ButtonLayout::player1();
        let mut axes = HashMap::new();
        axes.insert(layout.vertical_axis.clone(), 1.0);
        let mut source = DeviceSource::new(
            layout,
            FakeDevice {
                buttons: vec!["LightKick".into()],
                axes,
            },
        );

        assert_eq!(source.poll(0.016), Some(InputFrame::new("LightKick".to_string())));
    }

    #[test]
    fn test_idle_device_yields_empty_frame() {
        let mut source = DeviceSource::new(ButtonLayout::player1(), FakeDevice::default());
        assert_eq!(source.poll(0.016), Some(InputFrame::empty()));
    }

    #[test]
    fn test_sub_threshold_axis_is_empty() {
        let layout = ButtonLayout::player1();
        let mut axes = HashMap::new();
        axes.insert(layout.horizontal_axis.clone(), 0.5);
        axes.insert(layout.vertical_axis.clone(), -0.9);
        let mut source = DeviceSource::new(layout, FakeDevice { buttons: vec![], axes });

        assert_eq!(source.poll(0.016), Some(InputFrame::empty()));
    }
}
