//! Interaction dispatch: window events to surface-local press positions.
//!
//! [`Input`] folds raw winit events into per-frame state the way a game
//! input layer does: a press registers the frame it happens and is cleared
//! by [`Input::begin_frame`]. [`press_local`] then maps this frame's press,
//! if any, onto the interactive surface.
//!
//! Only two gestures interact: a left-button press and a touch start. A
//! second concurrent finger is ignored until the first lifts. Everything
//! else (other buttons, scroll, keys) falls through untouched.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// Axis-aligned rectangle of the interactive surface, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl SurfaceRect {
    /// A square of side `side` centered in a window of the given size.
    pub fn centered_square(window: Vec2, side: f32) -> Self {
        Self {
            min: (window - Vec2::splat(side)) * 0.5,
            size: Vec2::splat(side),
        }
    }

    /// Center point of the rect.
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Whether `p` (window pixels) lies inside the rect.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x
            && p.y >= self.min.y
            && p.x < self.min.x + self.size.x
            && p.y < self.min.y + self.size.y
    }
}

/// Per-frame pointer and touch state.
#[derive(Debug, Default)]
pub struct Input {
    cursor: Vec2,
    press_at: Option<Vec2>,
    active_touch: Option<u64>,
}

impl Input {
    /// Create an empty input tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of this frame's press (click or first-touch start), in
    /// window pixels.
    pub fn press(&self) -> Option<Vec2> {
        self.press_at
    }

    /// Clear per-frame state. Call once at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.press_at = None;
    }

    /// Fold a winit window event into the tracker.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                self.press_mouse();
            }
            WindowEvent::Touch(touch) => {
                let location = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => self.touch_started(touch.id, location),
                    TouchPhase::Ended | TouchPhase::Cancelled => self.touch_ended(touch.id),
                    TouchPhase::Moved => {}
                }
            }
            _ => {}
        }
    }

    fn press_mouse(&mut self) {
        self.press_at = Some(self.cursor);
    }

    fn touch_started(&mut self, id: u64, location: Vec2) {
        if self.active_touch.is_none() {
            self.active_touch = Some(id);
            self.press_at = Some(location);
        }
    }

    fn touch_ended(&mut self, id: u64) {
        if self.active_touch == Some(id) {
            self.active_touch = None;
        }
    }
}

/// Map this frame's press, if any, to surface-local coordinates.
///
/// With a known rect, presses outside it are ignored and presses inside it
/// are returned relative to the rect's top-left corner. Before the first
/// layout the rect may be unknown; the offset is then treated as zero and
/// the raw position passed through.
pub fn press_local(input: &Input, rect: Option<SurfaceRect>) -> Option<Vec2> {
    let press = input.press()?;
    match rect {
        Some(r) if r.contains(press) => Some(press - r.min),
        Some(_) => None,
        None => Some(press),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Events are awkward to construct outside winit, so tests drive the
    // same internal transitions handle_event dispatches to.

    #[test]
    fn mouse_press_registers_at_cursor() {
        let mut input = Input::new();
        input.cursor = Vec2::new(300.0, 200.0);
        input.press_mouse();
        assert_eq!(input.press(), Some(Vec2::new(300.0, 200.0)));
    }

    #[test]
    fn begin_frame_clears_press() {
        let mut input = Input::new();
        input.press_mouse();
        input.begin_frame();
        assert_eq!(input.press(), None);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut input = Input::new();
        input.touch_started(1, Vec2::new(10.0, 10.0));
        input.begin_frame();
        input.touch_started(2, Vec2::new(90.0, 90.0));
        assert_eq!(input.press(), None);

        // Lifting the wrong finger changes nothing; lifting the first one
        // frees the slot.
        input.touch_ended(2);
        input.touch_started(3, Vec2::ZERO);
        assert_eq!(input.press(), None);
        input.touch_ended(1);
        input.touch_started(3, Vec2::new(5.0, 6.0));
        assert_eq!(input.press(), Some(Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn press_maps_to_local_coordinates() {
        let mut input = Input::new();
        input.cursor = Vec2::new(450.0, 350.0);
        input.press_mouse();

        let rect = SurfaceRect {
            min: Vec2::new(400.0, 300.0),
            size: Vec2::new(200.0, 200.0),
        };
        assert_eq!(press_local(&input, Some(rect)), Some(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn press_outside_rect_is_dropped() {
        let mut input = Input::new();
        input.cursor = Vec2::new(10.0, 10.0);
        input.press_mouse();

        let rect = SurfaceRect {
            min: Vec2::new(400.0, 300.0),
            size: Vec2::new(200.0, 200.0),
        };
        assert_eq!(press_local(&input, Some(rect)), None);
    }

    #[test]
    fn unknown_rect_means_zero_offset() {
        let mut input = Input::new();
        input.cursor = Vec2::new(123.0, 45.0);
        input.press_mouse();
        assert_eq!(press_local(&input, None), Some(Vec2::new(123.0, 45.0)));
    }

    #[test]
    fn no_press_yields_nothing() {
        let input = Input::new();
        assert_eq!(press_local(&input, None), None);
    }

    #[test]
    fn centered_square_is_centered() {
        let rect = SurfaceRect::centered_square(Vec2::new(1280.0, 720.0), 360.0);
        assert_eq!(rect.center(), Vec2::new(640.0, 360.0));
        assert_eq!(rect.size, Vec2::splat(360.0));
    }
}
