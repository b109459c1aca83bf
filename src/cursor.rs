//! Pointer tracking for cursor repulsion.
//!
//! The cursor is plain shared state on the effect's event loop thread:
//! the window event handler writes it, the physics step reads it.
//! There is no position until the pointer first enters the surface, and
//! none again after it leaves - the physics step treats that as the
//! pointer being infinitely far away.

use glam::Vec2;
use winit::event::WindowEvent;

/// Pointer state as seen by the simulation.
#[derive(Debug, Default)]
pub struct Cursor {
    position: Option<Vec2>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position in surface pixels, if any.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.position = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_a_position() {
        let cursor = Cursor::new();
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn tracks_the_latest_position() {
        let mut cursor = Cursor::new();

        // Simulate movement via direct state manipulation (normally
        // done via handle_event).
        cursor.position = Some(Vec2::new(12.0, 34.0));
        assert_eq!(cursor.position(), Some(Vec2::new(12.0, 34.0)));

        cursor.position = Some(Vec2::new(56.0, 78.0));
        assert_eq!(cursor.position(), Some(Vec2::new(56.0, 78.0)));
    }

    #[test]
    fn leaving_clears_the_position() {
        let mut cursor = Cursor::new();
        cursor.position = Some(Vec2::new(1.0, 2.0));

        cursor.position = None;
        assert_eq!(cursor.position(), None);
    }
}
