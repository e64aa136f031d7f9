use ratatui::Frame;
use ratatui::layout::Rect;

/// A renderable piece of the UI.
///
/// Two kinds of component implement this:
///
/// - stateless, props-only pieces (`HeaderBar`, `TabBar`,
///   `DetailScreen`), built fresh each frame from core state;
/// - transient wrappers over persistent state (`HomeList` around
///   `HomeListState`), where selection and scroll offsets must outlive
///   the frame.
///
/// `render` takes `&mut self` so the second kind can clamp and update
/// its presentation state during the render pass, in line with
/// Ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal input.
///
/// Implemented on the persistent state type (`HomeListState`), not the
/// per-frame wrapper, because events arrive between frames.
pub trait EventHandler {
    /// High-level event handed back to the event loop, if any.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally emit an event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
