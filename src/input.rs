use glam::Vec2;
use sketch_core::{client_to_canvas, InputEvent};
use web_sys as web;

/// The DOM pointer events a sketch listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
}

impl PointerKind {
    pub const ALL: [PointerKind; 4] = [
        PointerKind::Down,
        PointerKind::Move,
        PointerKind::Up,
        PointerKind::Leave,
    ];

    pub fn event_name(self) -> &'static str {
        match self {
            PointerKind::Down => "pointerdown",
            PointerKind::Move => "pointermove",
            PointerKind::Up => "pointerup",
            PointerKind::Leave => "pointerleave",
        }
    }
}

/// Translate a DOM pointer event into sketch input. Positional events need a
/// canvas position; leaving the canvas does not.
#[inline]
pub fn input_event(kind: PointerKind, pos: Option<Vec2>) -> Option<InputEvent> {
    match (kind, pos) {
        (PointerKind::Leave, _) => Some(InputEvent::Leave),
        (PointerKind::Down, Some(p)) => Some(InputEvent::Press(p)),
        (PointerKind::Move, Some(p)) => Some(InputEvent::Move(p)),
        (PointerKind::Up, Some(p)) => Some(InputEvent::Release(p)),
        (_, None) => None,
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
