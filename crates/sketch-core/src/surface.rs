//! The drawing surface a sketch paints onto.
//!
//! Sketches only ever talk to [`Surface`]; the browser front-end implements it
//! over a 2D canvas context and [`RecordingSurface`] captures the calls for
//! tests and headless runs.

use crate::math::Rect;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

impl TextBaseline {
    pub fn as_css(self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub color: &'static str,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f32,
    pub round_cap: bool,
}

pub trait Surface {
    fn size(&self) -> Vec2;
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, by: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, by: Vec2);
    fn set_global_alpha(&mut self, alpha: f32);
    /// CSS filter applied to following draws; `None` clears it.
    fn set_filter(&mut self, filter: Option<&str>);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    /// Draw a loaded image asset stretched into `dest`.
    fn draw_image(&mut self, image: &str, dest: Rect);
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle);
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);

    /// Paint the whole surface.
    fn clear(&mut self, color: &str) {
        let size = self.size();
        self.fill_rect(Rect::from_origin_size(Vec2::ZERO, size), color);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
    GlobalAlpha(f32),
    Filter(Option<String>),
    FillRect { rect: Rect, color: String },
    Image { name: String, dest: Rect },
    Polyline { points: Vec<Vec2>, style: StrokeStyle },
    Text { text: String, at: Vec2, style: TextStyle },
}

/// Surface that remembers every call instead of painting.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Names of the images drawn, in order.
    pub fn images(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }
    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
    fn translate(&mut self, by: Vec2) {
        self.commands.push(DrawCommand::Translate(by));
    }
    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate(radians));
    }
    fn scale(&mut self, by: Vec2) {
        self.commands.push(DrawCommand::Scale(by));
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }
    fn set_filter(&mut self, filter: Option<&str>) {
        self.commands
            .push(DrawCommand::Filter(filter.map(str::to_owned)));
    }
    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_owned(),
        });
    }
    fn draw_image(&mut self, image: &str, dest: Rect) {
        self.commands.push(DrawCommand::Image {
            name: image.to_owned(),
            dest,
        });
    }
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style: *style,
        });
    }
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
            style: style.clone(),
        });
    }
}
