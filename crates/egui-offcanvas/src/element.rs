use crate::container::{Overflow, Positioning};
use crate::options::{OffCanvasOptions, Position};
use crate::transition::Track;
use egui::{Pos2, Rect, Vec2};

/// Marker class carried by an open panel.
pub const ACTIVE_CLASS: &str = "active";

/// Whether an element is laid out against the screen or against its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Fixed,
    Absolute,
}

impl Placement {
    pub fn from_fixed(fixed: bool) -> Self {
        if fixed {
            Placement::Fixed
        } else {
            Placement::Absolute
        }
    }

    pub fn reference(&self, container: Rect, screen: Rect) -> Rect {
        match self {
            Placement::Fixed => screen,
            Placement::Absolute => container,
        }
    }
}

/// The sliding panel.
#[derive(Debug, Clone)]
pub struct PanelElement {
    classes: Vec<String>,
    placement: Placement,
    position: Position,
    extent: f32,
    padding: f32,
    content: String,
    pub(crate) track: Track,
}

impl PanelElement {
    pub(crate) fn new(options: &OffCanvasOptions, extent: f32, padding: f32) -> Self {
        Self {
            classes: options
                .canvas_class
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
            placement: Placement::from_fixed(options.fixed_position),
            position: options.position,
            extent,
            padding,
            content: options.content.clone(),
            track: Track::default(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Size along the sliding axis.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn translation(&self) -> Vec2 {
        self.track.translation()
    }

    pub fn is_animating(&self) -> bool {
        self.track.is_running()
    }

    /// Untranslated rect: just outside `reference`, on the configured edge.
    pub fn rest_rect(&self, reference: Rect) -> Rect {
        let extent = self.extent;
        match self.position {
            Position::Top => Rect::from_min_size(
                Pos2::new(reference.left(), reference.top() - extent),
                Vec2::new(reference.width(), extent),
            ),
            Position::Bottom => Rect::from_min_size(
                Pos2::new(reference.left(), reference.bottom()),
                Vec2::new(reference.width(), extent),
            ),
            Position::Left => Rect::from_min_size(
                Pos2::new(reference.left() - extent, reference.top()),
                Vec2::new(extent, reference.height()),
            ),
            Position::Right => Rect::from_min_size(
                Pos2::new(reference.right(), reference.top()),
                Vec2::new(extent, reference.height()),
            ),
        }
    }

    pub fn rect(&self, reference: Rect) -> Rect {
        self.rest_rect(reference).translate(self.translation())
    }
}

/// The click-catching layer stacked under the panel.
#[derive(Debug, Clone)]
pub struct OverlayElement {
    placement: Placement,
    visible: bool,
}

impl OverlayElement {
    pub(crate) fn new(placement: Placement) -> Self {
        Self {
            placement,
            visible: false,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn show(&mut self) {
        self.visible = true;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }
}

/// Snapshot of the container a panel is attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerElement {
    pub id: String,
    pub rect: Rect,
    pub positioning: Positioning,
    pub overflow: Overflow,
}
