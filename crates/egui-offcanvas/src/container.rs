use crate::element::ContainerElement;
use egui::{Context, Id, InnerResponse, Rect, Sense, Ui, UiBuilder, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone)]
pub(crate) struct ContainerState {
    pub rect: Rect,
    pub positioning: Positioning,
    pub overflow: Overflow,
    /// Translation of the container content, driven by push-and-pull panels.
    pub push: Vec2,
}

impl Default for ContainerState {
    fn default() -> Self {
        Self {
            rect: Rect::NOTHING,
            positioning: Positioning::Static,
            overflow: Overflow::Visible,
            push: Vec2::ZERO,
        }
    }
}

impl ContainerState {
    fn id(name: &str) -> Id {
        Id::new(("egui-offcanvas-container", name))
    }

    pub fn load(ctx: &Context, name: &str) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp::<Self>(Self::id(name)))
    }

    pub fn store(self, ctx: &Context, name: &str) {
        ctx.data_mut(|d| d.insert_temp(Self::id(name), self));
    }

    pub fn element(&self, name: &str) -> ContainerElement {
        ContainerElement {
            id: name.to_owned(),
            rect: self.rect,
            positioning: self.positioning,
            overflow: self.overflow,
        }
    }
}

/// Hosts the content an off-canvas panel slides over. Panels find their
/// container by its name.
pub struct Container {
    name: String,
    positioning: Positioning,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            positioning: Positioning::Static,
        }
    }

    #[inline]
    pub fn absolute(mut self) -> Self {
        self.positioning = Positioning::Absolute;
        self
    }

    /// Records a container laid out by the caller without drawing anything.
    pub fn register(ctx: &Context, name: &str, rect: Rect) -> ContainerElement {
        Self::record(ctx, name, rect, Positioning::Static).element(name)
    }

    pub fn load(ctx: &Context, name: &str) -> Option<ContainerElement> {
        ContainerState::load(ctx, name).map(|state| state.element(name))
    }

    fn record(ctx: &Context, name: &str, rect: Rect, positioning: Positioning) -> ContainerState {
        let state = match ContainerState::load(ctx, name) {
            Some(state) => ContainerState { rect, ..state },
            None => ContainerState {
                rect,
                positioning,
                ..Default::default()
            },
        };
        state.clone().store(ctx, name);
        state
    }

    /// Draws `add_contents` as the first child of the container, shifted by
    /// any push-and-pull panel.
    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
        let rect = ui.available_rect_before_wrap();
        let state = Self::record(ui.ctx(), &self.name, rect, self.positioning);

        let mut content = ui.new_child(
            UiBuilder::new()
                .max_rect(rect.translate(state.push))
                .layout(*ui.layout()),
        );
        if state.overflow == Overflow::Hidden {
            content.set_clip_rect(rect.intersect(ui.clip_rect()));
        }
        let inner = add_contents(&mut content);

        let response = ui.allocate_rect(rect, Sense::hover());
        InnerResponse::new(inner, response)
    }
}
