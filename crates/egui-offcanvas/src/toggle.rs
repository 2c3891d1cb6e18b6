use egui::{Button, Context, Id, Response, Ui, Widget};

/// Shared between a `ToggleButton` and the panel wired to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    /// Clicks not yet handled by the panel.
    pub clicks: u32,
    /// Set while the wired panel is open.
    pub active: bool,
}

impl ToggleState {
    fn id(name: &str) -> Id {
        Id::new(("egui-offcanvas-toggle", name))
    }

    pub fn load(ctx: &Context, name: &str) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(Self::id(name)).unwrap_or_default())
    }

    pub fn store(self, ctx: &Context, name: &str) {
        ctx.data_mut(|d| d.insert_temp(Self::id(name), self));
    }

    pub(crate) fn take_clicks(ctx: &Context, name: &str) -> u32 {
        let mut state = Self::load(ctx, name);
        let clicks = std::mem::take(&mut state.clicks);
        state.store(ctx, name);
        clicks
    }

    pub(crate) fn set_active(ctx: &Context, name: &str, active: bool) {
        let mut state = Self::load(ctx, name);
        state.active = active;
        state.store(ctx, name);
    }
}

/// A button whose clicks open and close the panel configured with the same id.
pub struct ToggleButton {
    name: String,
    text: String,
}

impl ToggleButton {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Queues a click as if the button had been pressed.
    pub fn click(ctx: &Context, name: &str) {
        let mut state = ToggleState::load(ctx, name);
        state.clicks = state.clicks.saturating_add(1);
        state.store(ctx, name);
    }
}

impl Widget for ToggleButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let state = ToggleState::load(ui.ctx(), &self.name);
        let response = ui.add(Button::new(self.text).selected(state.active));
        if response.clicked() {
            Self::click(ui.ctx(), &self.name);
        }
        response
    }
}
