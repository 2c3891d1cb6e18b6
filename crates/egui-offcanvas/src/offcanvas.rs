use crate::container::{ContainerState, Overflow, Positioning};
use crate::element::{ContainerElement, OverlayElement, PanelElement, Placement, ACTIVE_CLASS};
use crate::errors::OffCanvasError;
use crate::movement::Movement;
use crate::options::{Hooks, OffCanvasOptions, OptionsOverride};
use crate::toggle::ToggleState;
use crate::transition::{Timing, Track};
use egui::{Align, Area, Context, CursorIcon, Id, Layout, Order, ScrollArea, Sense, Ui, UiBuilder};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

static PANEL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One-shot completion handler passed to `open`/`close`.
pub type Callback = Box<dyn FnOnce(&PanelElement, &ContainerElement)>;

enum Completion {
    Callback(Callback),
    Opened,
    Closed,
}

struct Pending {
    completion: Completion,
    settle_after: f64,
    started_at: Option<f64>,
}

/// Controller of one off-canvas panel attached to a container.
pub struct OffCanvas {
    id: Id,
    ctx: Context,
    options: OffCanvasOptions,
    hooks: Hooks,
    movement: Movement,
    container: Option<ContainerElement>,
    panel: Option<PanelElement>,
    overlay: Option<OverlayElement>,
    toggle_button: Option<String>,
    // the container's content, moved along with the panel in push-and-pull mode
    content: Track,
    pending: Vec<Pending>,
    is_open: bool,
    destroyed: bool,
}

impl OffCanvas {
    pub fn new(
        ctx: &Context,
        container_id: &str,
        overrides: OptionsOverride,
        hooks: Hooks,
    ) -> Result<Self, OffCanvasError> {
        if container_id.trim().is_empty() {
            return Err(OffCanvasError::InvalidArgument(
                "container id is required".to_owned(),
            ));
        }

        let options = OffCanvasOptions::default().merge(overrides);
        let state = ContainerState::load(ctx, container_id);
        let width = state.as_ref().map_or(0.0, |state| state.rect.width());
        let size = options.size.resolve(width);
        let offset = options.offset.resolve(width);

        let mut offcanvas = Self {
            id: Id::new(("egui-offcanvas", PANEL_COUNTER.fetch_add(1, Ordering::SeqCst))),
            ctx: ctx.clone(),
            movement: Movement::new(options.position, size, offset),
            hooks,
            container: None,
            panel: None,
            overlay: None,
            toggle_button: None,
            content: Track::default(),
            pending: vec![],
            is_open: false,
            destroyed: false,
            options,
        };

        let Some(mut state) = state else {
            warn!(container = container_id, "container not found, offcanvas disabled");
            return Ok(offcanvas);
        };

        let padding = offcanvas.options.canvas_padding.resolve(width);
        offcanvas.panel = Some(PanelElement::new(&offcanvas.options, size, padding));

        if state.positioning != Positioning::Absolute {
            state.positioning = Positioning::Relative;
        }
        if !offcanvas.options.fixed_position {
            state.overflow = Overflow::Hidden;
        }
        offcanvas.container = Some(state.element(container_id));
        state.store(ctx, container_id);

        if offcanvas.options.tap_to_close {
            offcanvas.overlay = Some(OverlayElement::new(Placement::from_fixed(
                offcanvas.options.fixed_position,
            )));
        }

        if let Some(toggle) = offcanvas.options.toggle_button_id.clone() {
            // clicks queued before the wiring existed are not ours
            ToggleState::take_clicks(ctx, &toggle);
            offcanvas.toggle_button = Some(toggle);
        }

        offcanvas.trace("created");
        Ok(offcanvas)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_close(&self) -> bool {
        !self.is_open
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn options(&self) -> &OffCanvasOptions {
        &self.options
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn panel(&self) -> Option<&PanelElement> {
        self.panel.as_ref()
    }

    pub fn overlay(&self) -> Option<&OverlayElement> {
        self.overlay.as_ref()
    }

    pub fn container(&self) -> Option<&ContainerElement> {
        self.container.as_ref()
    }

    /// Translation currently applied to the container content.
    pub fn content_translation(&self) -> egui::Vec2 {
        self.content.translation()
    }

    /// Opens the panel. `callback` replaces `on_open` for this transition.
    pub fn open(&mut self, callback: Option<Callback>) {
        self.slide(true, callback);
    }

    /// Closes the panel. `callback` replaces `on_close` for this transition.
    pub fn close(&mut self, callback: Option<Callback>) {
        self.slide(false, callback);
    }

    pub fn toggle(&mut self) {
        if self.is_close() {
            self.open(None);
        } else {
            self.close(None);
        }
    }

    /// Removes the panel, its overlay and the toggle button wiring.
    pub fn destroy(&mut self) {
        if self.panel.take().is_none() {
            return;
        }

        self.overlay = None;
        self.pending.clear();
        if let Some(toggle) = self.toggle_button.take() {
            ToggleState::set_active(&self.ctx, &toggle, false);
        }
        if self.options.push_and_pull {
            self.content = Track::default();
            self.publish_push();
        }
        self.destroyed = true;
        self.trace("destroyed");
    }

    fn slide(&mut self, opening: bool, callback: Option<Callback>) {
        let (Some(panel), Some(container)) = (self.panel.as_mut(), self.container.as_ref()) else {
            return;
        };

        let before = if opening {
            &mut self.hooks.on_before_open
        } else {
            &mut self.hooks.on_before_close
        };
        before(&*panel, container);

        if self.is_open == opening {
            return;
        }

        let timing = Timing::from_millis(
            self.options.duration,
            self.options.delay,
            self.options.easing,
        );
        let target = if opening {
            self.movement.on
        } else {
            self.movement.off
        };

        if self.options.push_and_pull {
            self.content.translate_to(target, timing);
        }

        if let Some(overlay) = self.overlay.as_mut() {
            if opening {
                overlay.show();
            } else {
                overlay.hide();
            }
        }

        if opening {
            panel.add_class(ACTIVE_CLASS);
        } else {
            panel.remove_class(ACTIVE_CLASS);
        }
        if let Some(toggle) = &self.toggle_button {
            ToggleState::set_active(&self.ctx, toggle, opening);
        }
        panel.track.translate_to(target, timing);

        let completion = match callback {
            Some(callback) => Completion::Callback(callback),
            None if opening => Completion::Opened,
            None => Completion::Closed,
        };
        self.pending.push(Pending {
            completion,
            settle_after: timing.total(),
            started_at: None,
        });

        self.is_open = opening;
        self.trace(if opening { "open" } else { "close" });
    }

    /// Advances the panel to `now` (seconds): handles toggle button clicks,
    /// moves running transitions and fires the completions that are due.
    /// Returns whether anything is still in flight.
    pub fn tick(&mut self, now: f64) -> bool {
        if let Some(toggle) = self.toggle_button.clone() {
            for _ in 0..ToggleState::take_clicks(&self.ctx, &toggle) {
                self.toggle();
            }
        }

        if let Some(container) = self.container.as_mut() {
            if let Some(state) = ContainerState::load(&self.ctx, &container.id) {
                *container = state.element(&container.id);
            }
        }

        let mut animating = self.content.advance(now);
        if let Some(panel) = self.panel.as_mut() {
            animating |= panel.track.advance(now);
        }
        if self.options.push_and_pull && self.panel.is_some() {
            self.publish_push();
        }

        let mut due = vec![];
        self.pending.retain_mut(|pending| {
            let started_at = *pending.started_at.get_or_insert(now);
            if now - started_at >= pending.settle_after {
                due.push(std::mem::replace(&mut pending.completion, Completion::Opened));
                false
            } else {
                true
            }
        });
        for completion in due {
            self.complete(completion);
        }

        animating || !self.pending.is_empty()
    }

    fn complete(&mut self, completion: Completion) {
        let (Some(panel), Some(container)) = (self.panel.as_ref(), self.container.as_ref()) else {
            return;
        };

        match completion {
            Completion::Callback(callback) => callback(panel, container),
            Completion::Opened => (self.hooks.on_open)(panel, container),
            Completion::Closed => (self.hooks.on_close)(panel, container),
        }
    }

    fn publish_push(&self) {
        let Some(container) = self.container.as_ref() else {
            return;
        };
        if let Some(mut state) = ContainerState::load(&self.ctx, &container.id) {
            state.push = self.content.translation();
            state.store(&self.ctx, &container.id);
        }
    }

    pub(crate) fn overlay_clicked(&mut self) {
        if self.overlay.as_ref().is_some_and(OverlayElement::is_visible) {
            self.close(None);
        }
    }

    /// Draws the panel with its configured `content` text.
    pub fn show(&mut self, ctx: &Context) {
        let content = self
            .panel
            .as_ref()
            .map(|panel| panel.content().to_owned())
            .unwrap_or_default();
        self.show_with(ctx, |ui| {
            if !content.is_empty() {
                ui.label(content);
            }
        });
    }

    /// Draws the panel, filling it with `add_contents`.
    pub fn show_with(&mut self, ctx: &Context, add_contents: impl FnOnce(&mut Ui)) {
        if self.tick(ctx.input(|i| i.time)) {
            ctx.request_repaint();
        }

        let (Some(panel), Some(container)) = (self.panel.as_ref(), self.container.as_ref()) else {
            return;
        };

        let screen = ctx.screen_rect();
        let clip = panel.placement().reference(container.rect, screen);

        let mut overlay_clicked = false;
        if let Some(overlay) = self.overlay.as_ref().filter(|overlay| overlay.is_visible()) {
            let rect = overlay.placement().reference(container.rect, screen);
            Area::new(self.id.with("overlay"))
                .order(Order::Foreground)
                .fixed_pos(rect.min)
                .constrain(false)
                .show(ctx, |ui| {
                    overlay_clicked = ui
                        .allocate_rect(rect, Sense::click())
                        .on_hover_cursor(CursorIcon::PointingHand)
                        .clicked();
                });
        }

        let rect = panel.rect(panel.placement().reference(container.rect, screen));
        if rect.intersects(clip) {
            let padding = panel.padding();
            let area = Area::new(self.id.with("panel"))
                .order(Order::Foreground)
                .fixed_pos(rect.min)
                .constrain(false)
                .show(ctx, |ui| {
                    ui.set_clip_rect(clip);
                    ui.painter().rect_filled(rect, 0.0, ui.visuals().panel_fill);
                    // keeps clicks on the panel from reaching the overlay
                    ui.allocate_rect(rect, Sense::click());

                    let mut content = ui.new_child(
                        UiBuilder::new()
                            .max_rect(rect.shrink(padding))
                            .layout(Layout::top_down(Align::Min)),
                    );
                    ScrollArea::vertical()
                        .id_salt(self.id.with("scroll"))
                        .auto_shrink(false)
                        .show(&mut content, add_contents);
                });
            ctx.move_to_top(area.response.layer_id);
        }

        if overlay_clicked {
            self.overlay_clicked();
        }
    }

    fn trace(&self, action: &str) {
        let container = self.container.as_ref().map_or("", |c| c.id.as_str());
        if self.options.debug {
            info!(container, action, open = self.is_open, "offcanvas");
        } else {
            debug!(container, action, open = self.is_open, "offcanvas");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::length::Length;
    use crate::options::Position;
    use crate::toggle::ToggleButton;
    use egui::{Event, Modifiers, PointerButton, Pos2, Rect, Vec2};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn context() -> Context {
        let ctx = Context::default();
        Container::register(
            &ctx,
            "main",
            Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0)),
        );
        ctx
    }

    fn counter() -> Rc<Cell<u32>> {
        Rc::new(Cell::new(0))
    }

    fn counting(count: &Rc<Cell<u32>>) -> impl FnMut(&PanelElement, &ContainerElement) + 'static {
        let count = count.clone();
        move |_, _| count.set(count.get() + 1)
    }

    fn assert_exclusive(offcanvas: &OffCanvas) {
        assert_ne!(offcanvas.is_open(), offcanvas.is_close());
    }

    #[test]
    fn test_missing_container_id() {
        let ctx = context();
        let result = OffCanvas::new(&ctx, "  ", OptionsOverride::default(), Hooks::default());
        assert!(matches!(result, Err(OffCanvasError::InvalidArgument(_))));
    }

    #[test]
    fn test_unknown_container_degrades() {
        let ctx = context();
        let before = counter();
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "nowhere",
            OptionsOverride::default(),
            Hooks::default().on_before_open(counting(&before)),
        )
        .unwrap();

        assert!(offcanvas.panel().is_none());
        assert!(offcanvas.overlay().is_none());
        offcanvas.open(None);
        offcanvas.tick(1.0);
        assert_eq!(before.get(), 0);
        assert!(offcanvas.is_close());
    }

    #[test]
    fn test_percentage_resolved_against_width() {
        let ctx = context();
        let offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default()
                .size(Length::Percent(50.0))
                .offset(Length::Percent(10.0))
                .position(Position::Top),
            Hooks::default(),
        )
        .unwrap();

        assert_eq!(offcanvas.panel().unwrap().extent(), 200.0);
        // the vertical slide also uses the container width
        assert_eq!(offcanvas.movement().on, Vec2::new(0.0, 240.0));
        assert_eq!(offcanvas.movement().off, Vec2::ZERO);
    }

    #[test]
    fn test_construction_styles_container() {
        let ctx = context();
        let offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().fixed_position(false),
            Hooks::default(),
        )
        .unwrap();

        let container = Container::load(&ctx, "main").unwrap();
        assert_eq!(container.positioning, Positioning::Relative);
        assert_eq!(container.overflow, Overflow::Hidden);
        assert_eq!(offcanvas.panel().unwrap().placement(), Placement::Absolute);
        assert!(offcanvas.panel().unwrap().has_class("temp-canvas-wrapper"));

        let ctx = Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                Container::new("page").absolute().show(ui, |_| {});
            });
        });
        let offcanvas =
            OffCanvas::new(&ctx, "page", OptionsOverride::default(), Hooks::default()).unwrap();
        let container = offcanvas.container().unwrap();
        assert_eq!(container.positioning, Positioning::Absolute);
        assert_eq!(container.overflow, Overflow::Visible);
    }

    #[test]
    fn test_open_close_cycle() {
        let ctx = context();
        let (before_open, opened, before_close, closed) = (counter(), counter(), counter(), counter());
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().size(250.0),
            Hooks::default()
                .on_before_open(counting(&before_open))
                .on_open(counting(&opened))
                .on_before_close(counting(&before_close))
                .on_close(counting(&closed)),
        )
        .unwrap();
        assert_exclusive(&offcanvas);
        assert!(offcanvas.is_close());

        offcanvas.open(None);
        assert_exclusive(&offcanvas);
        assert!(offcanvas.is_open());
        assert_eq!(before_open.get(), 1);
        assert!(offcanvas.panel().unwrap().has_class(ACTIVE_CLASS));

        // completion waits for the transition
        assert!(offcanvas.tick(0.0));
        assert!(offcanvas.tick(0.1));
        assert_eq!(opened.get(), 0);
        assert!(!offcanvas.tick(0.5));
        assert_eq!(opened.get(), 1);
        assert_eq!(offcanvas.panel().unwrap().translation(), Vec2::new(-250.0, 0.0));

        offcanvas.close(None);
        assert_exclusive(&offcanvas);
        assert!(offcanvas.is_close());
        assert_eq!(before_close.get(), 1);
        assert!(!offcanvas.panel().unwrap().has_class(ACTIVE_CLASS));

        offcanvas.tick(1.0);
        offcanvas.tick(2.0);
        assert_eq!(closed.get(), 1);
        assert_eq!(offcanvas.panel().unwrap().translation(), Vec2::ZERO);
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn test_repeated_open_and_close_are_idempotent() {
        let ctx = context();
        let (before_open, opened, before_close, closed) = (counter(), counter(), counter(), counter());
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().size(100.0),
            Hooks::default()
                .on_before_open(counting(&before_open))
                .on_open(counting(&opened))
                .on_before_close(counting(&before_close))
                .on_close(counting(&closed)),
        )
        .unwrap();

        offcanvas.close(None);
        assert!(offcanvas.is_close());
        assert_eq!(before_close.get(), 1);
        assert!(!offcanvas.tick(0.0));
        assert_eq!(closed.get(), 0);

        offcanvas.open(None);
        offcanvas.tick(1.0);
        offcanvas.tick(2.0);
        offcanvas.open(None);
        offcanvas.open(None);
        assert!(offcanvas.is_open());
        assert!(!offcanvas.panel().unwrap().is_animating());
        assert!(!offcanvas.tick(3.0));
        assert_eq!(before_open.get(), 3);
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn test_callback_replaces_hook() {
        let ctx = context();
        let opened = counter();
        let received = Rc::new(RefCell::new(None));
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().size(100.0).duration(0),
            Hooks::default().on_open(counting(&opened)),
        )
        .unwrap();

        let slot = received.clone();
        offcanvas.open(Some(Box::new(move |panel, container| {
            *slot.borrow_mut() = Some((panel.extent(), container.id.clone()));
        })));
        offcanvas.tick(0.0);

        assert_eq!(opened.get(), 0);
        assert_eq!(*received.borrow(), Some((100.0, "main".to_owned())));
    }

    #[test]
    fn test_close_does_not_cancel_pending_open() {
        let ctx = context();
        let (opened, closed) = (counter(), counter());
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().size(100.0),
            Hooks::default()
                .on_open(counting(&opened))
                .on_close(counting(&closed)),
        )
        .unwrap();

        offcanvas.open(None);
        offcanvas.tick(0.0);
        offcanvas.close(None);
        offcanvas.tick(0.1);
        assert_eq!((opened.get(), closed.get()), (0, 0));

        offcanvas.tick(0.25);
        assert_eq!((opened.get(), closed.get()), (1, 0));
        offcanvas.tick(0.4);
        assert_eq!((opened.get(), closed.get()), (1, 1));
    }

    #[test]
    fn test_tap_to_close_overlay() {
        let ctx = context();
        let mut offcanvas =
            OffCanvas::new(&ctx, "main", OptionsOverride::default(), Hooks::default()).unwrap();

        assert!(!offcanvas.overlay().unwrap().is_visible());
        offcanvas.open(None);
        assert!(offcanvas.overlay().unwrap().is_visible());

        offcanvas.overlay_clicked();
        assert!(offcanvas.is_close());
        assert!(!offcanvas.overlay().unwrap().is_visible());

        let offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().tap_to_close(false),
            Hooks::default(),
        )
        .unwrap();
        assert!(offcanvas.overlay().is_none());
    }

    #[test]
    fn test_toggle_button() {
        let ctx = context();
        ToggleButton::click(&ctx, "menu");
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().toggle_button_id("menu"),
            Hooks::default(),
        )
        .unwrap();

        // the click before wiring is dropped
        offcanvas.tick(0.0);
        assert!(offcanvas.is_close());

        ToggleButton::click(&ctx, "menu");
        offcanvas.tick(0.1);
        assert!(offcanvas.is_open());
        assert!(ToggleState::load(&ctx, "menu").active);
        assert_eq!(ToggleState::load(&ctx, "menu").clicks, 0);

        ToggleButton::click(&ctx, "menu");
        offcanvas.tick(0.2);
        assert!(offcanvas.is_close());
        assert!(!ToggleState::load(&ctx, "menu").active);
    }

    #[test]
    fn test_push_and_pull_moves_content() {
        let ctx = context();
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default()
                .size(120.0)
                .position(Position::Left)
                .push_and_pull(true),
            Hooks::default(),
        )
        .unwrap();

        offcanvas.open(None);
        offcanvas.tick(0.0);
        offcanvas.tick(1.0);
        assert_eq!(offcanvas.content_translation(), Vec2::new(120.0, 0.0));
        assert_eq!(
            ContainerState::load(&ctx, "main").unwrap().push,
            Vec2::new(120.0, 0.0)
        );

        offcanvas.close(None);
        offcanvas.tick(2.0);
        offcanvas.tick(3.0);
        assert_eq!(ContainerState::load(&ctx, "main").unwrap().push, Vec2::ZERO);
    }

    #[test]
    fn test_destroy() {
        let ctx = context();
        let before_open = counter();
        let mut offcanvas = OffCanvas::new(
            &ctx,
            "main",
            OptionsOverride::default().toggle_button_id("menu"),
            Hooks::default().on_before_open(counting(&before_open)),
        )
        .unwrap();

        offcanvas.open(None);
        offcanvas.destroy();
        assert!(offcanvas.is_destroyed());
        assert!(offcanvas.panel().is_none());
        assert!(offcanvas.overlay().is_none());
        assert!(!ToggleState::load(&ctx, "menu").active);

        offcanvas.open(None);
        ToggleButton::click(&ctx, "menu");
        offcanvas.tick(1.0);
        assert_eq!(before_open.get(), 1);
        assert_eq!(ToggleState::load(&ctx, "menu").clicks, 1);
        assert_exclusive(&offcanvas);
    }

    #[test]
    fn test_show_headless() {
        let ctx = Context::default();
        let mut offcanvas: Option<OffCanvas> = None;
        for frame in 0..3 {
            let input = egui::RawInput {
                time: Some(frame as f64),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    Container::new("page").show(ui, |ui| {
                        ui.label("page content");
                    });
                });

                let offcanvas = offcanvas.get_or_insert_with(|| {
                    OffCanvas::new(
                        ctx,
                        "page",
                        OptionsOverride::default()
                            .size(Length::Percent(25.0))
                            .content("menu"),
                        Hooks::default(),
                    )
                    .unwrap()
                });
                if frame == 0 {
                    offcanvas.open(None);
                }
                offcanvas.show(ctx);
            });
        }

        let offcanvas = offcanvas.unwrap();
        assert!(offcanvas.is_open());
        let extent = offcanvas.panel().unwrap().extent();
        assert!(extent > 0.0);
        assert_eq!(offcanvas.panel().unwrap().translation(), Vec2::new(-extent, 0.0));
    }

    fn frame(ctx: &Context, time: f64, events: Vec<Event>, draw: impl FnMut(&Context)) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, draw);
    }

    /// Pointer move, press, release, then an idle frame.
    fn click_at(pos: Pos2) -> Vec<Vec<Event>> {
        let button = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        };
        vec![
            vec![Event::PointerMoved(pos)],
            vec![button(true)],
            vec![button(false)],
            vec![],
        ]
    }

    fn page(ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Container::new("page").show(ui, |ui| {
                ui.label("page content");
            });
        });
    }

    #[test]
    fn test_pointer_on_overlay_closes_and_on_panel_does_not() {
        let ctx = Context::default();
        frame(&ctx, 0.0, vec![], page);

        let mut offcanvas = OffCanvas::new(
            &ctx,
            "page",
            OptionsOverride::default()
                .size(200.0)
                .position(Position::Left)
                .duration(0),
            Hooks::default(),
        )
        .unwrap();
        offcanvas.open(None);

        let mut time = 0.0;
        let mut draw = |ctx: &Context, events: Vec<Event>, offcanvas: &mut OffCanvas| {
            time += 0.1;
            frame(ctx, time, events, |ctx| {
                page(ctx);
                offcanvas.show(ctx);
            });
        };
        for _ in 0..3 {
            draw(&ctx, vec![], &mut offcanvas);
        }
        assert!(offcanvas.overlay().unwrap().is_visible());

        for events in click_at(Pos2::new(100.0, 300.0)) {
            draw(&ctx, events, &mut offcanvas);
        }
        assert!(offcanvas.is_open());

        for events in click_at(Pos2::new(600.0, 300.0)) {
            draw(&ctx, events, &mut offcanvas);
        }
        assert!(offcanvas.is_close());
        assert!(!offcanvas.overlay().unwrap().is_visible());
    }

    #[test]
    fn test_pointer_on_toggle_button_opens_then_closes() {
        let ctx = Context::default();
        frame(&ctx, 0.0, vec![], page);

        let mut offcanvas = OffCanvas::new(
            &ctx,
            "page",
            OptionsOverride::default()
                .size(200.0)
                .position(Position::Right)
                .tap_to_close(false)
                .toggle_button_id("menu")
                .duration(0),
            Hooks::default(),
        )
        .unwrap();

        let button_rect = Cell::new(Rect::NOTHING);
        let mut time = 0.0;
        let mut draw = |ctx: &Context, events: Vec<Event>, offcanvas: &mut OffCanvas| {
            time += 0.1;
            frame(ctx, time, events, |ctx| {
                egui::TopBottomPanel::top("bar").show(ctx, |ui| {
                    button_rect.set(ui.add(ToggleButton::new("menu", "Menu")).rect);
                });
                page(ctx);
                offcanvas.show(ctx);
            });
        };
        for _ in 0..3 {
            draw(&ctx, vec![], &mut offcanvas);
        }
        assert!(offcanvas.is_close());

        for events in click_at(button_rect.get().center()) {
            draw(&ctx, events, &mut offcanvas);
        }
        assert!(offcanvas.is_open());
        assert!(ToggleState::load(&ctx, "menu").active);

        for events in click_at(button_rect.get().center()) {
            draw(&ctx, events, &mut offcanvas);
        }
        assert!(offcanvas.is_close());
        assert!(!ToggleState::load(&ctx, "menu").active);
        assert_eq!(ToggleState::load(&ctx, "menu").clicks, 0);
    }
}
