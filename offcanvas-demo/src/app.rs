use crate::consts::{CONFIG_ENV, CONTAINER_ID, LOG_CAPACITY, MENU_TOGGLE_ID};
use crate::errors::DemoError;
use eframe::{egui, NativeOptions};
use egui_offcanvas::{
    Container, ContainerElement, Hooks, Length, OffCanvas, OptionsOverride, PanelElement,
    Position, ToggleButton,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{error, info};

type EventLog = Rc<RefCell<VecDeque<String>>>;

pub struct OffCanvasDemo {
    overrides: OptionsOverride,
    menu: Option<OffCanvas>,
    sheet: Option<OffCanvas>,
    events: EventLog,
}

impl OffCanvasDemo {
    fn new(overrides: OptionsOverride) -> Self {
        Self {
            overrides,
            menu: None,
            sheet: None,
            events: Rc::new(RefCell::new(VecDeque::with_capacity(LOG_CAPACITY))),
        }
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        let overrides = load_overrides().unwrap_or_else(|err| {
            error!("failed to load {CONFIG_ENV}: {err}");
            OptionsOverride::default()
        });

        eframe::run_native(
            "OffCanvas",
            options,
            Box::new(|_cc| Ok(Box::new(OffCanvasDemo::new(overrides)))),
        )
    }
}

fn load_overrides() -> Result<OptionsOverride, DemoError> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(OptionsOverride::default());
    };
    if path.is_empty() {
        return Err(DemoError::Plain(format!("{CONFIG_ENV} is empty")));
    }

    info!("loading panel options from {path}");
    let json = std::fs::read_to_string(path)?;
    Ok(OptionsOverride::from_json(&json)?)
}

fn logging_hooks(events: &EventLog, panel_name: &'static str) -> Hooks {
    let hook = |event: &'static str| {
        let events = events.clone();
        move |panel: &PanelElement, container: &ContainerElement| {
            let mut events = events.borrow_mut();
            if events.len() == LOG_CAPACITY {
                events.pop_front();
            }
            events.push_back(format!(
                "{panel_name}: {event} ({} on #{})",
                panel.classes().join(" "),
                container.id
            ));
        }
    };

    Hooks::default()
        .on_before_open(hook("before open"))
        .on_open(hook("open"))
        .on_before_close(hook("before close"))
        .on_close(hook("close"))
}

impl eframe::App for OffCanvasDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("demo_top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(ToggleButton::new(MENU_TOGGLE_ID, "Menu"));
                ui.separator();

                if ui.button("Open sheet").clicked() {
                    if let Some(sheet) = self.sheet.as_mut() {
                        sheet.open(None);
                    }
                }
                if ui.button("Close sheet").clicked() {
                    if let Some(sheet) = self.sheet.as_mut() {
                        sheet.close(None);
                    }
                }
                if ui.button("Destroy menu").clicked() {
                    if let Some(menu) = self.menu.as_mut() {
                        menu.destroy();
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("demo_bottom_panel").show(ctx, |ui| {
            for event in self.events.borrow().iter() {
                ui.monospace(event);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Container::new(CONTAINER_ID).show(ui, |ui| {
                ui.heading("Off-canvas panels");
                ui.label("Use the menu button to slide the menu in; click outside it to close.");
                ui.label("The sheet slides up from the bottom of this area.");
            });
        });

        // containers are known once they have been laid out
        if self.menu.is_none() {
            self.menu = self.build_menu(ctx);
        }
        if self.sheet.is_none() {
            self.sheet = self.build_sheet(ctx);
        }

        if let Some(menu) = self.menu.as_mut() {
            menu.show(ctx);
        }
        if let Some(sheet) = self.sheet.as_mut() {
            sheet.show_with(ctx, |ui| {
                ui.heading("Sheet");
                ui.label("Not fixed: clipped to the page and pushed along the vertical axis.");
            });
        }
    }
}

impl OffCanvasDemo {
    fn build_menu(&self, ctx: &egui::Context) -> Option<OffCanvas> {
        let overrides = OptionsOverride {
            content: Some(String::from("Sessions\nSettings\nAbout")),
            size: Some(Length::Px(240.0)),
            position: Some(Position::Left),
            push_and_pull: Some(true),
            toggle_button_id: Some(MENU_TOGGLE_ID.to_owned()),
            ..self.overrides.clone()
        };
        build(ctx, overrides, logging_hooks(&self.events, "menu"))
    }

    fn build_sheet(&self, ctx: &egui::Context) -> Option<OffCanvas> {
        let overrides = OptionsOverride::default()
            .size(Length::Percent(30.0))
            .position(Position::Bottom)
            .fixed_position(false)
            .tap_to_close(false)
            .canvas_class("temp-canvas-wrapper sheet")
            .duration(320)
            .easing(egui_offcanvas::Easing::EaseOut);
        build(ctx, overrides, logging_hooks(&self.events, "sheet"))
    }
}

fn build(ctx: &egui::Context, overrides: OptionsOverride, hooks: Hooks) -> Option<OffCanvas> {
    match OffCanvas::new(ctx, CONTAINER_ID, overrides, hooks) {
        Ok(offcanvas) => Some(offcanvas),
        Err(err) => {
            error!("failed to create offcanvas: {err}");
            None
        }
    }
}
