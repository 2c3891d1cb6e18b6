use crate::easing::Easing;
use crate::element::{ContainerElement, PanelElement};
use crate::errors::OffCanvasError;
use crate::length::Length;
use serde::Deserialize;
use std::fmt;

/// Edge of the container the panel is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OffCanvasOptions {
    /// Log state changes at `info` instead of `debug`.
    pub debug: bool,
    pub content: String,
    pub size: Length,
    pub position: Position,
    pub canvas_class: String,
    pub canvas_padding: Length,
    /// Extra gap added to the slide distance.
    pub offset: Length,
    /// Milliseconds.
    pub duration: u64,
    pub easing: Easing,
    /// Milliseconds.
    pub delay: u64,
    #[serde(alias = "toggleButton")]
    pub toggle_button_id: Option<String>,
    pub fixed_position: bool,
    pub push_and_pull: bool,
    pub tap_to_close: bool,
}

impl Default for OffCanvasOptions {
    fn default() -> Self {
        Self {
            debug: false,
            content: String::new(),
            size: Length::Px(0.0),
            position: Position::Right,
            canvas_class: String::from("temp-canvas-wrapper"),
            canvas_padding: Length::Px(15.0),
            offset: Length::Px(0.0),
            duration: 220,
            easing: Easing::Ease,
            delay: 0,
            toggle_button_id: None,
            fixed_position: true,
            push_and_pull: false,
            tap_to_close: true,
        }
    }
}

impl OffCanvasOptions {
    /// Shallow merge: every field set in `overrides` replaces the current one.
    pub fn merge(mut self, overrides: OptionsOverride) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = overrides.$field {
                    self.$field = value;
                })*
            };
        }

        take!(
            debug,
            content,
            size,
            position,
            canvas_class,
            canvas_padding,
            offset,
            duration,
            easing,
            delay,
            fixed_position,
            push_and_pull,
            tap_to_close,
        );
        if overrides.toggle_button_id.is_some() {
            self.toggle_button_id = overrides.toggle_button_id;
        }
        self
    }

    /// Defaults merged with the overrides found in a JSON document.
    pub fn from_json(json: &str) -> Result<Self, OffCanvasError> {
        Ok(Self::default().merge(OptionsOverride::from_json(json)?))
    }
}

/// Caller-supplied options; unset fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptionsOverride {
    pub debug: Option<bool>,
    pub content: Option<String>,
    pub size: Option<Length>,
    pub position: Option<Position>,
    pub canvas_class: Option<String>,
    pub canvas_padding: Option<Length>,
    pub offset: Option<Length>,
    pub duration: Option<u64>,
    pub easing: Option<Easing>,
    pub delay: Option<u64>,
    #[serde(alias = "toggleButton")]
    pub toggle_button_id: Option<String>,
    pub fixed_position: Option<bool>,
    pub push_and_pull: Option<bool>,
    pub tap_to_close: Option<bool>,
}

impl OptionsOverride {
    pub fn from_json(json: &str) -> Result<Self, OffCanvasError> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[inline]
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[inline]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    pub fn canvas_class(mut self, class: impl Into<String>) -> Self {
        self.canvas_class = Some(class.into());
        self
    }

    #[inline]
    pub fn canvas_padding(mut self, padding: impl Into<Length>) -> Self {
        self.canvas_padding = Some(padding.into());
        self
    }

    #[inline]
    pub fn offset(mut self, offset: impl Into<Length>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    #[inline]
    pub fn duration(mut self, millis: u64) -> Self {
        self.duration = Some(millis);
        self
    }

    #[inline]
    pub fn delay(mut self, millis: u64) -> Self {
        self.delay = Some(millis);
        self
    }

    #[inline]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    #[inline]
    pub fn toggle_button_id(mut self, id: impl Into<String>) -> Self {
        self.toggle_button_id = Some(id.into());
        self
    }

    #[inline]
    pub fn fixed_position(mut self, fixed: bool) -> Self {
        self.fixed_position = Some(fixed);
        self
    }

    #[inline]
    pub fn push_and_pull(mut self, enabled: bool) -> Self {
        self.push_and_pull = Some(enabled);
        self
    }

    #[inline]
    pub fn tap_to_close(mut self, enabled: bool) -> Self {
        self.tap_to_close = Some(enabled);
        self
    }

    #[inline]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }
}

pub type Hook = Box<dyn FnMut(&PanelElement, &ContainerElement)>;

/// Lifecycle callbacks, each a no-op unless replaced.
pub struct Hooks {
    pub on_before_open: Hook,
    pub on_open: Hook,
    pub on_before_close: Hook,
    pub on_close: Hook,
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            on_before_open: Box::new(|_, _| {}),
            on_open: Box::new(|_, _| {}),
            on_before_close: Box::new(|_, _| {}),
            on_close: Box::new(|_, _| {}),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

impl Hooks {
    #[inline]
    pub fn on_before_open(
        mut self,
        hook: impl FnMut(&PanelElement, &ContainerElement) + 'static,
    ) -> Self {
        self.on_before_open = Box::new(hook);
        self
    }

    #[inline]
    pub fn on_open(mut self, hook: impl FnMut(&PanelElement, &ContainerElement) + 'static) -> Self {
        self.on_open = Box::new(hook);
        self
    }

    #[inline]
    pub fn on_before_close(
        mut self,
        hook: impl FnMut(&PanelElement, &ContainerElement) + 'static,
    ) -> Self {
        self.on_before_close = Box::new(hook);
        self
    }

    #[inline]
    pub fn on_close(mut self, hook: impl FnMut(&PanelElement, &ContainerElement) + 'static) -> Self {
        self.on_close = Box::new(hook);
        self
    }
}
