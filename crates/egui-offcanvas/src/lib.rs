mod container;
mod easing;
mod element;
mod errors;
mod length;
mod movement;
mod offcanvas;
mod options;
mod toggle;
mod transition;

pub use container::{Container, Overflow, Positioning};
pub use easing::Easing;
pub use element::{ContainerElement, OverlayElement, PanelElement, Placement, ACTIVE_CLASS};
pub use errors::OffCanvasError;
pub use length::Length;
pub use movement::Movement;
pub use offcanvas::{Callback, OffCanvas};
pub use options::{Hook, Hooks, OffCanvasOptions, OptionsOverride, Position};
pub use toggle::{ToggleButton, ToggleState};
pub use transition::{Timing, Track};
