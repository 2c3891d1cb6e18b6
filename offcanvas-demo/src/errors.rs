use egui_offcanvas::OffCanvasError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("{0}")]
    Plain(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    OffCanvas(#[from] OffCanvasError),
}
