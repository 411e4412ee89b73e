use crate::palette::Rgb;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Clipboard(ClipboardEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
    /// Poll timed out with no input; redraw so toasts can expire.
    Tick,
}

#[derive(Debug, Clone)]
pub enum ClipboardEvent {
    Copied { color: Rgb },
    Failed { color: Rgb, error: String },
}
