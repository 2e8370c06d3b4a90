use crate::color::Hex;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum NetworkEvent {
    AiPalette { prompt: String, colors: Vec<Hex> },
    AiFailed { reply: String, detail: String },
}
