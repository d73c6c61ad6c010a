use crate::puzzle::TileIdx;

#[derive(Debug, Clone)]
pub enum Message {
    Event(iced::Event),
    ClickTile(TileIdx),
    NewPuzzle,
    HelpDialogue,
    HideModal,
}
