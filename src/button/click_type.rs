use serde::{Deserialize, Serialize};

/// How the viewer clicked a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickType {
    Left,
    ShiftLeft,
    Right,
    ShiftRight,
    WindowBorderLeft,
    WindowBorderRight,
    Middle,
    /// Hotbar number key, 0-based
    NumberKey(u8),
    DoubleClick,
    Drop,
    ControlDrop,
    Creative,
    SwapOffhand,
    Unknown,
}

impl ClickType {
    pub fn is_left_click(&self) -> bool {
        matches!(
            self,
            ClickType::Left | ClickType::ShiftLeft | ClickType::DoubleClick | ClickType::Creative
        )
    }

    pub fn is_right_click(&self) -> bool {
        matches!(self, ClickType::Right | ClickType::ShiftRight)
    }

    pub fn is_shift_click(&self) -> bool {
        matches!(
            self,
            ClickType::ShiftLeft | ClickType::ShiftRight | ClickType::ControlDrop
        )
    }

    pub fn is_keyboard_click(&self) -> bool {
        matches!(
            self,
            ClickType::NumberKey(_)
                | ClickType::Drop
                | ClickType::ControlDrop
                | ClickType::SwapOffhand
        )
    }

    /// Only possible for viewers in creative mode
    pub fn is_creative_action(&self) -> bool {
        matches!(self, ClickType::Middle | ClickType::Creative)
    }
}
