use winit::keyboard::{KeyCode, PhysicalKey};

/// Key press identifier used to pick which image a lesson shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyPress {
    #[default]
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl KeyPress {
    /// Number of key press identifiers
    pub const TOTAL: usize = 5;

    pub const ALL: [KeyPress; Self::TOTAL] = [
        KeyPress::Default,
        KeyPress::Up,
        KeyPress::Down,
        KeyPress::Left,
        KeyPress::Right,
    ];

    /// Map a winit physical key; anything that is not an arrow is `Default`
    pub fn from_physical_key(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => Self::from_keycode(code),
            PhysicalKey::Unidentified(_) => KeyPress::Default,
        }
    }

    pub fn from_keycode(code: KeyCode) -> Self {
        match code {
            KeyCode::ArrowUp => KeyPress::Up,
            KeyCode::ArrowDown => KeyPress::Down,
            KeyCode::ArrowLeft => KeyPress::Left,
            KeyCode::ArrowRight => KeyPress::Right,
            _ => KeyPress::Default,
        }
    }

    /// Slot in a `[T; KeyPress::TOTAL]` table
    pub fn index(self) -> usize {
        match self {
            KeyPress::Default => 0,
            KeyPress::Up => 1,
            KeyPress::Down => 2,
            KeyPress::Left => 3,
            KeyPress::Right => 4,
        }
    }
}

/// Tracks which entry of a key press table is selected; the most recent
/// key wins
#[derive(Debug, Clone, Copy, Default)]
pub struct KeySelector {
    current: KeyPress,
}

impl KeySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyPress) {
        self.current = key;
    }

    pub fn current(&self) -> KeyPress {
        self.current
    }

    /// Pick the selected entry out of `table`
    pub fn select<'a, T>(&self, table: &'a [T; KeyPress::TOTAL]) -> &'a T {
        &table[self.current.index()]
    }
}
