//! Input adapter
//!
//! Raw key/pointer/touch events arrive asynchronously; they are reduced to a
//! single-slot flag that the frame driver takes at the start of each tick.

/// A raw input event as delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Key press, `key` as reported by `KeyboardEvent.key`
    Key { key: String, repeat: bool },
    /// Mouse button down on the playfield
    PointerDown,
    /// Finger down on the playfield
    TouchStart,
}

impl RawInput {
    pub fn key(key: impl Into<String>) -> Self {
        RawInput::Key {
            key: key.into(),
            repeat: false,
        }
    }

    /// Whether this event means "activate". Held-key auto-repeat does not.
    pub fn is_activate(&self) -> bool {
        match self {
            RawInput::Key { key, repeat } => {
                !*repeat && matches!(key.as_str(), " " | "Enter" | "ArrowUp" | "w" | "W")
            }
            RawInput::PointerDown | RawInput::TouchStart => true,
        }
    }
}

/// Single-slot activate buffer
///
/// Any number of presses between two ticks collapse into one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivateLatch {
    pending: bool,
}

impl ActivateLatch {
    pub fn press(&mut self) {
        self.pending = true;
    }

    /// Feed a raw event; returns true if it was an activate
    pub fn feed(&mut self, input: &RawInput) -> bool {
        let activate = input.is_activate();
        if activate {
            self.press();
        }
        activate
    }

    /// Consume the pending activate, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
