use crate::{KeySymbol, MouseButton};

use serde::{Deserialize, Serialize};

/// One recorded input occurrence and its offset from capture start.
///
/// Serialized as a flat JSON object: the `type` discriminator and the
/// variant fields from [`EventKind`], followed by the float `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// What happened.
    #[serde(flatten)]
    pub kind: EventKind,
    /// Seconds elapsed since capture start.
    pub t: f64,
}

impl Event {
    /// Create an event at `t` seconds after capture start.
    pub fn new(kind: EventKind, t: f64) -> Self {
        Self { kind, t }
    }
}

/// Tagged input variants. Tag and field names are the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Pointer moved to an absolute screen position.
    Move {
        /// Horizontal position in pixels.
        x: i32,
        /// Vertical position in pixels.
        y: i32,
    },
    /// Mouse button transition.
    Click {
        /// Pointer position at the transition.
        x: i32,
        /// Pointer position at the transition.
        y: i32,
        /// Button that changed.
        button: MouseButton,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// Wheel scroll.
    Scroll {
        /// Pointer position while scrolling.
        x: i32,
        /// Pointer position while scrolling.
        y: i32,
        /// Horizontal steps, positive to the right.
        dx: i32,
        /// Vertical steps, positive upwards.
        dy: i32,
    },
    /// Key went down.
    KeyPress {
        /// Key that was pressed.
        key: KeySymbol,
    },
    /// Key went up.
    KeyRelease {
        /// Key that was released.
        key: KeySymbol,
    },
}

impl EventKind {
    /// Discriminator used in the persisted format.
    pub fn tag(&self) -> &'static str {
        match self {
            EventKind::Move { .. } => "move",
            EventKind::Click { .. } => "click",
            EventKind::Scroll { .. } => "scroll",
            EventKind::KeyPress { .. } => "key_press",
            EventKind::KeyRelease { .. } => "key_release",
        }
    }
}
