#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the event types the selection controller reacts to.
//! All events derive `Clone`, `PartialEq`, and `Eq` for use in tests and
//! pattern matching.
//!
//! # Design Notes
//!
//! - Clicks are already resolved to a row index by the host; hit testing is
//!   not this crate's concern.
//! - `KeyEventKind` defaults to `Press` when the host cannot tell.
//! - `Modifiers` use bitflags for easy combination. Cmd/Meta maps to `SUPER`.
//! - Node insertions stand in for DOM mutation records; only the kind of each
//!   inserted node is carried.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer click on a row of the table body.
    Click(ClickEvent),

    /// Nodes were inserted into the observed subtree.
    Mutation(MutationEvent),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event from a legacy numeric key code (`event.which`).
    #[must_use]
    pub const fn from_legacy(which: u32) -> Self {
        Self::new(KeyCode::from_legacy(which))
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key. Space is `Char(' ')`.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Tab key.
    Tab,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// A legacy key code with no symbolic mapping.
    Unidentified(u32),
}

impl KeyCode {
    /// Map a legacy numeric key code (`event.which`) to a symbolic key.
    #[must_use]
    pub const fn from_legacy(which: u32) -> Self {
        match which {
            9 => Self::Tab,
            13 => Self::Enter,
            27 => Self::Escape,
            32 => Self::Char(' '),
            33 => Self::PageUp,
            34 => Self::PageDown,
            35 => Self::End,
            36 => Self::Home,
            37 => Self::Left,
            38 => Self::Up,
            39 => Self::Right,
            40 => Self::Down,
            other => Self::Unidentified(other),
        }
    }

    /// Whether this is the space bar.
    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self, Self::Char(' '))
    }
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS. Either one counts.
    #[must_use]
    pub const fn has_primary(&self) -> bool {
        self.intersects(Self::CTRL.union(Self::SUPER))
    }
}

/// A click on a row, already resolved to the row's index in the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Index of the clicked row in document order.
    pub row: usize,

    /// The button that was clicked.
    pub button: MouseButton,

    /// Modifier keys held during the click.
    pub modifiers: Modifiers,
}

impl ClickEvent {
    /// Create a left click on `row` without modifiers.
    #[must_use]
    pub const fn new(row: usize) -> Self {
        Self {
            row,
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a click with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a click with a specific button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,

    /// Right mouse button.
    Right,

    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Kind of a node inserted into the observed subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A qualifying selectable table.
    Table,
    /// A single row (e.g. appended by pagination).
    Row,
    /// Anything else.
    Other,
}

/// A batch of inserted nodes, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationEvent {
    /// Kinds of the nodes that were added.
    pub added: Vec<NodeKind>,
}

impl MutationEvent {
    /// Create an empty mutation batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inserted node (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: NodeKind) -> Self {
        self.added.push(kind);
        self
    }

    /// Convenience for the common "a table was inserted" batch.
    #[must_use]
    pub fn table_inserted() -> Self {
        Self::new().with(NodeKind::Table)
    }
}
