/// Coordinate frame selected by letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Lowercase: offset from the current point.
    Relative,
    /// Uppercase: the document's fixed frame.
    Absolute,
}

impl Frame {
    fn of(letter: u8) -> Self {
        if letter.is_ascii_uppercase() { Self::Absolute } else { Self::Relative }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Move,
    Line,
    HLine,
    VLine,
    Arc,
}

/// Command type letter with its case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandType {
    pub kind: CommandKind,
    pub frame: Frame,
}

impl CommandType {
    pub fn letter(&self) -> char {
        let c = match self.kind {
            CommandKind::Move  => 'm',
            CommandKind::Line  => 'l',
            CommandKind::HLine => 'h',
            CommandKind::VLine => 'v',
            CommandKind::Arc   => 'a',
        };
        match self.frame {
            Frame::Relative => c,
            Frame::Absolute => c.to_ascii_uppercase(),
        }
    }
}

/// Maps a command letter to its type, or `None` for anything else.
pub fn command_type(letter: u8) -> Option<CommandType> {
    let kind = match letter.to_ascii_lowercase() {
        b'm' => CommandKind::Move,
        b'l' => CommandKind::Line,
        b'h' => CommandKind::HLine,
        b'v' => CommandKind::VLine,
        b'a' => CommandKind::Arc,
        _    => return None,
    };
    Some(CommandType { kind, frame: Frame::of(letter) })
}

// ─────────────────────────────────────────────────────────────────────────────

/// Field a parameter letter writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    X,
    Y,
    Angle,
    Length,
    // Reserved for relative-angle support; accepted and carried, never consumed.
    Radius,
    I,
    J,
}

/// Maps a parameter letter to its key and frame, or `None` for anything else.
pub fn param_key(letter: u8) -> Option<(ParamKey, Frame)> {
    let key = match letter.to_ascii_lowercase() {
        b'x' => ParamKey::X,
        b'y' => ParamKey::Y,
        b'a' => ParamKey::Angle,
        b'l' => ParamKey::Length,
        b'r' => ParamKey::Radius,
        b'i' => ParamKey::I,
        b'j' => ParamKey::J,
        _    => return None,
    };
    Some((key, Frame::of(letter)))
}

// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Leading command type letter.
    Type(CommandType),
    /// Parameter letter and its number; `None` when the number was omitted.
    Param { key: ParamKey, frame: Frame, value: Option<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset inside the command text.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
