//! Immediate-mode display list.

use dc_core::Position;

/// 8-bit RGB colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BACKGROUND: Color = Color(0xf5, 0xf1, 0xe6);
    pub const BUILDING:   Color = Color(0xd9, 0xd4, 0xc7);
    pub const POOL:       Color = Color(0x7e, 0xc8, 0xe3);
    pub const BEACH:      Color = Color(0xf2, 0xd7, 0x8c);
    pub const ROUTE:      Color = Color(0x3b, 0x82, 0xf6);
    pub const COURIER:    Color = Color(0x1d, 0x4e, 0xd8);
    pub const START:      Color = Color(0x16, 0xa3, 0x4a);
    pub const LANDMARK:   Color = Color(0x6b, 0x72, 0x80);
    pub const TARGET:     Color = Color(0xdc, 0x26, 0x26);
    pub const TEXT:       Color = Color(0x1f, 0x29, 0x37);
    pub const TRACK:      Color = Color(0xe5, 0xe7, 0xeb);

    /// `#rrggbb`.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrokeStyle {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkerKind {
    Start,
    Landmark,
    Destination,
    Courier,
}

impl MarkerKind {
    pub fn color(self) -> Color {
        match self {
            MarkerKind::Start       => Color::START,
            MarkerKind::Landmark    => Color::LANDMARK,
            MarkerKind::Destination => Color::TARGET,
            MarkerKind::Courier     => Color::COURIER,
        }
    }
}

/// One drawing instruction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCmd {
    /// Fill the whole frame.
    Clear { color: Color },
    /// Axis-aligned filled rectangle, optionally labelled at its centre.
    Rect {
        origin: Position,
        width:  f32,
        height: f32,
        fill:   Color,
        label:  Option<String>,
    },
    Polyline {
        points: Vec<Position>,
        color:  Color,
        width:  f32,
        style:  StrokeStyle,
    },
    Marker {
        kind:   MarkerKind,
        center: Position,
        radius: f32,
        label:  Option<String>,
    },
    /// Unfilled circle, used for the courier's pulse.
    Ring {
        center:  Position,
        radius:  f32,
        color:   Color,
        opacity: f32,
    },
    Text {
        at:    Position,
        text:  String,
        color: Color,
        size:  f32,
    },
}

/// A complete frame: canvas size plus an ordered command list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub width:    f32,
    pub height:   f32,
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        Self {
            width,
            height,
            commands: vec![DrawCmd::Clear { color: background }],
        }
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    /// All markers of `kind`.
    pub fn markers(&self, kind: MarkerKind) -> impl Iterator<Item = &DrawCmd> + '_ {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCmd::Marker { kind: k, .. } if *k == kind))
    }

    /// Every coordinate referenced by the frame.
    pub fn positions(&self) -> Vec<Position> {
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCmd::Clear { .. } => {}
                DrawCmd::Rect { origin, .. } => out.push(*origin),
                DrawCmd::Polyline { points, .. } => out.extend_from_slice(points),
                DrawCmd::Marker { center, .. } | DrawCmd::Ring { center, .. } => out.push(*center),
                DrawCmd::Text { at, .. } => out.push(*at),
            }
        }
        out
    }
}
