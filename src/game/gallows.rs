//! Gallows geometry in canvas units. The scaffold is static; one body part is
//! added per incorrect guess.

/// Minimum logical canvas size that fits the figure.
pub const CANVAS_WIDTH: u32 = 250;
pub const CANVAS_HEIGHT: u32 = 260;

pub const STROKE_COLOR: &str = "#333";
pub const STROKE_WIDTH: f64 = 2.0;

/// A single canvas path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Line { from: (f64, f64), to: (f64, f64) },
    Circle { center: (f64, f64), radius: f64 },
}

/// Base, post, beam, rope.
pub const SCAFFOLD: [Stroke; 4] = [
    Stroke::Line { from: (50.0, 250.0), to: (150.0, 250.0) },
    Stroke::Line { from: (100.0, 250.0), to: (100.0, 50.0) },
    Stroke::Line { from: (100.0, 50.0), to: (200.0, 50.0) },
    Stroke::Line { from: (200.0, 50.0), to: (200.0, 80.0) },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// Draw order; the n-th incorrect guess adds `ORDER[n - 1]`.
    pub const ORDER: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    /// Part drawn for the `misses`-th incorrect guess (1-based).
    pub fn for_miss(misses: u8) -> Option<BodyPart> {
        let idx = usize::from(misses).checked_sub(1)?;
        Self::ORDER.get(idx).copied()
    }

    pub fn stroke(self) -> Stroke {
        match self {
            BodyPart::Head => Stroke::Circle { center: (200.0, 100.0), radius: 20.0 },
            BodyPart::Torso => Stroke::Line { from: (200.0, 120.0), to: (200.0, 180.0) },
            BodyPart::LeftArm => Stroke::Line { from: (200.0, 140.0), to: (170.0, 160.0) },
            BodyPart::RightArm => Stroke::Line { from: (200.0, 140.0), to: (230.0, 160.0) },
            BodyPart::LeftLeg => Stroke::Line { from: (200.0, 180.0), to: (170.0, 210.0) },
            BodyPart::RightLeg => Stroke::Line { from: (200.0, 180.0), to: (230.0, 210.0) },
        }
    }
}

/// Incorrect guesses allowed before the game is lost: one per body part.
pub const MAX_INCORRECT: u8 = BodyPart::ORDER.len() as u8;
