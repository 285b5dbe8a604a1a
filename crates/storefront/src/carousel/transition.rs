/// Direction the window travelled on its last recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Cubic-bezier control points for an ease-in-out tween.
pub const EASE_IN_OUT: [f64; 4] = [0.42, 0.0, 0.58, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration_secs: f64,
    pub ease: [f64; 4],
}

/// Horizontal offset in percent of the card width, plus opacity and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub x_percent: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl CardPose {
    pub const CENTER: CardPose = CardPose {
        x_percent: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    fn offstage(x_percent: f64) -> Self {
        Self {
            x_percent,
            opacity: 0.0,
            scale: 0.8,
        }
    }
}

/// Card content slide for one window change. The incoming card enters from
/// the side of travel; the outgoing card leaves from the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub direction: Direction,
}

impl SlideTransition {
    pub const OFFSET: Tween = Tween {
        duration_secs: 0.5,
        ease: EASE_IN_OUT,
    };
    pub const SCALE: Tween = Tween {
        duration_secs: 0.5,
        ease: EASE_IN_OUT,
    };
    pub const OPACITY_SECS: f64 = 0.25;

    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn enter(&self) -> CardPose {
        CardPose::offstage(100.0 * f64::from(self.direction.sign()))
    }

    pub fn center(&self) -> CardPose {
        CardPose::CENTER
    }

    pub fn exit(&self) -> CardPose {
        CardPose::offstage(-100.0 * f64::from(self.direction.sign()))
    }
}
