#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotEmphasis {
    #[default]
    Normal,
    Expanded,
    Compressed,
}

impl SlotEmphasis {
    pub const TRANSITION_SECS: f64 = 0.3;

    pub fn flex_grow(self) -> f64 {
        match self {
            SlotEmphasis::Normal => 1.0,
            SlotEmphasis::Expanded => 1.5,
            SlotEmphasis::Compressed => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
}

/// Spring driving the slot width change.
pub const SLOT_SPRING: Spring = Spring {
    stiffness: 400.0,
    damping: 30.0,
};

/// Pointer hover over the visible slots. Scrolling never touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverController {
    hovered: Option<usize>,
}

impl HoverController {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn enter(&mut self, slot: usize) {
        self.hovered = Some(slot);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn emphasis(&self, slot: usize) -> SlotEmphasis {
        match self.hovered {
            None => SlotEmphasis::Normal,
            Some(h) if h == slot => SlotEmphasis::Expanded,
            Some(_) => SlotEmphasis::Compressed,
        }
    }
}
