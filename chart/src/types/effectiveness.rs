//! Per-category effectiveness classification

/// How an attacking type fares against a single defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effectiveness {
    /// 2x damage
    SuperEffective,
    /// 0.5x damage
    NotVeryEffective,
    /// 0x damage
    NoEffect,
    /// 1x damage (any defender the rule does not classify)
    #[default]
    Neutral,
}

impl Effectiveness {
    /// Damage multiplier for this classification
    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::SuperEffective => 2.0,
            Effectiveness::NotVeryEffective => 0.5,
            Effectiveness::NoEffect => 0.0,
            Effectiveness::Neutral => 1.0,
        }
    }
}
