//! Combat-related domain events

/// Outcome of a single strike
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeOutcome {
    /// Damage actually applied to the defender
    pub damage: i32,
    /// The roll hit the top of its range and was doubled
    pub critical: bool,
    /// Armor or magic resistance subtracted from the roll
    pub mitigation: i32,
    /// Mitigation swallowed the roll and the 1-2 chip damage was used
    pub chip: bool,
    /// Defender health is still above zero
    pub defender_standing: bool,
}
