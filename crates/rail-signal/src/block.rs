//! Block definition and per-block occupancy record.

/// One signaling block along the track.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Position of the block signal, metres from the segment start.  Also
    /// used as an index into the run's per-metre time profile.
    pub position: i64,
    /// Speed threshold (m/s) whose first occurrence in the profile books
    /// the block.
    pub release_speed: f64,
    /// Extra safety distance (m) beyond the block boundary that must clear
    /// before release.
    pub overlap: f64,
    /// Interlocking release delay, seconds.
    pub release_time_s: f64,
    /// Interlocking setting lead, seconds, subtracted from the booking
    /// moment.
    pub setting_time_s: f64,
}

/// Computed occupancy timestamps for one block.
///
/// Every field is `None` when the underlying lookup fell outside the motion
/// profile — "undefined", distinct from any real timestamp.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockOccupancy {
    /// `|speed − release_speed|` at the matched profile index, when one
    /// matched within tolerance.
    pub speed_diff: Option<f64>,
    /// Profile index of the release-speed match.
    pub matched_index: Option<usize>,
    /// When the block gets reserved, seconds.
    pub booking_time_s: Option<f64>,
    /// When the train head reaches the block, seconds.
    pub arrival_time_s: Option<f64>,
    /// When the train tail plus overlap has cleared the block, seconds.
    pub release_time_s: Option<f64>,
}
