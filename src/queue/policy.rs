//! Close policies

use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

/// What happens to buffered items when a queue is closed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ClosePolicy {
    /// Keep buffered items; consumers drain them before seeing `Closed`
    #[default]
    Drain,
    /// Discard buffered items as part of the close itself
    Immediate,
}
