//! Trend indicators - direction and formatted magnitude for summary cards.

/// Direction of a month-over-month trend arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    /// Metric grew
    Up,
    /// Metric shrank
    Down,
    /// No movement, or no data this month
    Flat,
}

/// A rendered trend: direction plus the percentage text shown next to the
/// arrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendIndicator {
    /// Arrow direction
    pub direction: TrendDirection,
    /// Displayed text, e.g. `12.5%`; the sign is carried by the direction
    pub text: String,
}

/// Builds the indicator for one summary card.
///
/// A current value of zero always reads flat regardless of the computed
/// change, so an empty month shows `0%` instead of a misleading drop.
#[must_use]
pub fn trend_indicator(change: f64, current_value: f64) -> TrendIndicator {
    if current_value == 0.0 || change == 0.0 {
        return TrendIndicator {
            direction: TrendDirection::Flat,
            text: "0%".to_string(),
        };
    }

    let direction = if change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };

    TrendIndicator {
        direction,
        text: format!("{:.1}%", change.abs()),
    }
}
