//! Data feeds for the chart and timeline views.

use serde::Serialize;

use crate::model::time::{month_year_label, utc_date_label};
use crate::model::Event;
use crate::pipeline::{sort_by_time, TimeOrder};

/// Intensity bucket used by the charts page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl IntensityLevel {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= 9.0 {
            Self::Critical
        } else if intensity >= 7.0 {
            Self::High
        } else if intensity >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#22c55e",
            Self::Medium => "#eab308",
            Self::High => "#f97316",
            Self::Critical => "#ef4444",
        }
    }
}

/// Severity band for timeline cards, timeline dots and region cards.
///
/// Deliberately on a different scale from [`IntensityLevel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Baseline,
    Elevated,
    High,
    Severe,
}

impl SeverityBand {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= 10.0 {
            Self::Severe
        } else if intensity >= 8.0 {
            Self::High
        } else if intensity >= 6.0 {
            Self::Elevated
        } else {
            Self::Baseline
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Elevated => "elevated",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

/// One point of a per-event chart series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPoint<T> {
    /// `YYYY-MM-DD` in UTC, empty when the timestamp is unparsable.
    pub date: String,
    pub value: T,
    pub headline: String,
    pub id: String,
}

fn series<'a, I, T, F>(events: I, value: F) -> Vec<ChartPoint<T>>
where
    I: IntoIterator<Item = &'a Event>,
    F: Fn(&Event) -> T,
{
    sort_by_time(events, TimeOrder::Ascending)
        .into_iter()
        .map(|e| ChartPoint {
            date: e.instant().map(|t| utc_date_label(&t)).unwrap_or_default(),
            value: value(e),
            headline: e.headline.clone(),
            id: e.id.clone(),
        })
        .collect()
}

/// Killed + injured per event, oldest first.
pub fn casualty_series<'a, I>(events: I) -> Vec<ChartPoint<u64>>
where
    I: IntoIterator<Item = &'a Event>,
{
    series(events, |e| e.casualties.total())
}

/// Intensity per event, oldest first.
pub fn intensity_series<'a, I>(events: I) -> Vec<ChartPoint<f64>>
where
    I: IntoIterator<Item = &'a Event>,
{
    series(events, |e| e.intensity)
}

/// Month-year labels of the first and last entry of an already sorted timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimelineSpan {
    pub earliest: String,
    pub latest: String,
}

pub fn timeline_span(sorted: &[&Event]) -> Option<TimelineSpan> {
    let label = |e: &Event| e.instant().map(|t| month_year_label(&t)).unwrap_or_default();
    let first = sorted.first()?;
    let last = sorted.last()?;
    Some(TimelineSpan {
        earliest: label(first),
        latest: label(last),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::test_support::event_at;

    #[test]
    fn chart_levels_have_inclusive_thresholds() {
        assert_eq!(IntensityLevel::from_intensity(9.0), IntensityLevel::Critical);
        assert_eq!(IntensityLevel::from_intensity(8.9), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_intensity(7.0), IntensityLevel::High);
        assert_eq!(IntensityLevel::from_intensity(5.0), IntensityLevel::Medium);
        assert_eq!(IntensityLevel::from_intensity(4.99), IntensityLevel::Low);
        assert_eq!(IntensityLevel::Critical.color(), "#ef4444");
    }

    #[test]
    fn severity_bands() {
        assert_eq!(SeverityBand::from_intensity(10.0), SeverityBand::Severe);
        assert_eq!(SeverityBand::from_intensity(9.0), SeverityBand::High);
        assert_eq!(SeverityBand::from_intensity(6.0), SeverityBand::Elevated);
        assert_eq!(SeverityBand::from_intensity(5.9), SeverityBand::Baseline);
    }

    #[test]
    fn series_are_chronological_with_utc_dates() {
        let mut late = event_at("late", "2025-08-02T01:00:00+03:00");
        late.casualties.killed = 2;
        late.casualties.injured = 3;
        let mut early = event_at("early", "2025-07-30T12:00:00Z");
        early.intensity = 8.5;
        let bad = event_at("bad", "unknown");
        let events = vec![bad, late, early];

        let casualties = casualty_series(&events);
        let dates: Vec<_> = casualties.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2025-07-30", "2025-08-01", ""]);
        assert_eq!(casualties[1].value, 5);

        let intensity = intensity_series(&events);
        assert_eq!(intensity[0].id, "early");
        assert_eq!(intensity[0].value, 8.5);
    }

    #[test]
    fn span_uses_first_and_last() {
        let a = event_at("a", "2025-06-15T00:00:00Z");
        let b = event_at("b", "2025-08-01T00:00:00Z");
        let span = timeline_span(&[&a, &b]).unwrap();
        assert_eq!(span.earliest, "Jun 2025");
        assert_eq!(span.latest, "Aug 2025");
        assert!(timeline_span(&[]).is_none());
    }
}
