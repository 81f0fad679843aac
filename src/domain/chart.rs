// Chart models - everything the rendering surface needs, computed up front
use crate::domain::endpoint::{HOURS_IN_FUTURE, HOURS_IN_PAST};
use crate::domain::forecast::{ForecastSeries, Interval};
use crate::domain::signal::Color;
use chrono::{Duration, NaiveDateTime, NaiveTime};

pub const TICK_INTERVAL_HOURS: i64 = 4;
pub const MAX_SERIES_LABELS: usize = 20;
pub const TICK_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const TIME_AXIS_TITLE: &str = "Time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    CurrentStatus,
    ForecastStrip,
    ForecastSeries,
}

impl ChartKind {
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::CurrentStatus => "current status",
            ChartKind::ForecastStrip => "forecast strip",
            ChartKind::ForecastSeries => "forecast series",
        }
    }
}

/// A rendered chart. Returned by every render call instead of living in shared plotting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    pub svg: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusPanel {
    pub title: String,
    pub message: String,
    pub color: Color,
}

impl StatusPanel {
    pub fn new(zip: &str, color: Color, recommendation: &str) -> Self {
        Self {
            title: format!("Dein aktueller Strommix für: {}", zip),
            message: format!("Jetzt solltest du {}", recommendation),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StripBar {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastStrip {
    pub title: String,
    pub bars: Vec<StripBar>,
    pub window: (NaiveDateTime, NaiveDateTime),
    pub ticks: Vec<NaiveDateTime>,
}

impl ForecastStrip {
    /// Bars keep the order of `intervals`. An empty strip spans the nominal
    /// relative window around `now`.
    pub fn new(zip: &str, intervals: &[Interval], now: NaiveDateTime) -> Self {
        let bars: Vec<StripBar> = intervals
            .iter()
            .map(|interval| StripBar {
                from: interval.from,
                to: interval.to,
                color: interval.state.color(),
            })
            .collect();

        let start = intervals.iter().map(|i| i.from).min();
        let end = intervals.iter().map(|i| i.to).max();
        let window = match (start, end) {
            (Some(start), Some(end)) if start < end => (start, end),
            (Some(start), Some(_)) => (start, start + Duration::hours(1)),
            _ => (
                now - Duration::hours(HOURS_IN_PAST as i64),
                now + Duration::hours(HOURS_IN_FUTURE as i64),
            ),
        };

        Self {
            title: format!("Strommix-Prognose für: {}", zip),
            ticks: hour_ticks(window.0, window.1, TICK_INTERVAL_HOURS),
            bars,
            window,
        }
    }
}

/// Instants inside `[start, end]` whose hour of day is a multiple of `every_hours`.
pub fn hour_ticks(start: NaiveDateTime, end: NaiveDateTime, every_hours: i64) -> Vec<NaiveDateTime> {
    let step = Duration::hours(every_hours);
    let mut tick = start.date().and_time(NaiveTime::MIN);
    while tick < start {
        tick += step;
    }

    let mut ticks = Vec::new();
    while tick <= end {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine {
    pub label: &'static str,
    pub color: Color,
    pub points: Vec<(NaiveDateTime, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub title: String,
    pub lines: Vec<SeriesLine>,
    pub x_range: (NaiveDateTime, NaiveDateTime),
    pub y_range: (f64, f64),
    pub max_x_labels: usize,
}

impl SeriesChart {
    pub fn new(zip: &str, forecast: &ForecastSeries, now: NaiveDateTime) -> Self {
        let lines: Vec<SeriesLine> = forecast
            .iter()
            .map(|series| SeriesLine {
                label: series.kind.label(),
                color: series.kind.color(),
                points: series.points().collect(),
            })
            .collect();

        let times = lines.iter().flat_map(|l| l.points.iter().map(|(t, _)| *t));
        let x_range = match (times.clone().min(), times.max()) {
            (Some(min), Some(max)) if min < max => (min, max),
            (Some(only), Some(_)) => (only - Duration::hours(1), only + Duration::hours(1)),
            _ => (now, now + Duration::hours(1)),
        };

        let values = lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(_, v)| *v))
            .filter(|v| v.is_finite());
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let y_range = if min > max {
            (0.0, 1.0)
        } else if (max - min).abs() < f64::EPSILON {
            (min - 1.0, max + 1.0)
        } else {
            let pad = (max - min) * 0.05;
            (min - pad, max + pad)
        };

        Self {
            title: format!("Prognose für: {}", zip),
            lines,
            x_range,
            y_range,
            max_x_labels: MAX_SERIES_LABELS,
        }
    }
}
