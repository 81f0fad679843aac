// Forecast domain models
use crate::domain::signal::{Color, StateCode};
use crate::domain::timestamp::TimestampFormat;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub time: NaiveDateTime,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time: NaiveDateTime, value: f64) -> Self {
        Self { time, value }
    }
}

/// A half-open span `[from, to)` carrying the grid state for that span.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub state: StateCode,
}

impl Interval {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime, state: StateCode) -> Self {
        Self { from, to, state }
    }
}

/// The four series of the full forecast. They share a shape but are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Load,
    RenewableEnergy,
    ResidualLoad,
    SuperGreenThreshold,
}

impl SeriesKind {
    /// Field name in the forecast response.
    pub fn key(self) -> &'static str {
        match self {
            SeriesKind::Load => "load",
            SeriesKind::RenewableEnergy => "renewableEnergy",
            SeriesKind::ResidualLoad => "residualLoad",
            SeriesKind::SuperGreenThreshold => "superGreenThreshold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Load => "Load",
            SeriesKind::RenewableEnergy => "Renewable Energy",
            SeriesKind::ResidualLoad => "Residual Load",
            SeriesKind::SuperGreenThreshold => "Super Green Threshold",
        }
    }

    pub fn timestamp_format(self) -> TimestampFormat {
        TimestampFormat::UtcZulu
    }

    // Default line color cycle.
    pub fn color(self) -> Color {
        match self {
            SeriesKind::Load => Color::new("tab:blue", (31, 119, 180)),
            SeriesKind::RenewableEnergy => Color::new("tab:orange", (255, 127, 14)),
            SeriesKind::ResidualLoad => Color::new("tab:green", (44, 160, 44)),
            SeriesKind::SuperGreenThreshold => Color::new("tab:red", (214, 39, 40)),
        }
    }
}

/// One named series as parallel arrays. `timestamps[i]` belongs to `values[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedSeries {
    pub kind: SeriesKind,
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
}

impl ShapedSeries {
    pub fn new(kind: SeriesKind) -> Self {
        Self {
            kind,
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, point: TimeSeriesPoint) {
        self.timestamps.push(point.time);
        self.values.push(point.value);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub load: ShapedSeries,
    pub renewable_energy: ShapedSeries,
    pub residual_load: ShapedSeries,
    pub super_green_threshold: ShapedSeries,
}

impl ForecastSeries {
    pub fn iter(&self) -> impl Iterator<Item = &ShapedSeries> {
        [
            &self.load,
            &self.renewable_energy,
            &self.residual_load,
            &self.super_green_threshold,
        ]
        .into_iter()
    }
}
