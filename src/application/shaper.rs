// Shaper - turns decoded responses into intervals and parallel series arrays
use crate::application::signal_source::{ForecastPoint, ForecastResponse, StateEntry};
use crate::domain::errors::{SignalError, TimestampFormatError};
use crate::domain::forecast::{ForecastSeries, Interval, SeriesKind, ShapedSeries, TimeSeriesPoint};
use crate::domain::signal::StateCode;
use crate::domain::timestamp::TimestampFormat;

pub const STATES_SERIES: &str = "states";
const STATES_FORMAT: TimestampFormat = TimestampFormat::OffsetIso;

/// Parse and classify relative-forecast states, keeping source order.
pub fn shape_intervals(states: &[StateEntry]) -> Result<Vec<Interval>, SignalError> {
    states
        .iter()
        .map(|entry| -> Result<Interval, SignalError> {
            let from = STATES_FORMAT.parse(STATES_SERIES, &entry.from)?;
            let to = STATES_FORMAT.parse(STATES_SERIES, &entry.to)?;
            let state = StateCode::try_from(entry.state)?;
            Ok(Interval::new(from, to, state))
        })
        .collect()
}

pub fn shape_series(kind: SeriesKind, points: &[ForecastPoint]) -> Result<ShapedSeries, TimestampFormatError> {
    let format = kind.timestamp_format();
    let mut shaped = ShapedSeries::new(kind);
    for point in points {
        let time = format.parse(kind.key(), &point.date_time)?;
        shaped.push(TimeSeriesPoint::new(time, point.value));
    }
    Ok(shaped)
}

/// Shape all four forecast series. Each keeps its own length.
pub fn shape_forecast(response: &ForecastResponse) -> Result<ForecastSeries, TimestampFormatError> {
    let shaped = ForecastSeries {
        load: shape_series(SeriesKind::Load, &response.load)?,
        renewable_energy: shape_series(SeriesKind::RenewableEnergy, &response.renewable_energy)?,
        residual_load: shape_series(SeriesKind::ResidualLoad, &response.residual_load)?,
        super_green_threshold: shape_series(
            SeriesKind::SuperGreenThreshold,
            &response.super_green_threshold,
        )?,
    };

    tracing::debug!(
        "Shaped forecast: load={} renewable={} residual={} threshold={}",
        shaped.load.len(),
        shaped.renewable_energy.len(),
        shaped.residual_load.len(),
        shaped.super_green_threshold.len()
    );

    Ok(shaped)
}
