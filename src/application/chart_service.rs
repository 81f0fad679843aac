// Chart service - fetch, shape, classify, then hand one chart model to the surface
use crate::application::render_surface::RenderSurface;
use crate::application::shaper::{shape_forecast, shape_intervals};
use crate::application::signal_source::SignalSource;
use crate::domain::chart::{Figure, ForecastStrip, SeriesChart, StatusPanel};
use crate::domain::errors::SignalError;
use crate::domain::signal::{color_for, text_for};
use chrono::{NaiveDateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    source: Arc<dyn SignalSource>,
    surface: Arc<dyn RenderSurface>,
}

impl ChartService {
    pub fn new(source: Arc<dyn SignalSource>, surface: Arc<dyn RenderSurface>) -> Self {
        Self { source, surface }
    }

    /// Colored panel with the recommendation for right now.
    pub async fn render_current_status(&self, zip: &str) -> Result<Figure, SignalError> {
        let code = self.source.fetch_current_state(zip).await?;
        let color = color_for(code)?;
        let recommendation = text_for(code)?;
        tracing::debug!("Current state for {}: {} ({})", zip, code, color.name);

        let panel = StatusPanel::new(zip, color, recommendation);
        let figure = self.surface.draw_status_panel(&panel)?;
        tracing::info!("Rendered {} for {}", figure.kind.name(), zip);
        Ok(figure)
    }

    /// One colored bar per forecast interval on a shared time axis.
    pub async fn render_forecast_strip(&self, zip: &str) -> Result<Figure, SignalError> {
        let response = self.source.fetch_relative_forecast(zip).await?;
        let intervals = shape_intervals(&response.states)?;
        if intervals.is_empty() {
            tracing::warn!("No forecast intervals for {}", zip);
        }

        let strip = ForecastStrip::new(zip, &intervals, now());
        let figure = self.surface.draw_forecast_strip(&strip)?;
        tracing::info!(
            "Rendered {} for {} ({} bars)",
            figure.kind.name(),
            zip,
            strip.bars.len()
        );
        Ok(figure)
    }

    /// Load, renewable, residual load and super-green threshold as overlaid lines.
    pub async fn render_forecast_series(&self, zip: &str) -> Result<Figure, SignalError> {
        let response = self.source.fetch_full_forecast(zip).await?;
        let forecast = shape_forecast(&response)?;
        if forecast.iter().all(|series| series.is_empty()) {
            tracing::warn!("Forecast for {} contains no points", zip);
        }

        let chart = SeriesChart::new(zip, &forecast, now());
        let figure = self.surface.draw_series_chart(&chart)?;
        tracing::info!("Rendered {} for {}", figure.kind.name(), zip);
        Ok(figure)
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
