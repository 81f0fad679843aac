// Rendering surface trait - draws chart models into figures
use crate::domain::chart::{Figure, ForecastStrip, SeriesChart, StatusPanel};
use crate::domain::errors::RenderError;

pub trait RenderSurface: Send + Sync {
    fn draw_status_panel(&self, panel: &StatusPanel) -> Result<Figure, RenderError>;

    fn draw_forecast_strip(&self, strip: &ForecastStrip) -> Result<Figure, RenderError>;

    fn draw_series_chart(&self, chart: &SeriesChart) -> Result<Figure, RenderError>;
}
