// SVG rendering surface backed by plotters
use crate::application::render_surface::RenderSurface;
use crate::domain::chart::{
    ChartKind, Figure, ForecastStrip, SeriesChart, StatusPanel, TICK_LABEL_FORMAT, TIME_AXIS_TITLE,
};
use crate::domain::errors::RenderError;
use crate::domain::signal::Color as SignalColor;
use crate::infrastructure::config::{ChartSettings, FigureSize};
use chrono::NaiveDateTime;
use plotters::coord::Shift;
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const FONT: &str = "sans-serif";

type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type DrawResult = Result<(), DrawingAreaErrorKind<std::io::Error>>;

/// Draws every chart into an in-memory SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    sizes: ChartSettings,
}

impl SvgSurface {
    pub fn new(sizes: ChartSettings) -> Self {
        Self { sizes }
    }
}

fn rgb(color: SignalColor) -> RGBColor {
    let (r, g, b) = color.rgb;
    RGBColor(r, g, b)
}

fn format_tick(time: &NaiveDateTime) -> String {
    time.format(TICK_LABEL_FORMAT).to_string()
}

fn render_svg<F>(kind: ChartKind, size: FigureSize, draw: F) -> Result<String, RenderError>
where
    F: FnOnce(&SvgArea<'_>) -> DrawResult,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (size.width, size.height)).into_drawing_area();
        root.fill(&WHITE)
            .and_then(|_| draw(&root))
            .and_then(|_| root.present())
            .map_err(|e| RenderError {
                chart: kind.name(),
                detail: e.to_string(),
            })?;
    }
    Ok(svg)
}

fn paint_panel(root: &SvgArea<'_>, panel: &StatusPanel) -> DrawResult {
    let (width, height) = root.dim_in_pixel();
    let side = width.min(height) as i32;
    let left = (width as i32 - side) / 2;
    let top = (height as i32 - side) / 2;
    let center_x = left + side / 2;

    root.draw(&Rectangle::new(
        [(left, top), (left + side, top + side)],
        rgb(panel.color).filled(),
    ))?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    let title_style = (FONT, side / 26).into_font().color(&WHITE).pos(centered);
    let message_style = (FONT, side / 36).into_font().color(&WHITE).pos(centered);

    // Title near the top edge, recommendation in the middle.
    root.draw(&Text::new(
        panel.title.as_str(),
        (center_x, top + side / 10),
        title_style,
    ))?;
    root.draw(&Text::new(
        panel.message.as_str(),
        (center_x, top + side / 2),
        message_style,
    ))?;
    Ok(())
}

fn paint_strip(root: &SvgArea<'_>, strip: &ForecastStrip) -> DrawResult {
    let (start, end) = strip.window;
    let x_axis = RangedDateTime::from(start..end).with_key_points(strip.ticks.clone());

    let mut chart = ChartBuilder::on(root)
        .caption(&strip.title, (FONT, 18))
        .margin(10)
        .x_label_area_size(130)
        .y_label_area_size(10)
        .build_cartesian_2d(x_axis, 0f64..1f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_label_formatter(&format_tick)
        .x_label_style((FONT, 12).into_font().transform(FontTransform::Rotate270))
        .x_desc(TIME_AXIS_TITLE)
        .draw()?;

    chart.draw_series(
        strip
            .bars
            .iter()
            .map(|bar| Rectangle::new([(bar.from, 0.1), (bar.to, 0.9)], rgb(bar.color).filled())),
    )?;
    chart.draw_series(
        strip
            .bars
            .iter()
            .map(|bar| Rectangle::new([(bar.from, 0.1), (bar.to, 0.9)], BLACK.stroke_width(1))),
    )?;
    Ok(())
}

fn paint_series(root: &SvgArea<'_>, model: &SeriesChart) -> DrawResult {
    let (x_start, x_end) = model.x_range;
    let (y_start, y_end) = model.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&model.title, (FONT, 20))
        .margin(10)
        .x_label_area_size(130)
        .y_label_area_size(70)
        .build_cartesian_2d(RangedDateTime::from(x_start..x_end), y_start..y_end)?;

    chart
        .configure_mesh()
        .x_labels(model.max_x_labels)
        .x_label_formatter(&format_tick)
        .x_label_style((FONT, 12).into_font().transform(FontTransform::Rotate270))
        .x_desc(TIME_AXIS_TITLE)
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    for line in &model.lines {
        let color = rgb(line.color);
        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), color.stroke_width(2)))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

impl RenderSurface for SvgSurface {
    fn draw_status_panel(&self, panel: &StatusPanel) -> Result<Figure, RenderError> {
        let kind = ChartKind::CurrentStatus;
        let svg = render_svg(kind, self.sizes.status, |root| paint_panel(root, panel))?;
        Ok(Figure {
            kind,
            title: panel.title.clone(),
            svg,
        })
    }

    fn draw_forecast_strip(&self, strip: &ForecastStrip) -> Result<Figure, RenderError> {
        let kind = ChartKind::ForecastStrip;
        let svg = render_svg(kind, self.sizes.strip, |root| paint_strip(root, strip))?;
        Ok(Figure {
            kind,
            title: strip.title.clone(),
            svg,
        })
    }

    fn draw_series_chart(&self, chart: &SeriesChart) -> Result<Figure, RenderError> {
        let kind = ChartKind::ForecastSeries;
        let svg = render_svg(kind, self.sizes.series, |root| paint_series(root, chart))?;
        Ok(Figure {
            kind,
            title: chart.title.clone(),
            svg,
        })
    }
}
