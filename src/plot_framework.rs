// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, Text};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontStyle, IntoFont, RGBColor};

use std::ops::Range;
use std::path::Path;

use crate::constants::{COLOR_PLACEHOLDER_TEXT, LINE_WIDTH_LEGEND, TEXT_LINE_SPACING};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MESSAGE,
    FONT_TUPLE_PAGE_HEADING,
};
use crate::types::{PageSize, PlotResult, ScatterPoints};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Tick label formatting shared by both chart axes.
///
/// Large values use k/M notation, sub-unit values (structure consistency,
/// row-span fraction) keep two decimals.
pub fn format_axis_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        format!("{:.0}k", value / 1000.0)
    } else if magnitude == 0.0 {
        "0".to_string()
    } else if magnitude < 1.0 {
        format!("{:.2}", value)
    } else if magnitude < 10.0 && value.fract() != 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Cross,
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: ScatterPoints,
    pub label: String,
    pub color: RGBColor,
    pub marker: MarkerShape,
    pub marker_size: i32,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<PlotSeries>,
}

impl PlotConfig {
    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    /// Padded x/y ranges covering every finite point, if any.
    pub fn data_ranges(&self) -> Option<(Range<f64>, Range<f64>)> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in self.series.iter().flat_map(|s| s.data.iter()) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if x_min.is_infinite() || y_min.is_infinite() {
            return None;
        }
        let (x_lo, x_hi) = calculate_range(x_min, x_max);
        let (y_lo, y_hi) = calculate_range(y_min, y_max);
        Some((x_lo..x_hi, y_lo..y_hi))
    }
}

/// One line of a text page, positioned by fraction of the page height.
#[derive(Clone, Debug)]
pub struct TextLine {
    pub text: String,
    pub font: (&'static str, i32),
    pub y_fraction: f64,
    pub bold: bool,
    pub color: RGBColor,
}

impl TextLine {
    pub fn new(text: impl Into<String>, font: (&'static str, i32), y_fraction: f64) -> Self {
        Self {
            text: text.into(),
            font,
            y_fraction,
            bold: false,
            color: BLACK,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn colored(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }
}

/// Lays out a multi-line block starting at `start_fraction`, one `TextLine` per line.
pub fn text_block(
    text: &str,
    font: (&'static str, i32),
    start_fraction: f64,
    page_height: u32,
) -> Vec<TextLine> {
    let step = font.1 as f64 * TEXT_LINE_SPACING / page_height as f64;
    text.lines()
        .enumerate()
        .map(|(i, line)| TextLine::new(line, font, start_fraction + i as f64 * step))
        .collect()
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> PlotResult {
    let (x_range, y_range) = area.get_pixel_range();
    let center = (
        (x_range.end - x_range.start) / 2,
        (y_range.end - y_range.start) / 2,
    );
    let text_style = FONT_TUPLE_MESSAGE
        .into_font()
        .color(COLOR_PLACEHOLDER_TEXT)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        format!("{plot_type} Data Unavailable: {reason}"),
        center,
        text_style,
    ))?;
    Ok(())
}

/// Draws a scatter chart into `area`. Returns false (and draws a placeholder
/// message) when no series has a plottable point.
pub fn draw_scatter_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> PlotResult<bool> {
    let Some((x_range, y_range)) = plot_config.data_ranges() else {
        let reason = if plot_config.has_data() {
            "No finite values"
        } else {
            "No data points"
        };
        draw_unavailable_message(area, &plot_config.title, reason)?;
        return Ok(false);
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(12)
        .y_labels(8)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let style = s.color.mix(s.opacity);
        let size = s.marker_size;
        let points = s.data.iter().filter(|(x, y)| x.is_finite() && y.is_finite());

        let annotation = match s.marker {
            MarkerShape::Circle => {
                let anno = chart.draw_series(
                    points.map(|&(x, y)| Circle::new((x, y), size, style.filled())),
                )?;
                if !s.label.is_empty() {
                    anno.label(&s.label)
                        .legend(move |(x, y)| Circle::new((x + 10, y), size, style.filled()));
                }
                !s.label.is_empty()
            }
            MarkerShape::Cross => {
                let stroke = style.stroke_width(LINE_WIDTH_LEGEND);
                let anno = chart.draw_series(points.map(|&(x, y)| Cross::new((x, y), size, stroke)))?;
                if !s.label.is_empty() {
                    anno.label(&s.label)
                        .legend(move |(x, y)| Cross::new((x + 10, y), size, stroke));
                }
                !s.label.is_empty()
            }
        };
        if annotation {
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(true)
}

/// Renders one chart page: a heading across the top and the scatter chart below.
/// Returns whether any data was plotted.
pub fn draw_chart_page(
    output_path: &Path,
    page_size: PageSize,
    heading: &str,
    plot_config: &PlotConfig,
) -> PlotResult<bool> {
    let root_area = BitMapBackend::new(output_path, page_size).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        heading,
        (15, 10),
        FONT_TUPLE_PAGE_HEADING.into_font().color(&BLACK),
    ))?;
    let chart_area = root_area.margin(70, 10, 10, 10);
    let plotted = draw_scatter_chart(&chart_area, plot_config)?;
    root_area.present()?;
    Ok(plotted)
}

/// Renders a page of horizontally centred text lines.
pub fn draw_text_page(output_path: &Path, page_size: PageSize, lines: &[TextLine]) -> PlotResult {
    let root_area = BitMapBackend::new(output_path, page_size).into_drawing_area();
    root_area.fill(&WHITE)?;
    let center_x = page_size.0 as i32 / 2;
    for line in lines {
        let font = line.font.into_font();
        let font = if line.bold {
            font.style(FontStyle::Bold)
        } else {
            font
        };
        let style = font
            .color(&line.color)
            .pos(Pos::new(HPos::Center, VPos::Top));
        let y = (line.y_fraction * page_size.1 as f64).round() as i32;
        root_area.draw(&Text::new(line.text.as_str(), (center_x, y), style))?;
    }
    root_area.present()?;
    Ok(())
}
