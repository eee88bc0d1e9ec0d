//! A single subplot of a figure.
use crate::error::LoggerError;
use plotters::{coord::Shift, prelude::*};

pub(crate) fn plot_err<E: std::fmt::Display>(e: E) -> LoggerError {
    LoggerError::Plot(e.to_string())
}

/// How the points of a [`Series`] are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// Connected line.
    Line,
    /// Filled dots.
    Dot,
    /// Crosses.
    Cross,
}

/// A labelled set of points.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend entry.
    pub label: String,
    /// Points as (x, y).
    pub points: Vec<(f32, f32)>,
    /// How the points are drawn.
    pub marker: Marker,
}

impl Series {
    /// Pairs `xs` and `ys` into a series.
    ///
    /// `key` names the channel of `ys` in the error returned when the lengths differ.
    pub fn new(
        label: impl Into<String>,
        key: &str,
        xs: &[f32],
        ys: &[f32],
        marker: Marker,
    ) -> Result<Self, LoggerError> {
        if xs.len() != ys.len() {
            return Err(LoggerError::ShapeMismatch {
                channel: key.to_string(),
                expected: xs.len(),
                actual: ys.len(),
            });
        }
        Ok(Self {
            label: label.into(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            marker,
        })
    }
}

/// A subplot with a title, axis labels and zero or more series.
///
/// A panel without series is still drawn with its title and axis labels.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Title of the subplot.
    pub title: &'static str,
    /// Label of the x axis.
    pub x_desc: &'static str,
    /// Label of the y axis.
    pub y_desc: &'static str,
    /// Series drawn in the subplot.
    pub series: Vec<Series>,
}

/// Returns a range covering all values, padded when degenerate.
fn bounds(values: impl Iterator<Item = f32>) -> (f32, f32) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    }
}

impl Panel {
    /// Creates a panel without series.
    pub fn new(title: &'static str, x_desc: &'static str, y_desc: &'static str) -> Self {
        Self {
            title,
            x_desc,
            y_desc,
            series: vec![],
        }
    }

    /// Adds series to the panel.
    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        self.series.extend(series);
        self
    }

    pub(crate) fn x_range(&self) -> (f32, f32) {
        bounds(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
    }

    pub(crate) fn y_range(&self) -> (f32, f32) {
        bounds(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)))
    }

    /// Draws the panel on `area`.
    pub fn draw(&self, area: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), LoggerError> {
        let (x0, x1) = self.x_range();
        let (y0, y1) = self.y_range();

        let mut chart = ChartBuilder::on(area)
            .caption(self.title, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc(self.x_desc)
            .y_desc(self.y_desc)
            .draw()
            .map_err(plot_err)?;

        for (i, s) in self.series.iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            let anno = match s.marker {
                Marker::Line => chart.draw_series(LineSeries::new(s.points.iter().copied(), &color)),
                Marker::Dot => chart.draw_series(
                    s.points
                        .iter()
                        .map(|&p| Circle::new(p, 2, color.filled())),
                ),
                Marker::Cross => {
                    chart.draw_series(s.points.iter().map(|&p| Cross::new(p, 3, &color)))
                }
            }
            .map_err(plot_err)?;
            anno.label(s.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        if !self.series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(plot_err)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(bounds(std::iter::empty()), (0.0, 1.0));
        assert_eq!(bounds(vec![2.0].into_iter()), (1.0, 3.0));
        assert_eq!(bounds(vec![0.0, f32::NAN, 10.0].into_iter()), (-0.5, 10.5));
    }

    #[test]
    fn test_series_length_mismatch() {
        let r = Series::new("measured", "dof_pos", &[0.0, 0.02], &[1.0], Marker::Line);
        assert!(matches!(
            r,
            Err(LoggerError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_panel_range() {
        let panel = Panel::new("Torque", "time [s]", "Joint Torque [Nm]");
        assert_eq!(panel.x_range(), (0.0, 1.0));
        assert_eq!(panel.y_range(), (0.0, 1.0));
    }
}
