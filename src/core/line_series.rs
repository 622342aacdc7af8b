use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

/// Default curvature of the interpolated line path.
pub const DEFAULT_SMOOTHING: f64 = 0.18;

/// One drawing command of a vector path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(PixelPoint),
    LineTo(PixelPoint),
    CubicTo {
        control1: PixelPoint,
        control2: PixelPoint,
        to: PixelPoint,
    },
    Close,
}

/// Vector path made of typed commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothPath {
    pub commands: Vec<PathCommand>,
}

impl SmoothPath {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serializes the path into SVG path data (`M x y C ... Z`).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        self.commands
            .iter()
            .map(|command| match command {
                PathCommand::MoveTo(p) => format!("M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => format!("L {} {}", p.x, p.y),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => format!(
                    "C {} {}, {} {}, {} {}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                ),
                PathCommand::Close => "Z".to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn points(&self) -> impl Iterator<Item = PixelPoint> + '_ {
        self.commands.iter().flat_map(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => vec![control1, control2, to],
            PathCommand::Close => Vec::new(),
        })
    }
}

/// Line path plus the closed area beneath it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesPaths {
    pub line: SmoothPath,
    pub area: SmoothPath,
}

/// Builds a Catmull-Rom style cubic path through `points`.
///
/// Segment `i` ends at `points[i]`; its control points are derived from
/// `points[i - 2]`, `points[i - 1]`, `points[i]` and `points[i + 1]`, with
/// missing neighbours replaced by the nearest available point. Fewer than two
/// points produce an empty path.
#[must_use]
pub fn build_smooth_line_path(points: &[PixelPoint], smoothing: f64) -> SmoothPath {
    if points.len() < 2 {
        return SmoothPath::default();
    }

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(points[0]));
    for i in 1..points.len() {
        let current = points[i];
        let prev = points[i - 1];
        let next = points.get(i + 1).copied().unwrap_or(current);
        let prev2 = if i >= 2 { points[i - 2] } else { prev };

        let control1 = PixelPoint::new(
            prev.x + (current.x - prev2.x) * smoothing,
            prev.y + (current.y - prev2.y) * smoothing,
        );
        let control2 = PixelPoint::new(
            current.x - (next.x - prev.x) * smoothing,
            current.y - (next.y - prev.y) * smoothing,
        );
        commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to: current,
        });
    }

    SmoothPath { commands }
}

/// Builds the smoothed line and the gradient-fill area closed down to `bottom_y`.
#[must_use]
pub fn build_line_series_paths(
    points: &[PixelPoint],
    smoothing: f64,
    bottom_y: f64,
) -> LineSeriesPaths {
    let line = build_smooth_line_path(points, smoothing);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return LineSeriesPaths::default();
    };
    if line.is_empty() {
        return LineSeriesPaths::default();
    }

    let mut area = line.clone();
    area.commands.extend([
        PathCommand::LineTo(PixelPoint::new(last.x, bottom_y)),
        PathCommand::LineTo(PixelPoint::new(first.x, bottom_y)),
        PathCommand::Close,
    ]);
    LineSeriesPaths { line, area }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_points_use_clamped_neighbours() {
        let a = PixelPoint::new(0.0, 10.0);
        let b = PixelPoint::new(100.0, 0.0);
        let path = build_smooth_line_path(&[a, b], 0.5);
        assert_eq!(
            path.commands[1],
            PathCommand::CubicTo {
                control1: PixelPoint::new(50.0, 5.0),
                control2: PixelPoint::new(50.0, 5.0),
                to: b,
            }
        );
    }

    #[test]
    fn svg_serialization_matches_command_order() {
        let path = build_line_series_paths(
            &[PixelPoint::new(0.0, 0.0), PixelPoint::new(10.0, 0.0)],
            0.0,
            20.0,
        );
        assert_eq!(
            path.area.to_svg_path_data(),
            "M 0 0 C 0 0, 10 0, 10 0 L 10 20 L 0 20 Z"
        );
    }
}
