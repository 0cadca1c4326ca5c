/// Arc geometry — converts angular/radial spans into renderable curves.
///
/// All coordinates are relative to the chart centre with the y axis pointing
/// down (screen / SVG convention), so increasing angles run clockwise on
/// screen. Angles are radians measured from the +x axis.
use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

/// Spans this close to a full turn are drawn as complete rings.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Endpoints closer than this are treated as the same point.
const POINT_EPSILON: f64 = 1e-9;

/// A point in chart space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Convert polar coordinates around the origin to cartesian.
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// The angular and radial extent of one node at one display root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcSpan {
    pub angle_start: f64,
    pub angle_end: f64,
    pub radius_inner: f64,
    pub radius_outer: f64,
    /// Distance from the display root (root = 0).
    pub depth: usize,
}

impl ArcSpan {
    /// Angular width in radians.
    pub fn angular_width(&self) -> f64 {
        self.angle_end - self.angle_start
    }

    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.angle_start + self.angle_end)
    }

    pub fn mid_radius(&self) -> f64 {
        0.5 * (self.radius_inner + self.radius_outer)
    }

    /// Label anchor: middle of the span in both directions.
    pub fn label_anchor(&self) -> Point {
        polar_to_cartesian(self.mid_radius(), self.mid_angle())
    }

    /// `true` if `p` lies inside the ring segment. Zero-width spans
    /// contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        let r = p.distance_to(Point::ORIGIN);
        if r < self.radius_inner || r >= self.radius_outer {
            return false;
        }
        let mut angle = p.y.atan2(p.x);
        if angle < self.angle_start {
            angle += TAU;
        }
        angle >= self.angle_start && angle < self.angle_end
    }

    /// Closed outline of this span, see [`arc_path`].
    pub fn path(&self) -> PathGeometry {
        arc_path(
            self.angle_start,
            self.angle_end,
            self.radius_inner,
            self.radius_outer,
        )
    }
}

/// One drawing instruction of a [`PathGeometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc around the origin from the current point to `to`.
    /// `sweep` = increasing angle; `large_arc` selects the longer of the two
    /// candidate arcs, as in SVG.
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// A closed curve made of straight and circular segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
}

/// Build the closed ring segment between two angles and two radii.
///
/// Outer arc from `angle_start` to `angle_end`, straight edge inward, inner
/// arc back to `angle_start`, straight edge outward. `angle_start ==
/// angle_end` yields a valid zero-area path. A full turn is split into two
/// half arcs per radius because a single arc whose endpoints coincide draws
/// nothing.
pub fn arc_path(
    angle_start: f64,
    angle_end: f64,
    radius_inner: f64,
    radius_outer: f64,
) -> PathGeometry {
    let span = angle_end - angle_start;
    let mut commands = Vec::with_capacity(8);

    if span >= TAU - FULL_TURN_EPSILON {
        let half = angle_start + PI;
        commands.push(PathCommand::MoveTo(polar_to_cartesian(radius_outer, angle_start)));
        for angle in [half, angle_start] {
            commands.push(PathCommand::ArcTo {
                radius: radius_outer,
                large_arc: false,
                sweep: true,
                to: polar_to_cartesian(radius_outer, angle),
            });
        }
        commands.push(PathCommand::LineTo(polar_to_cartesian(radius_inner, angle_start)));
        for angle in [half, angle_start] {
            commands.push(PathCommand::ArcTo {
                radius: radius_inner,
                large_arc: false,
                sweep: false,
                to: polar_to_cartesian(radius_inner, angle),
            });
        }
        commands.push(PathCommand::Close);
        return PathGeometry { commands };
    }

    let large_arc = span > PI;
    commands.push(PathCommand::MoveTo(polar_to_cartesian(radius_outer, angle_start)));
    commands.push(PathCommand::ArcTo {
        radius: radius_outer,
        large_arc,
        sweep: true,
        to: polar_to_cartesian(radius_outer, angle_end),
    });
    commands.push(PathCommand::LineTo(polar_to_cartesian(radius_inner, angle_end)));
    commands.push(PathCommand::ArcTo {
        radius: radius_inner,
        large_arc,
        sweep: false,
        to: polar_to_cartesian(radius_inner, angle_start),
    });
    commands.push(PathCommand::Close);
    PathGeometry { commands }
}

impl PathGeometry {
    /// SVG path data (`d` attribute).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 32);
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            // Writing to a String cannot fail.
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(d, "M {},{}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L {},{}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    d,
                    "A {r},{r} 0 {} {} {},{}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    fmt_num(to.x),
                    fmt_num(to.y),
                    r = fmt_num(radius),
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Approximate the outline by a polygon, subdividing arcs so that no
    /// segment covers more than `max_step` radians.
    pub fn flatten(&self, max_step: f64) -> Vec<Point> {
        let max_step = if max_step > 0.0 { max_step } else { PI / 32.0 };
        let mut points = Vec::new();
        let mut current = Point::ORIGIN;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::ArcTo {
                    radius, sweep, to, ..
                } => {
                    if current.distance_to(to) > POINT_EPSILON {
                        let from_angle = current.y.atan2(current.x);
                        let mut delta = to.y.atan2(to.x) - from_angle;
                        if sweep && delta <= 0.0 {
                            delta += TAU;
                        } else if !sweep && delta >= 0.0 {
                            delta -= TAU;
                        }
                        let steps = (delta.abs() / max_step).ceil().max(1.0) as usize;
                        for i in 1..steps {
                            let angle = from_angle + delta * i as f64 / steps as f64;
                            points.push(polar_to_cartesian(radius, angle));
                        }
                        points.push(to);
                    }
                    current = to;
                }
                PathCommand::Close => {}
            }
        }
        points
    }
}

/// Compact number formatting for path data: three decimals, trailing
/// zeros trimmed, no negative zero.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
