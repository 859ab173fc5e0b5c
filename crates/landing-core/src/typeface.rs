//! Typeface JSON fonts (the format produced by facetype.js).
//!
//! A font is a map of glyphs, each with an advance (`ha`) and an outline
//! string made of `m`/`l`/`q`/`b` commands in font units. Outlines are parsed
//! eagerly so a malformed font is rejected once, at load time, instead of
//! failing while text is being laid out.

use fnv::FnvHashMap;
use glam::Vec2;
use serde::Deserialize;
use smallvec::SmallVec;
use std::str::SplitWhitespace;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("typeface json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("glyph {glyph:?}: {reason}")]
    Outline { glyph: char, reason: String },
    #[error("typeface resolution must be positive, got {0}")]
    Resolution(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

#[derive(Clone, Debug, Default)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub advance: f32,
    pub commands: Vec<PathCommand>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// A filled region: one counter-clockwise outer contour and any clockwise
/// holes inside it.
#[derive(Clone, Debug, Default)]
pub struct Shape {
    pub outer: Vec<Vec2>,
    pub holes: SmallVec<[Vec<Vec2>; 2]>,
}

#[derive(Deserialize)]
struct RawGlyph {
    #[serde(default)]
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeface {
    glyphs: FnvHashMap<String, RawGlyph>,
    #[serde(default)]
    family_name: String,
    resolution: f32,
    #[serde(default)]
    bounding_box: BoundingBox,
    #[serde(default)]
    underline_thickness: f32,
}

#[derive(Clone, Debug)]
pub struct Typeface {
    pub family_name: String,
    pub resolution: f32,
    pub bounding_box: BoundingBox,
    pub underline_thickness: f32,
    glyphs: FnvHashMap<char, Glyph>,
}

impl Typeface {
    pub fn from_json(json: &str) -> Result<Self, FontError> {
        let raw: RawTypeface = serde_json::from_str(json)?;
        if raw.resolution.is_nan() || raw.resolution <= 0.0 {
            return Err(FontError::Resolution(raw.resolution));
        }
        let mut glyphs = FnvHashMap::default();
        for (key, g) in raw.glyphs {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                log::debug!("[font] skipping multi-char glyph key {:?}", key);
                continue;
            };
            let commands = match g.o.as_deref() {
                Some(o) => parse_outline(o)
                    .map_err(|reason| FontError::Outline { glyph: ch, reason })?,
                None => Vec::new(),
            };
            glyphs.insert(
                ch,
                Glyph {
                    advance: g.ha,
                    commands,
                },
            );
        }
        Ok(Self {
            family_name: raw.family_name,
            resolution: raw.resolution,
            bounding_box: raw.bounding_box,
            underline_thickness: raw.underline_thickness,
            glyphs,
        })
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Lay `text` out from the origin at `size` world units per em and return
    /// its filled shapes. Curves are flattened into `curve_segments` pieces.
    pub fn shapes(&self, text: &str, size: f32, curve_segments: usize) -> Vec<Shape> {
        let scale = size / self.resolution;
        let bb = self.bounding_box;
        let line_height = (bb.y_max - bb.y_min + self.underline_thickness) * scale;
        let mut offset = Vec2::ZERO;
        let mut shapes = Vec::new();
        for ch in text.chars() {
            if ch == '\n' {
                offset.x = 0.0;
                offset.y -= line_height;
                continue;
            }
            let Some(glyph) = self.glyph(ch).or_else(|| self.glyph('?')) else {
                log::warn!(
                    "[font] character {:?} missing from {}",
                    ch,
                    self.family_name
                );
                continue;
            };
            let contours = flatten(&glyph.commands, scale, offset, curve_segments.max(1));
            shapes.extend(group_contours(contours));
            offset.x += glyph.advance * scale;
        }
        shapes
    }
}

fn read_point(tokens: &mut SplitWhitespace<'_>, op: &str) -> Result<Vec2, String> {
    let mut coord = || -> Result<f32, String> {
        let t = tokens
            .next()
            .ok_or_else(|| format!("'{op}' is missing coordinates"))?;
        t.parse::<f32>()
            .map_err(|_| format!("'{op}' has bad coordinate {t:?}"))
    };
    let x = coord()?;
    let y = coord()?;
    Ok(Vec2::new(x, y))
}

fn parse_outline(o: &str) -> Result<Vec<PathCommand>, String> {
    let mut tokens = o.split_whitespace();
    let mut commands = Vec::new();
    while let Some(op) = tokens.next() {
        let cmd = match op {
            "m" => PathCommand::MoveTo(read_point(&mut tokens, op)?),
            "l" => PathCommand::LineTo(read_point(&mut tokens, op)?),
            // end point first, then the control point(s)
            "q" => {
                let to = read_point(&mut tokens, op)?;
                let ctrl = read_point(&mut tokens, op)?;
                PathCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = read_point(&mut tokens, op)?;
                let ctrl1 = read_point(&mut tokens, op)?;
                let ctrl2 = read_point(&mut tokens, op)?;
                PathCommand::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => continue,
            other => return Err(format!("unknown command {other:?}")),
        };
        commands.push(cmd);
    }
    Ok(commands)
}

fn flatten(
    commands: &[PathCommand],
    scale: f32,
    offset: Vec2,
    segments: usize,
) -> Vec<Vec<Vec2>> {
    let mut contours = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let map = |p: Vec2| p * scale + offset;
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                if !current.is_empty() {
                    contours.push(std::mem::take(&mut current));
                }
                current.push(map(p));
            }
            PathCommand::LineTo(p) => current.push(map(p)),
            PathCommand::QuadTo { ctrl, to } => {
                let p0 = current.last().copied().unwrap_or(map(to));
                let (c, p1) = (map(ctrl), map(to));
                for s in 1..=segments {
                    let t = s as f32 / segments as f32;
                    let u = 1.0 - t;
                    current.push(p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t));
                }
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                let p0 = current.last().copied().unwrap_or(map(to));
                let (c1, c2, p1) = (map(ctrl1), map(ctrl2), map(to));
                for s in 1..=segments {
                    let t = s as f32 / segments as f32;
                    let u = 1.0 - t;
                    current.push(
                        p0 * (u * u * u)
                            + c1 * (3.0 * u * u * t)
                            + c2 * (3.0 * u * t * t)
                            + p1 * (t * t * t),
                    );
                }
            }
        }
    }
    if !current.is_empty() {
        contours.push(current);
    }
    contours
        .into_iter()
        .map(dedup_closed)
        .filter(|c| c.len() >= 3)
        .collect()
}

// Drop repeated consecutive points, including the closing duplicate of the
// first point.
fn dedup_closed(mut contour: Vec<Vec2>) -> Vec<Vec2> {
    const EPS: f32 = 1e-6;
    contour.dedup_by(|a, b| a.distance_squared(*b) < EPS);
    while contour.len() > 1 && contour[0].distance_squared(contour[contour.len() - 1]) < EPS {
        contour.pop();
    }
    contour
}

/// Shoelace area; positive for counter-clockwise (y up).
pub fn signed_area(contour: &[Vec2]) -> f32 {
    let n = contour.len();
    (0..n)
        .map(|i| {
            let (a, b) = (contour[i], contour[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f32>()
        * 0.5
}

/// Even-odd point-in-polygon test.
pub fn contains_point(contour: &[Vec2], p: Vec2) -> bool {
    let n = contour.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (a, b) = (contour[i], contour[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Split one glyph's contours into solids and holes. The winding of the
/// largest contour marks solids; every other contour is a hole owned by the
/// smallest solid containing it.
pub fn group_contours(contours: Vec<Vec<Vec2>>) -> Vec<Shape> {
    let with_area: Vec<(Vec<Vec2>, f32)> = contours
        .into_iter()
        .map(|c| {
            let a = signed_area(&c);
            (c, a)
        })
        .filter(|(_, a)| a.abs() > 1e-9)
        .collect();
    let Some(solid_positive) = with_area
        .iter()
        .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(_, a)| *a > 0.0)
    else {
        return Vec::new();
    };

    let mut shapes: Vec<(Shape, f32)> = Vec::new();
    let mut holes: Vec<Vec<Vec2>> = Vec::new();
    for (mut c, a) in with_area {
        if (a > 0.0) == solid_positive {
            if a < 0.0 {
                c.reverse();
            }
            shapes.push((
                Shape {
                    outer: c,
                    holes: SmallVec::new(),
                },
                a.abs(),
            ));
        } else {
            if a > 0.0 {
                c.reverse();
            }
            holes.push(c);
        }
    }
    for hole in holes {
        let owner = shapes
            .iter_mut()
            .filter(|(s, _)| contains_point(&s.outer, hole[0]))
            .min_by(|a, b| a.1.total_cmp(&b.1));
        match owner {
            Some((shape, _)) => shape.holes.push(hole),
            None => log::debug!("[font] dropping hole outside every solid"),
        }
    }
    shapes.into_iter().map(|(s, _)| s).collect()
}
