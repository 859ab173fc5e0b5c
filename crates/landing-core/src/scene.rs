//! Scene controller state: the link items, hover/click handling and the
//! per-frame animation step.
//!
//! Nothing here touches the DOM or the GPU. The web frontend feeds pointer,
//! resize and frame events in and reads transforms and colours back out, so
//! all of the interaction rules can be exercised on the host.

use crate::camera::PerspectiveCamera;
use crate::color::palette_color;
use crate::constants::*;
use crate::extrude::{extrude_shapes, ExtrudeParams};
use crate::layout;
use crate::links::LinkEntry;
use crate::mesh::MeshData;
use crate::picking::{pick_nearest, HitRegion};
use crate::typeface::Typeface;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::prelude::*;
use std::collections::BTreeSet;

/// Current/target pair for the hover scale animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePair {
    pub current: f32,
    pub target: f32,
}

impl Default for ScalePair {
    fn default() -> Self {
        Self {
            current: IDLE_SCALE,
            target: IDLE_SCALE,
        }
    }
}

impl ScalePair {
    /// Move `current` toward `target` with time constant `SCALE_TAU_SEC`.
    #[inline]
    pub fn step(&mut self, dt_sec: f32) {
        let alpha = (dt_sec.max(0.0) / SCALE_TAU_SEC).min(1.0);
        self.current += (self.target - self.current) * alpha;
    }
}

/// Everything the scene keeps for one link: label, hit plane and companion
/// box.
#[derive(Clone, Debug)]
pub struct Item {
    pub entry: LinkEntry,
    /// Label origin (left end of the text baseline).
    pub position: Vec3,
    pub hit_region: HitRegion,
    pub base_color: u32,
    pub label_color: u32,
    pub box_color: u32,
    pub scale: ScalePair,
    /// Label scale after breathing, refreshed every tick.
    pub label_scale: Vec3,
    pub box_position: Vec3,
    /// Euler angles about X and Y, radians.
    pub box_rotation: Vec2,
    /// Radians added to both box angles every frame.
    pub box_speed: f32,
    pub hovered: bool,
    pub label_mesh: MeshData,
}

impl Item {
    pub fn label_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.label_scale, Quat::IDENTITY, self.position)
    }

    pub fn box_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.box_rotation.x,
            self.box_rotation.y,
            0.0,
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale.current),
            rotation,
            self.box_position,
        )
    }
}

/// Result of a click that landed on a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub index: usize,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lights {
    pub color: u32,
    pub ambient_intensity: f32,
    pub point_intensity: f32,
    pub point_position: Vec3,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            color: LIGHT_COLOR,
            ambient_intensity: AMBIENT_INTENSITY,
            point_intensity: POINT_INTENSITY,
            point_position: POINT_LIGHT_POSITION,
        }
    }
}

pub struct Scene {
    pub camera: PerspectiveCamera,
    lights: Lights,
    viewport: Viewport,
    pointer: Vec2,
    items: Vec<Item>,
    clicked: BTreeSet<usize>,
    populated: bool,
    rng: StdRng,
    last_time_ms: Option<f64>,
    time_ms: f64,
}

impl Scene {
    /// Empty scene (camera and lights only) for a `width` x `height` viewport.
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        Self {
            camera: PerspectiveCamera::landing(aspect),
            lights: Lights::default(),
            viewport: Viewport { width, height },
            pointer: Vec2::ZERO,
            items: Vec::new(),
            clicked: BTreeSet::new(),
            populated: false,
            rng: StdRng::seed_from_u64(seed),
            last_time_ms: None,
            time_ms: 0.0,
        }
    }

    /// Build one item per entry, top to bottom, with label meshes from
    /// `font`. Runs once; later calls are ignored and return `false`.
    pub fn populate(&mut self, entries: &[LinkEntry], font: &Typeface) -> bool {
        if self.populated {
            log::warn!("[scene] populate called twice; ignoring");
            return false;
        }
        self.populated = true;
        let count = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let y = layout::item_y(i, count, VERTICAL_SPACING);
            let position = layout::label_position(y);
            let shapes = font.shapes(entry.text, TEXT_SIZE, CURVE_SEGMENTS);
            let label_mesh = extrude_shapes(&shapes, &ExtrudeParams::LABEL);
            let color = palette_color(i);
            let box_speed = self.sample_box_speed();
            self.items.push(Item {
                entry: *entry,
                position,
                hit_region: layout::hit_region_for(position),
                base_color: color,
                label_color: color,
                box_color: color,
                scale: ScalePair::default(),
                label_scale: Vec3::ONE,
                box_position: position + layout::box_offset(IDLE_SCALE),
                box_rotation: Vec2::ZERO,
                box_speed,
                hovered: false,
                label_mesh,
            });
        }
        log::info!(
            "[scene] built {} items ({} triangles)",
            self.items.len(),
            self.items
                .iter()
                .map(|it| it.label_mesh.triangle_count())
                .sum::<usize>()
        );
        true
    }

    /// Follow a viewport resize. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.camera.set_aspect(width as f32, height as f32);
        self.viewport = Viewport { width, height };
        true
    }

    fn pick(&mut self, ndc: Vec2) -> Option<usize> {
        self.pointer = ndc;
        let ray = self.camera.ray_from_ndc(ndc);
        pick_nearest(&ray, self.items.iter().map(|it| &it.hit_region))
    }

    /// Pointer moved to `ndc`. The nearest hit item grows and spins fast;
    /// every other item relaxes and gets a fresh idle spin speed.
    pub fn pointer_move(&mut self, ndc: Vec2) -> Option<usize> {
        let hit = self.pick(ndc);
        for i in 0..self.items.len() {
            if hit == Some(i) {
                let item = &mut self.items[i];
                item.scale.target = HOVER_SCALE;
                item.box_speed = BOX_SPEED_HOVER;
                if !item.hovered {
                    log::debug!("[hover] enter {}", item.entry.text);
                }
                item.hovered = true;
            } else {
                let speed = self.sample_box_speed();
                let item = &mut self.items[i];
                item.scale.target = IDLE_SCALE;
                item.box_speed = speed;
                item.hovered = false;
            }
        }
        hit
    }

    /// Click at `ndc`. A hit turns the label white for good and yields the
    /// link to open.
    pub fn click(&mut self, ndc: Vec2) -> Option<ClickOutcome> {
        let index = self.pick(ndc)?;
        let item = &mut self.items[index];
        item.label_color = HIGHLIGHT_COLOR;
        if self.clicked.insert(index) {
            log::info!("[click] {} -> {}", item.entry.text, item.entry.url);
        }
        Some(ClickOutcome {
            index,
            url: item.entry.url,
        })
    }

    /// Advance the animation to frame timestamp `time_ms`.
    pub fn tick(&mut self, time_ms: f64) {
        let dt_sec = match self.last_time_ms {
            Some(prev) => ((time_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);
        self.time_ms = time_ms;

        for (i, item) in self.items.iter_mut().enumerate() {
            item.scale.step(dt_sec);
            let s = item.scale.current;
            let breath = 1.0 + breath_wave(time_ms, i) * BREATH_AMPLITUDE;
            item.label_scale = Vec3::new(s, s * breath, s);

            item.box_position = item.position + layout::box_offset(s);
            item.box_rotation += Vec2::splat(item.box_speed);
        }
    }

    fn sample_box_speed(&mut self) -> f32 {
        self.rng.gen_range(BOX_SPEED_MIN..BOX_SPEED_MAX)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn clicked(&self) -> &BTreeSet<usize> {
        &self.clicked
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.items.iter().position(|it| it.hovered)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn lights(&self) -> Lights {
        self.lights
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }
}

/// Per-item breathing phase in `[-1, 1]`; neighbours are one radian apart.
#[inline]
pub fn breath_wave(time_ms: f64, index: usize) -> f32 {
    (time_ms * BREATH_RATE_PER_MS + index as f64).sin() as f32
}
