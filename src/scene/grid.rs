//! Sparse lattice of placed blocks.
//!
//! Blocks are keyed by their snapped lattice cell, so at most one block
//! exists per cell and repeated clicks on the same cell never stack
//! duplicates. Removal is by block identity, since that is what a pick
//! hit reports.

use std::collections::hash_map::Values;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::options::GridOptions;
use crate::scene::Material;

/// Stable identity of a placed block. Never reused within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl BlockId {
    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Canonical lattice coordinate of a cell, in cell units.
///
/// `layer` is always 0 unless the grid allows stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Cell index along X.
    pub x: i32,
    /// Vertical cell index (0 rests on the ground).
    pub layer: i32,
    /// Cell index along Z.
    pub z: i32,
}

/// A block owned by the [`PlacementGrid`]. Immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBlock {
    /// Identity reported by picking.
    pub id: BlockId,
    /// Cell the block occupies.
    pub key: CellKey,
    /// Material chosen at placement time.
    pub material: Material,
    /// World-space center.
    pub position: Vec3,
    /// Edge length.
    pub size: f32,
}

impl PlacedBlock {
    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = Vec3::splat(self.size * 0.5);
        (self.position - half, self.position + half)
    }
}

/// Round half up, the way the pointer math has always snapped
/// (`-0.5` goes to `0`, not `-1`).
fn snap(value: f32, cell_size: f32) -> i32 {
    (value / cell_size + 0.5).floor() as i32
}

/// Mapping from lattice cell to placed block.
#[derive(Debug, Clone)]
pub struct PlacementGrid {
    cell_size: f32,
    stacking: bool,
    blocks: FxHashMap<CellKey, PlacedBlock>,
    next_id: u64,
}

impl Default for PlacementGrid {
    fn default() -> Self {
        Self::from(&GridOptions::default())
    }
}

impl From<&GridOptions> for PlacementGrid {
    fn from(options: &GridOptions) -> Self {
        Self::new(options.cell_size, options.stacking)
    }
}

impl PlacementGrid {
    /// Create an empty grid. Non-positive cell sizes fall back to 1.
    pub fn new(cell_size: f32, stacking: bool) -> Self {
        Self {
            cell_size: sanitize_cell_size(cell_size),
            stacking,
            blocks: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Edge length of one cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether blocks may occupy layers above the ground.
    pub fn stacking(&self) -> bool {
        self.stacking
    }

    /// Change lattice geometry. Only allowed while empty, since existing
    /// keys would no longer be canonical; returns `false` otherwise.
    pub fn reconfigure(&mut self, cell_size: f32, stacking: bool) -> bool {
        let cell_size = sanitize_cell_size(cell_size);
        if cell_size == self.cell_size && stacking == self.stacking {
            return true;
        }
        if !self.blocks.is_empty() {
            return false;
        }
        self.cell_size = cell_size;
        self.stacking = stacking;
        true
    }

    /// Number of placed blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks are placed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate placed blocks in no particular order.
    pub fn iter(&self) -> Values<'_, CellKey, PlacedBlock> {
        self.blocks.values()
    }

    /// Block occupying `key`, if any.
    pub fn get(&self, key: CellKey) -> Option<&PlacedBlock> {
        self.blocks.get(&key)
    }

    /// Block with identity `id`, if still placed.
    pub fn find(&self, id: BlockId) -> Option<&PlacedBlock> {
        self.blocks.values().find(|block| block.id == id)
    }

    /// Snap a world point to its canonical cell.
    pub fn cell_key(&self, point: Vec3) -> CellKey {
        let layer = if self.stacking {
            ((point.y / self.cell_size).floor() as i32).max(0)
        } else {
            0
        };
        CellKey {
            x: snap(point.x, self.cell_size),
            layer,
            z: snap(point.z, self.cell_size),
        }
    }

    /// World-space center of the block in `key`: on the lattice
    /// horizontally, raised half a cell so it rests on the layer below.
    pub fn cell_center(&self, key: CellKey) -> Vec3 {
        let size = self.cell_size;
        Vec3::new(
            key.x as f32 * size,
            key.layer as f32 * size + size * 0.5,
            key.z as f32 * size,
        )
    }

    /// Place a block in the cell containing `point`.
    ///
    /// Returns `None` without changing anything when the cell is already
    /// occupied.
    pub fn place(&mut self, point: Vec3, material: Material) -> Option<BlockId> {
        let key = self.cell_key(point);
        if self.blocks.contains_key(&key) {
            return None;
        }

        let id = BlockId(self.next_id);
        self.next_id += 1;
        let block = PlacedBlock {
            id,
            key,
            material,
            position: self.cell_center(key),
            size: self.cell_size,
        };
        let _ = self.blocks.insert(key, block);
        Some(id)
    }

    /// Remove the block with identity `id`. Returns the removed block, or
    /// `None` if no such block is placed.
    pub fn remove(&mut self, id: BlockId) -> Option<PlacedBlock> {
        let key = self
            .blocks
            .iter()
            .find_map(|(key, block)| (block.id == id).then_some(*key))?;
        self.blocks.remove(&key)
    }

    /// Point half a cell out from `hit_point` along `face_normal`: inside
    /// the neighboring cell across the clicked face.
    pub fn adjacent_target(&self, hit_point: Vec3, face_normal: Vec3) -> Vec3 {
        hit_point + face_normal * (self.cell_size * 0.5)
    }

    /// Place a block in the cell across the clicked face of an existing
    /// block.
    pub fn place_adjacent_to_face(
        &mut self,
        hit_point: Vec3,
        face_normal: Vec3,
        material: Material,
    ) -> Option<BlockId> {
        self.place(self.adjacent_target(hit_point, face_normal), material)
    }
}

impl<'a> IntoIterator for &'a PlacementGrid {
    type Item = &'a PlacedBlock;
    type IntoIter = Values<'a, CellKey, PlacedBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn sanitize_cell_size(cell_size: f32) -> f32 {
    if cell_size.is_finite() && cell_size > 0.0 {
        cell_size
    } else {
        1.0
    }
}
