//! Edit session state machine
//!
//! A session is a cursor into one layer's item list. Each directional step
//! inserts a synthetic travel record after the tip; stepping straight back
//! removes it again.

use layerkit_core::{LayerItem, MotionClass, Move, StructureError};
use serde::Serialize;

use crate::delta_stack::{Delta, DeltaStack};
use crate::error::{EditorError, EditorResult};

/// Absolute position of the session tip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipCoords {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl TipCoords {
    fn of(items: &[LayerItem], index: usize) -> EditorResult<Self> {
        let item = items.get(index).ok_or(StructureError::ItemOutOfRange {
            index,
            len: items.len(),
        })?;
        match item.as_move() {
            Some(Move {
                x: Some(x),
                y: Some(y),
                z,
                ..
            }) => Ok(Self {
                x: *x,
                y: *y,
                z: *z,
            }),
            _ => Err(EditorError::NotAMove { index }),
        }
    }
}

/// Outcome of one applied delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// A synthetic record was inserted at this item index
    Pushed(usize),
    /// The synthetic record at this item index was removed
    Popped(usize),
}

/// Active edit session on one layer
#[derive(Debug, Clone)]
pub struct EditSession {
    origin_index: usize,
    tip_index: usize,
    tip_coords: TipCoords,
    deltas: DeltaStack,
    lift: f64,
}

impl EditSession {
    /// Start a session anchored at `origin_index`, which must hold a
    /// motion record with an XY position
    pub fn begin(items: &[LayerItem], origin_index: usize, lift: f64) -> EditorResult<Self> {
        let tip_coords = TipCoords::of(items, origin_index)?;
        tracing::debug!(origin = origin_index, "Edit session started");
        Ok(Self {
            origin_index,
            tip_index: origin_index,
            tip_coords,
            deltas: DeltaStack::new(),
            lift,
        })
    }

    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    pub fn tip_index(&self) -> usize {
        self.tip_index
    }

    pub fn tip_coords(&self) -> TipCoords {
        self.tip_coords
    }

    pub fn applied_deltas(&self) -> &[Delta] {
        self.deltas.as_slice()
    }

    /// Height each inserted record climbs above the tip
    pub fn lift(&self) -> f64 {
        self.lift
    }

    /// Number of synthetic records currently inserted by this session
    pub fn depth(&self) -> usize {
        self.deltas.len()
    }

    /// Apply one displacement to the tip
    ///
    /// A delta that inverts the most recent one removes the synthetic record
    /// at the tip. Anything else inserts a new non-depositing record after it.
    pub fn apply_delta(
        &mut self,
        items: &mut Vec<LayerItem>,
        delta: Delta,
    ) -> EditorResult<SessionStep> {
        if self.tip_index >= items.len() {
            return Err(StructureError::ItemOutOfRange {
                index: self.tip_index,
                len: items.len(),
            }
            .into());
        }

        if self.deltas.undoes_last(delta) && self.tip_is_detour(items) {
            return self.pop(items);
        }
        self.push(items, delta)
    }

    fn tip_is_detour(&self, items: &[LayerItem]) -> bool {
        self.tip_index > self.origin_index
            && items[self.tip_index].as_move().is_some_and(|mv| {
                mv.is_synthesized() && mv.motion_class == MotionClass::EditTravel
            })
    }

    fn pop(&mut self, items: &mut Vec<LayerItem>) -> EditorResult<SessionStep> {
        let removed_at = self.tip_index;
        items.remove(removed_at);
        self.deltas.pop();
        self.tip_index -= 1;
        self.tip_coords = TipCoords::of(items, self.tip_index)?;
        tracing::debug!(index = removed_at, depth = self.deltas.len(), "Detour step undone");
        Ok(SessionStep::Popped(removed_at))
    }

    fn push(&mut self, items: &mut Vec<LayerItem>, delta: Delta) -> EditorResult<SessionStep> {
        let tip_e = items[self.tip_index].as_move().and_then(|mv| mv.e);
        let x = self.tip_coords.x + delta.dx;
        let y = self.tip_coords.y + delta.dy;
        let z = self.tip_coords.z.map(|z| z + self.lift);

        let detour = Move {
            x: Some(x),
            y: Some(y),
            z,
            e: tip_e,
            motion_class: MotionClass::EditTravel,
            source_index: None,
            annotation: None,
        };

        let inserted_at = self.tip_index + 1;
        items.insert(inserted_at, detour.into());
        self.tip_index = inserted_at;
        self.tip_coords = TipCoords { x, y, z };
        self.deltas.push(delta);
        tracing::debug!(index = inserted_at, x, y, depth = self.deltas.len(), "Detour step inserted");
        Ok(SessionStep::Pushed(inserted_at))
    }
}
