//! Per-layer editors and the workspace that owns them

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use layerkit_core::{
    move_item_index, Document, LayerItem, Move, MoveView, PendingEdits, StructureError,
};
use serde::{Deserialize, Serialize};

use crate::delta_stack::Delta;
use crate::direction::Direction;
use crate::error::{EditorError, EditorResult};
use crate::session::{EditSession, SessionStep};
use crate::view::{session_color, MarkerStyle, Rgba, ViewerInstance};

/// Tunables for directional editing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Length of one direction-pad step
    pub step_size: f64,
    /// Z climb of each inserted detour record over the record it leaves
    pub lift_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            step_size: 2.0,
            lift_height: 1.0,
        }
    }
}

fn item_index_of_move(items: &[LayerItem], ordinal: usize) -> EditorResult<usize> {
    move_item_index(items, ordinal).map_err(EditorError::from_structure)
}

/// Working copy of one layer's items, with at most one active session
#[derive(Debug, Clone)]
pub struct LayerEditor {
    layer_index: usize,
    items: Vec<LayerItem>,
    session: Option<EditSession>,
    config: EditorConfig,
    instance: ViewerInstance,
    sessions_started: usize,
    modified: bool,
}

impl LayerEditor {
    pub fn new(
        layer_index: usize,
        items: Vec<LayerItem>,
        config: EditorConfig,
        instance: ViewerInstance,
    ) -> Self {
        Self {
            layer_index,
            items,
            session: None,
            config,
            instance,
            sessions_started: 0,
            modified: false,
        }
    }

    pub fn layer_index(&self) -> usize {
        self.layer_index
    }

    pub fn items(&self) -> &[LayerItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LayerItem> {
        self.items
    }

    /// Flat views of every motion record in the working copy
    pub fn move_views(&self) -> Vec<MoveView> {
        self.items
            .iter()
            .filter_map(LayerItem::as_move)
            .map(Move::to_view)
            .collect()
    }

    pub fn move_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_move()).count()
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    pub fn instance(&self) -> ViewerInstance {
        self.instance
    }

    pub fn marker_style(&self) -> MarkerStyle {
        self.instance.marker_style()
    }

    /// Palette color of the current (or most recent) session
    pub fn session_color(&self) -> Option<Rgba> {
        self.sessions_started.checked_sub(1).map(session_color)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session at the `ordinal`-th motion record
    pub fn begin_session(&mut self, ordinal: usize) -> EditorResult<&EditSession> {
        let index = item_index_of_move(&self.items, ordinal)?;
        self.begin_session_at(index)
    }

    /// Start a session at an item position
    pub fn begin_session_at(&mut self, item_index: usize) -> EditorResult<&EditSession> {
        if self.session.is_some() {
            return Err(EditorError::SessionAlreadyActive {
                layer: self.layer_index,
            });
        }
        let session = EditSession::begin(&self.items, item_index, self.config.lift_height)?;
        self.sessions_started += 1;
        tracing::info!(
            layer = self.layer_index,
            item = item_index,
            "Editing enabled"
        );
        Ok(&*self.session.insert(session))
    }

    /// End the active session; inserted records stay in the items
    pub fn end_session(&mut self) -> EditorResult<EditSession> {
        let session = self.session.take().ok_or(EditorError::NoActiveSession)?;
        tracing::info!(
            layer = self.layer_index,
            detour = session.depth(),
            "Editing disabled"
        );
        Ok(session)
    }

    /// Flip editing on (at `ordinal`) or off; returns whether editing is now on
    pub fn toggle(&mut self, ordinal: usize) -> EditorResult<bool> {
        if self.session.is_some() {
            self.end_session()?;
            Ok(false)
        } else {
            self.begin_session(ordinal)?;
            Ok(true)
        }
    }

    /// Apply one direction-pad press
    pub fn nudge(&mut self, direction: Direction) -> EditorResult<SessionStep> {
        self.apply_delta(direction.delta(self.config.step_size))
    }

    pub fn apply_delta(&mut self, delta: Delta) -> EditorResult<SessionStep> {
        let session = self.session.as_mut().ok_or(EditorError::NoActiveSession)?;
        let step = session.apply_delta(&mut self.items, delta)?;
        self.modified = true;
        Ok(step)
    }

    /// Remove the `ordinal`-th motion record
    ///
    /// Rejected while a session is active, since its cursor indexes the items.
    pub fn delete_move(&mut self, ordinal: usize) -> EditorResult<Move> {
        if self.session.is_some() {
            return Err(EditorError::SessionAlreadyActive {
                layer: self.layer_index,
            });
        }
        let index = item_index_of_move(&self.items, ordinal)?;
        let removed = match self.items.remove(index) {
            LayerItem::Move(mv) => mv,
            LayerItem::Line(_) => return Err(EditorError::NotAMove { index }),
        };
        self.modified = true;
        tracing::debug!(layer = self.layer_index, ordinal, "Deleted move");
        Ok(removed)
    }

    /// Record the working copy as pending if it changed
    pub fn commit(&mut self, pending: &mut PendingEdits) -> bool {
        if !self.modified {
            return false;
        }
        pending.record(self.layer_index, self.items.clone());
        self.modified = false;
        true
    }
}

/// Set of open layer editors, at most one per layer
#[derive(Debug, Clone, Default)]
pub struct EditorWorkspace {
    editors: BTreeMap<usize, LayerEditor>,
    config: EditorConfig,
    opened: usize,
}

impl EditorWorkspace {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editors: BTreeMap::new(),
            config,
            opened: 0,
        }
    }

    /// Open (or return the already open) editor for a layer
    ///
    /// The working copy starts from the layer's pending edits when present,
    /// else from its parsed items.
    pub fn open(
        &mut self,
        doc: &Document,
        pending: &PendingEdits,
        layer_index: usize,
    ) -> EditorResult<&mut LayerEditor> {
        match self.editors.entry(layer_index) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let items = match pending.get(layer_index) {
                    Some(items) => items.to_vec(),
                    None => doc
                        .layer(layer_index)
                        .ok_or(StructureError::LayerNotFound {
                            index: layer_index,
                            count: doc.layer_count(),
                        })?
                        .items
                        .clone(),
                };
                let instance = ViewerInstance::from_open_count(self.opened);
                self.opened += 1;
                tracing::debug!(layer = layer_index, ?instance, "Opened layer editor");
                Ok(entry.insert(LayerEditor::new(
                    layer_index,
                    items,
                    self.config,
                    instance,
                )))
            }
        }
    }

    pub fn editor(&self, layer_index: usize) -> Option<&LayerEditor> {
        self.editors.get(&layer_index)
    }

    pub fn editor_mut(&mut self, layer_index: usize) -> Option<&mut LayerEditor> {
        self.editors.get_mut(&layer_index)
    }

    /// Layers with an open editor, ascending
    pub fn open_layers(&self) -> impl Iterator<Item = usize> + '_ {
        self.editors.keys().copied()
    }

    /// Commit and close a layer's editor; returns whether edits were recorded
    pub fn close(&mut self, layer_index: usize, pending: &mut PendingEdits) -> Option<bool> {
        let mut editor = self.editors.remove(&layer_index)?;
        Some(editor.commit(pending))
    }

    /// Commit every open editor; returns the number of layers recorded
    pub fn commit_all(&mut self, pending: &mut PendingEdits) -> usize {
        self.editors
            .values_mut()
            .map(|editor| editor.commit(pending))
            .filter(|recorded| *recorded)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerkit_core::{Layer, MotionClass};

    fn layer_items() -> Vec<LayerItem> {
        vec![
            LayerItem::from(";LAYER_CHANGE\n"),
            Move::at(0.0, 0.0).with_z(0.2).into(),
            LayerItem::from(";TYPE:Perimeter\n"),
            Move::at(5.0, 0.0)
                .with_z(0.2)
                .with_e(1.0)
                .with_class(MotionClass::Perimeter)
                .into(),
        ]
    }

    fn editor() -> LayerEditor {
        LayerEditor::new(0, layer_items(), EditorConfig::default(), ViewerInstance::First)
    }

    #[test]
    fn test_second_session_rejected() {
        let mut editor = editor();
        editor.begin_session(1).unwrap();
        assert_eq!(
            editor.begin_session(0).unwrap_err(),
            EditorError::SessionAlreadyActive { layer: 0 }
        );
        assert_eq!(editor.session().unwrap().origin_index(), 3);
    }

    #[test]
    fn test_nudge_requires_session() {
        let mut editor = editor();
        assert_eq!(
            editor.nudge(Direction::Up).unwrap_err(),
            EditorError::NoActiveSession
        );
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_toggle_and_detour() {
        let mut editor = editor();
        assert!(editor.toggle(1).unwrap());
        editor.nudge(Direction::Up).unwrap();
        editor.nudge(Direction::Right).unwrap();
        assert_eq!(editor.move_count(), 4);
        assert_eq!(editor.session_color(), Some([1.0, 0.0, 0.0, 1.0]));

        let tip = editor.session().unwrap().tip_coords();
        assert_eq!((tip.x, tip.y), (7.0, 2.0));

        assert!(!editor.toggle(1).unwrap());
        assert!(!editor.is_editing());
        assert_eq!(editor.move_count(), 4);

        editor.toggle(0).unwrap();
        assert_eq!(editor.session_color(), Some([1.0, 0.5, 0.0, 1.0]));
    }

    #[test]
    fn test_move_ordinal_out_of_range() {
        let mut editor = editor();
        assert_eq!(
            editor.begin_session(2).unwrap_err(),
            EditorError::MoveOutOfRange {
                ordinal: 2,
                count: 2
            }
        );
        assert_eq!(
            editor.begin_session_at(0).unwrap_err(),
            EditorError::NotAMove { index: 0 }
        );
    }

    #[test]
    fn test_delete_move_and_commit() {
        let mut editor = editor();
        let mut pending = PendingEdits::new();
        assert!(!editor.commit(&mut pending));

        let removed = editor.delete_move(0).unwrap();
        assert_eq!(removed.x, Some(0.0));
        assert!(editor.commit(&mut pending));
        assert_eq!(pending.get(0).map(<[LayerItem]>::len), Some(3));
        assert!(!editor.is_modified());
    }

    #[test]
    fn test_workspace_instances_and_pending_source() {
        let mut doc = Document::new();
        for index in 0..2 {
            let mut layer = Layer::new(index, Vec::new());
            layer.items = layer_items();
            doc.layers.push(layer);
            doc.layer_offsets.push(index * 4);
        }

        let mut pending = PendingEdits::new();
        pending.record(1, vec![LayerItem::from("M84\n")]);

        let mut workspace = EditorWorkspace::default();
        let first = workspace.open(&doc, &pending, 0).unwrap();
        assert_eq!(first.marker_style(), MarkerStyle::Sphere);
        first.begin_session(0).unwrap();

        let second = workspace.open(&doc, &pending, 1).unwrap();
        assert_eq!(second.instance(), ViewerInstance::Subsequent);
        assert_eq!(second.items(), &[LayerItem::from("M84\n")]);

        // reopening keeps the live editor and its session
        let again = workspace.open(&doc, &pending, 0).unwrap();
        assert!(again.is_editing());
        assert_eq!(again.instance(), ViewerInstance::First);

        assert!(matches!(
            workspace.open(&doc, &pending, 9).unwrap_err(),
            EditorError::Structure(StructureError::LayerNotFound { index: 9, count: 2 })
        ));
    }

    #[test]
    fn test_workspace_commit_all() {
        let mut doc = Document::new();
        let mut layer = Layer::new(0, Vec::new());
        layer.items = layer_items();
        doc.layers.push(layer);
        doc.layer_offsets.push(0);

        let mut pending = PendingEdits::new();
        let mut workspace = EditorWorkspace::new(EditorConfig::default());
        let editor = workspace.open(&doc, &pending, 0).unwrap();
        editor.begin_session(1).unwrap();
        editor.nudge(Direction::Left).unwrap();

        assert_eq!(workspace.commit_all(&mut pending), 1);
        assert_eq!(workspace.commit_all(&mut pending), 0);
        assert_eq!(pending.get(0).map(<[LayerItem]>::len), Some(5));
        assert_eq!(workspace.close(0, &mut pending), Some(false));
        assert_eq!(workspace.close(0, &mut pending), None);
    }
}
