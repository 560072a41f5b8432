//! Ordered drawable list with selection and gesture state.
//!
//! [`Canvas`] is the machinery both controllers share: the z-ordered list,
//! the click/marquee selection state machine, drag and nudge arithmetic,
//! and the selection-scoped edits. The controllers add their tool sets and
//! decide what a finished drawing gesture creates.
//!
//! Everything here runs on the thread that delivers input and paints frames;
//! there is no internal locking.

use crate::geometry::PATH_TOLERANCE;
use crate::selection::Selection;
use crate::shapes::Drawable;
use crate::style::{Rgba, StyleChange};
use crate::surface::{DASH_PATTERN, Surface};
use crate::tools::{Direction, Gesture, GesturePhase};
use kurbo::{Point, Rect, Shape as _, Stroke};

/// Pen width of the selection overlay.
pub const OVERLAY_WIDTH: f64 = 2.0;

/// A z-ordered collection of drawables plus its interaction state.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// Back to front: later entries paint on top.
    drawables: Vec<Drawable>,
    selection: Selection,
    gesture: Gesture,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn get(&self, index: usize) -> Option<&Drawable> {
        self.drawables.get(index)
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The drawable picked by the last click, if any.
    pub fn selected(&self) -> Option<&Drawable> {
        self.selection.single().and_then(|index| self.drawables.get(index))
    }

    /// Append on top of the z-order and make it the single selection.
    pub fn push(&mut self, drawable: Drawable) -> usize {
        log::debug!("created {} at {:?}", drawable.shape().kind_name(), drawable.frame().corner);
        self.drawables.push(drawable);
        let index = self.drawables.len() - 1;
        self.selection = Selection::Single(index);
        index
    }

    /// Drop the selection and abandon any gesture in progress.
    pub fn deselect(&mut self) {
        self.selection.clear();
        self.gesture.end();
    }

    /// Start a drawing gesture at `point`.
    pub fn begin_drawing(&mut self, point: Point) {
        self.gesture.begin(GesturePhase::Drawing, point);
    }

    /// Click selection.
    ///
    /// The list is scanned from the bottom of the z-order up and the first
    /// hit wins, so an item painted underneath beats the one covering it.
    /// A hit starts a drag; a miss clears the selection and starts a marquee.
    pub fn select_at(&mut self, point: Point) -> Option<usize> {
        let hit = self
            .drawables
            .iter_mut()
            .position(|drawable| drawable.hit_test(point));

        match hit {
            Some(index) => {
                self.selection = Selection::Single(index);
                self.gesture.begin(GesturePhase::Dragging, point);
                log::debug!("picked item {index} at {point:?}");
            }
            None => {
                self.selection.clear();
                self.gesture.begin(GesturePhase::Marquee, point);
                log::debug!("marquee started at {point:?}");
            }
        }
        hit
    }

    /// Pointer motion. Drawing and marquee gestures only track the pointer;
    /// a drag moves the picked item immediately unless it is locked.
    pub fn pointer_moved(&mut self, point: Point) {
        match self.gesture.phase {
            GesturePhase::Drawing | GesturePhase::Marquee => self.gesture.update(point),
            GesturePhase::Dragging => {
                if let Some(drawable) = self
                    .selection
                    .single()
                    .and_then(|index| self.drawables.get_mut(index))
                {
                    if !drawable.is_locked() {
                        drawable.translate_to(point);
                    }
                }
            }
            GesturePhase::Idle => {}
        }
    }

    /// Pointer release. Returns the phase that just ended.
    ///
    /// A finished marquee selects every drawable strictly inside it. A
    /// finished drawing gesture leaves `origin`/`current` on the gesture for
    /// the caller to build the new drawable from.
    pub fn pointer_released(&mut self, point: Point) -> GesturePhase {
        let phase = self.gesture.phase;
        match phase {
            GesturePhase::Drawing => self.gesture.update(point),
            GesturePhase::Marquee => {
                self.gesture.update(point);
                self.finish_marquee();
            }
            GesturePhase::Dragging | GesturePhase::Idle => {}
        }
        self.gesture.end();
        phase
    }

    /// Region-tests against `origin` as top-left and `current` as
    /// bottom-right, unnormalized: a marquee dragged up or left encloses
    /// nothing.
    fn finish_marquee(&mut self) {
        let Gesture {
            origin, current, ..
        } = self.gesture;
        let enclosed: Vec<usize> = self
            .drawables
            .iter_mut()
            .enumerate()
            .filter_map(|(index, drawable)| drawable.region_test(origin, current).then_some(index))
            .collect();
        log::debug!("marquee {origin:?}..{current:?} selected {} item(s)", enclosed.len());
        self.selection = Selection::multi(enclosed);
    }

    /// Move every unlocked selected item one unit. When anything moved the
    /// marquee rectangle follows, so the overlay stays around the group.
    pub fn nudge(&mut self, direction: Direction) -> bool {
        let delta = direction.delta();
        let mut moved = false;
        for index in self.selection.indices() {
            if let Some(drawable) = self.drawables.get_mut(index) {
                if drawable.is_locked() {
                    continue;
                }
                let to = drawable.anchor() + delta;
                drawable.translate_to(to);
                moved = true;
            }
        }
        if moved {
            self.gesture.shift(delta);
        }
        moved
    }

    /// Push a style edit into every unlocked selected item.
    pub fn restyle(&mut self, change: StyleChange) -> usize {
        let mut changed = 0;
        for index in self.selection.indices() {
            let Some(drawable) = self.drawables.get_mut(index) else {
                continue;
            };
            if drawable.is_locked() {
                continue;
            }
            match change {
                StyleChange::Color(color) => drawable.set_color(color),
                StyleChange::Width(width) => drawable.set_width(width),
                StyleChange::Fill(filled) => drawable.set_fill(filled),
            }
            changed += 1;
        }
        changed
    }

    /// Set or clear the lock flag on every selected item.
    pub fn set_locked(&mut self, locked: bool) {
        for index in self.selection.indices() {
            if let Some(drawable) = self.drawables.get_mut(index) {
                drawable.set_locked(locked);
            }
        }
    }

    /// Remove the unlocked selected items. Returns how many were removed.
    ///
    /// A multi-selection is dropped only when something was removed; if
    /// every member is locked it stays as it was.
    pub fn delete_selected(&mut self) -> usize {
        let removable: Vec<usize> = self
            .selection
            .indices()
            .into_iter()
            .filter(|&index| {
                self.drawables
                    .get(index)
                    .is_some_and(|drawable| !drawable.is_locked())
            })
            .collect();
        if removable.is_empty() {
            return 0;
        }

        for &index in removable.iter().rev() {
            self.drawables.remove(index);
        }
        self.selection.remove(&removable);
        if self.selection.is_multi() {
            self.selection.clear();
        }
        log::debug!("deleted {} item(s)", removable.len());
        removable.len()
    }

    /// Swap the single selection with the item above it.
    pub fn bring_forward(&mut self) -> bool {
        match self.selection.single() {
            Some(index) if index + 1 < self.drawables.len() => self.swap_selected(index, index + 1),
            _ => false,
        }
    }

    /// Swap the single selection with the item below it.
    pub fn send_backward(&mut self) -> bool {
        match self.selection.single() {
            Some(index) if index > 0 => self.swap_selected(index, index - 1),
            _ => false,
        }
    }

    fn swap_selected(&mut self, index: usize, neighbor: usize) -> bool {
        if self.drawables[index].is_locked() {
            return false;
        }
        self.drawables.swap(index, neighbor);
        self.selection.swap(index, neighbor);
        log::debug!("moved item {index} to layer {neighbor}");
        true
    }

    /// Drop every drawable and reset selection and gesture.
    pub fn clear(&mut self) {
        self.drawables.clear();
        self.selection.clear();
        self.gesture = Gesture::default();
    }

    /// The rectangle the overlay outlines, if any: the single selection's
    /// bounds, else the marquee while it is dragged or while it still holds
    /// a multi-selection.
    pub fn overlay_rect(&self) -> Option<Rect> {
        if let Some(selected) = self.selected() {
            Some(selected.bounds())
        } else if self.gesture.is(GesturePhase::Marquee) || self.selection.is_multi() {
            Some(self.gesture.rect())
        } else {
            None
        }
    }

    /// Paint stored drawables back to front.
    pub fn render_content(&self, surface: &mut dyn Surface) {
        for drawable in &self.drawables {
            drawable.render(surface);
        }
    }

    /// Paint the dashed selection outline.
    pub fn render_overlay(&self, surface: &mut dyn Surface) {
        let Some(rect) = self.overlay_rect() else {
            return;
        };
        let stroke = Stroke::new(OVERLAY_WIDTH).with_dashes(0.0, DASH_PATTERN);
        surface.stroke(&rect.to_path(PATH_TOLERANCE), &stroke, Rgba::selection().into());
    }
}
