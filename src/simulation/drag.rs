//! Drag gesture on the primary body
//!
//! The host forwards cursor events in scene coordinates. A press inside
//! the primary grabs it; while grabbed, every cursor move queues a position
//! override on the engine, which the next step applies.

use super::engine::Engine;
use super::states::{NVec2, Registry};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    offset: Option<NVec2>, // primary position minus cursor at grab time
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }

    /// Start a drag if `cursor` is on the primary. Returns whether it grabbed.
    pub fn press(&mut self, reg: &Registry, cursor: NVec2) -> bool {
        let Some(primary) = reg.primary() else {
            return false;
        };
        if (cursor - primary.x).norm() > primary.radius {
            return false;
        }
        self.offset = Some(primary.x - cursor);
        log::debug!("drag start on body {}", primary.id.0);
        true
    }

    /// Queue the dragged position for the next step
    pub fn moved(&self, engine: &mut Engine, cursor: NVec2) {
        if let Some(offset) = self.offset {
            engine.queue_override(cursor + offset);
        }
    }

    pub fn release(&mut self) {
        if self.offset.take().is_some() {
            log::debug!("drag end");
        }
    }
}
