//! Toolbar action requests delivered to the canvas host.
//!
//! DESIGN
//! ======
//! The toolbar never touches the engine. Each action bumps a sequence
//! counter; the canvas host watches the counters in an effect and runs the
//! matching engine operation once per bump. Counters only grow, so a
//! repeated action is always observed as a fresh change.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

/// Monotonic action counters bumped by the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionRequests {
    pub undo_seq: u64,
    pub redo_seq: u64,
    pub clear_seq: u64,
    pub save_seq: u64,
}

impl ActionRequests {
    pub fn request_undo(&mut self) {
        self.undo_seq += 1;
    }

    pub fn request_redo(&mut self) {
        self.redo_seq += 1;
    }

    pub fn request_clear(&mut self) {
        self.clear_seq += 1;
    }

    pub fn request_save(&mut self) {
        self.save_seq += 1;
    }
}
