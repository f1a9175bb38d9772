//! Drag-and-drop file intake.
//!
//! Each drop zone owns its own highlight state and file selection, so
//! multiple zones on one page cannot collide. A successful drop assigns the
//! file to the zone's selection and queues a synthesized change event, making
//! the downstream path (image preview, form state) identical to a manual
//! picker selection.

use crate::notifications::NotificationCenter;
use crate::upload::{self, FileMetadata};

/// Visual state of the zone during a drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    #[default]
    Idle,
    /// A drag is hovering the zone and it is marked active
    DragOver,
}

/// One designated page region accepting drag-and-drop file input.
#[derive(Debug, Default)]
pub struct DropZone {
    state: DropZoneState,
    selection: Option<FileMetadata>,
    pending_change: Option<FileMetadata>,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag-over: suppress default handling and mark the zone active.
    pub fn drag_over(&mut self) {
        self.state = DropZoneState::DragOver;
    }

    /// Drag-leave: unmark the zone.
    pub fn drag_leave(&mut self) {
        self.state = DropZoneState::Idle;
    }

    /// Drop: unmark the zone, validate the first dropped file, and on
    /// acceptance take it as the selection and queue a change event.
    /// Returns true when the file was accepted.
    pub fn drop_files(
        &mut self,
        files: Vec<FileMetadata>,
        notifications: &mut NotificationCenter,
    ) -> bool {
        self.state = DropZoneState::Idle;

        let Some(file) = files.into_iter().next() else {
            return false;
        };
        if !upload::validate(&file, notifications) {
            return false;
        }

        self.selection = Some(file.clone());
        self.pending_change = Some(file);
        true
    }

    /// Manual picker selection: the input already holds the file, so it
    /// becomes the selection unconditionally; validation only decides whether
    /// a rejection notification is shown. Returns the validation verdict.
    pub fn pick(&mut self, file: FileMetadata, notifications: &mut NotificationCenter) -> bool {
        let accepted = upload::validate(&file, notifications);
        self.selection = Some(file.clone());
        self.pending_change = Some(file);
        accepted
    }

    /// Drain the synthesized change event, if one is queued.
    pub fn take_change(&mut self) -> Option<FileMetadata> {
        self.pending_change.take()
    }

    pub fn is_drag_over(&self) -> bool {
        self.state == DropZoneState::DragOver
    }

    pub fn selection(&self) -> Option<&FileMetadata> {
        self.selection.as_ref()
    }
}
