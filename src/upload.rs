//! Upload policy validation.
//!
//! Client-side pre-flight check mirroring the server's upload policy: a
//! 16 MiB size ceiling and a fixed media-type allow-list. Rejections surface
//! as a danger notification; nothing propagates.

use crate::constants::MAX_UPLOAD_BYTES;
use crate::notifications::{NotificationCenter, Severity};
use serde::Serialize;

/// Media types accepted for upload.
pub const ALLOWED_MIME_TYPES: [&str; 8] = [
    "text/plain",
    "text/markdown",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/svg+xml",
    "application/pdf",
];

/// A selected file as the page sees it: name, byte size, declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileMetadata {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// True for any `image/*` media type, the preview-card criterion.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Why a file was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooLarge,
    UnsupportedType,
}

impl RejectReason {
    /// The user-facing rejection message.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::TooLarge => "File size must be less than 16MB",
            RejectReason::UnsupportedType => "File type not supported",
        }
    }
}

/// Pure policy check. Size is tested before type, so an oversized archive
/// reports the size problem.
pub fn check(file: &FileMetadata) -> Result<(), RejectReason> {
    if file.size > MAX_UPLOAD_BYTES {
        return Err(RejectReason::TooLarge);
    }
    if !ALLOWED_MIME_TYPES.contains(&file.mime.as_str()) {
        return Err(RejectReason::UnsupportedType);
    }
    Ok(())
}

/// Validate a file against the upload policy, announcing rejections with a
/// danger notification. Accepted files produce no notification.
pub fn validate(file: &FileMetadata, notifications: &mut NotificationCenter) -> bool {
    match check(file) {
        Ok(()) => true,
        Err(reason) => {
            tracing::info!(
                name = %file.name,
                size = file.size,
                mime = %file.mime,
                "rejected upload: {:?}",
                reason
            );
            notifications.show(reason.message(), Severity::Danger);
            false
        }
    }
}
