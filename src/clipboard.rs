//! Copy-to-clipboard with a fallback path.
//!
//! The manager prefers its primary backend and falls back to a secondary one
//! if the primary is unavailable or fails, reporting the outcome with a
//! notification either way. Failures never propagate past the notification.

use crate::notifications::{NotificationCenter, Severity};
use std::io::Write as _;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No usable clipboard mechanism on this host
    #[error("clipboard unavailable")]
    Unavailable,

    /// Spawning or feeding the copy helper failed
    #[error("clipboard io error: {0}")]
    Io(#[from] std::io::Error),

    /// The copy helper ran but reported failure
    #[error("copy command exited with {0}")]
    CommandFailed(std::process::ExitStatus),
}

/// One way of writing text to a clipboard.
pub trait ClipboardBackend {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(target_os = "macos")]
const PLATFORM_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const PLATFORM_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_COMMANDS: &[&[&str]] = &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];

/// Platform clipboard via the standard helper utility, fed over stdin.
#[derive(Debug)]
pub struct SystemClipboard {
    commands: &'static [&'static [&'static str]],
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            commands: PLATFORM_COMMANDS,
        }
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit helper command list instead of the platform default.
    pub fn with_commands(commands: &'static [&'static [&'static str]]) -> Self {
        Self { commands }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_err = ClipboardError::Unavailable;
        for candidate in self.commands {
            let (program, args) = (candidate[0], &candidate[1..]);
            let mut child = match Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) => {
                    last_err = e.into();
                    continue;
                }
            };
            // Take the handle so the pipe closes before waiting; the helper
            // reads until EOF.
            if let Some(mut stdin) = child.stdin.take() {
                if let Err(e) = stdin.write_all(text.as_bytes()) {
                    // The helper must be reaped even when feeding it failed,
                    // or the child lingers as a zombie.
                    let _ = child.kill();
                    let _ = child.wait();
                    last_err = e.into();
                    continue;
                }
            }
            let status = child.wait()?;
            if status.success() {
                return Ok(());
            }
            last_err = ClipboardError::CommandFailed(status);
        }
        Err(last_err)
    }
}

/// In-process clipboard buffer. The last-resort fallback, and the test
/// double: the copied text stays observable on the struct.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Primary-then-fallback clipboard writer.
pub struct Clipboard {
    primary: Option<Box<dyn ClipboardBackend>>,
    fallback: Box<dyn ClipboardBackend>,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(
            Some(Box::new(SystemClipboard::new())),
            Box::new(MemoryClipboard::new()),
        )
    }
}

impl Clipboard {
    pub fn new(
        primary: Option<Box<dyn ClipboardBackend>>,
        fallback: Box<dyn ClipboardBackend>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Copy `text`, preferring the primary backend. Success or failure is
    /// reported via a notification; returns true when a backend accepted the
    /// text.
    pub fn copy(&mut self, text: &str, notifications: &mut NotificationCenter) -> bool {
        if let Some(primary) = self.primary.as_mut() {
            match primary.write_text(text) {
                Ok(()) => {
                    notifications.show("Copied to clipboard", Severity::Success);
                    return true;
                }
                Err(e) => {
                    tracing::debug!("primary clipboard failed, using fallback: {e}");
                }
            }
        }
        match self.fallback.write_text(text) {
            Ok(()) => {
                notifications.show("Copied to clipboard", Severity::Success);
                true
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                notifications.show("Failed to copy to clipboard", Severity::Danger);
                false
            }
        }
    }
}
