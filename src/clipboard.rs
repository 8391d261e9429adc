//! # Clipboard
//!
//! Write-only access to the system clipboard.
//!
//! [`SystemClipboard`] prefers the platform's clipboard command
//! (`pbcopy`, `clip`, `wl-copy`, `xclip`/`xsel`) and falls back to the
//! OSC 52 escape sequence, which most modern terminals (and tmux with
//! `set-clipboard on`) turn into a clipboard write:
//!
//! ```text
//! ESC ] 52 ; c ; <base64 payload> BEL
//! ```
//!
//! [`MemoryClipboard`] records writes in memory for tests.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::cell::RefCell;
use std::env;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::rc::Rc;
use tracing::debug;

/// Common OSC 52 size limit (base64 payload bytes)
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

/// Clipboard errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    PayloadTooLarge(usize),
    WriteError(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "clipboard not available"),
            Self::PayloadTooLarge(len) => write!(
                f,
                "OSC 52 payload too large ({} > {})",
                len, MAX_OSC52_PAYLOAD
            ),
            Self::WriteError(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// A place copied text goes to. Each write replaces the previous content.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// External clipboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalBackend {
    MacOS,
    Windows,
    Wayland,
    X11,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBackend {
    External(ExternalBackend),
    Osc52,
}

/// The clipboard of the machine the user is sitting at
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    backend: ClipboardBackend,
}

impl SystemClipboard {
    /// Pick the first available clipboard command, or OSC 52
    pub fn detect() -> Self {
        let backend = detect_external_backend()
            .map_or(ClipboardBackend::Osc52, ClipboardBackend::External);
        debug!(?backend, "clipboard backend selected");
        Self { backend }
    }

    /// Always use OSC 52
    pub fn osc52() -> Self {
        Self {
            backend: ClipboardBackend::Osc52,
        }
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.backend {
            ClipboardBackend::External(backend) => set_external(backend, text),
            ClipboardBackend::Osc52 => write_osc52(&mut io::stdout(), text),
        }
    }
}

/// Build the OSC 52 sequence that sets the clipboard to `text`
pub fn osc52_sequence(text: &str) -> Result<String, ClipboardError> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        return Err(ClipboardError::PayloadTooLarge(encoded.len()));
    }
    Ok(format!("\x1b]52;c;{encoded}\x07"))
}

fn write_osc52(writer: &mut impl Write, text: &str) -> Result<(), ClipboardError> {
    let seq = osc52_sequence(text)?;
    writer
        .write_all(seq.as_bytes())
        .map_err(|e| ClipboardError::WriteError(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| ClipboardError::WriteError(e.to_string()))
}

fn detect_external_backend() -> Option<ExternalBackend> {
    [
        ExternalBackend::MacOS,
        ExternalBackend::Windows,
        ExternalBackend::Wayland,
        ExternalBackend::X11,
    ]
    .into_iter()
    .find(|&backend| external_backend_available(backend))
}

fn external_backend_available(backend: ExternalBackend) -> bool {
    match backend {
        ExternalBackend::MacOS => cfg!(target_os = "macos") && command_exists("pbcopy"),
        ExternalBackend::Windows => cfg!(target_os = "windows") && command_exists("clip"),
        ExternalBackend::Wayland => {
            env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy")
        }
        ExternalBackend::X11 => {
            env::var_os("DISPLAY").is_some()
                && (command_exists("xclip") || command_exists("xsel"))
        }
    }
}

fn command_exists(command: &str) -> bool {
    if command.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(command).is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(target_os = "windows") && dir.join(format!("{command}.exe")).is_file())
    })
}

fn set_external(backend: ExternalBackend, text: &str) -> Result<(), ClipboardError> {
    match backend {
        ExternalBackend::MacOS => run_command_with_input("pbcopy", &[], text),
        ExternalBackend::Windows => run_command_with_input("clip", &[], text),
        ExternalBackend::Wayland => run_command_with_input("wl-copy", &[], text),
        ExternalBackend::X11 => run_command_with_input("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| run_command_with_input("xsel", &["--clipboard", "--input"], text)),
    }
}

fn run_command_with_input(cmd: &str, args: &[&str], content: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| ClipboardError::WriteError(format!("{cmd}: {err}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(content.as_bytes()) {
            // The child may still be waiting on input; don't leave it behind
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(ClipboardError::WriteError(format!("{cmd}: {err}")));
        }
    }

    let status = child
        .wait()
        .map_err(|err| ClipboardError::WriteError(err.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::WriteError(format!(
            "clipboard command failed: {cmd}"
        )))
    }
}

/// In-memory clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    inner: Rc<RefCell<MemoryContents>>,
}

#[derive(Debug, Default)]
struct MemoryContents {
    text: Option<String>,
    writes: usize,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write
    pub fn unavailable() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryContents {
                unavailable: true,
                ..MemoryContents::default()
            })),
        }
    }

    pub fn text(&self) -> Option<String> {
        self.inner.borrow().text.clone()
    }

    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(ClipboardError::NotAvailable);
        }
        inner.text = Some(text.to_string());
        inner.writes += 1;
        Ok(())
    }
}
