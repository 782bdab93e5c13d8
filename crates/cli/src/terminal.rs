//! Terminal stand-ins for the toast surface, the router and the renderer.

use fedsaml_core::{FormView, InputKind, NavigationCommand, Navigator, Notifier, Screen};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};

/// Prints toasts as single tagged lines.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotifier {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    fn show(&self, tag: &str, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "[{tag}] {message}").and_then(|()| out.flush()) {
            warn!("Failed to write notification: {}", e);
        }
    }
}

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        self.show("success", message);
    }

    fn error(&self, message: &str) {
        self.show("error", message);
    }
}

/// Records where the screen asked to go.
///
/// A terminal has no history stack, so `Replace` and `Push` both just
/// overwrite the current location.
#[derive(Debug, Clone, Default)]
pub struct TerminalNavigator {
    current: Arc<Mutex<Option<NavigationCommand>>>,
}

impl TerminalNavigator {
    /// Most recent navigation request, if any
    #[must_use]
    pub fn current(&self) -> Option<NavigationCommand> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, command: NavigationCommand) {
        info!("Navigation: {}", command);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(command);
    }
}

/// Draw a composed screen as plain text.
pub fn render_screen<W: Write>(screen: &Screen, out: &mut W) -> io::Result<()> {
    match screen {
        Screen::LicenseRequired { message } => writeln!(out, "{message}"),
        Screen::Form(form) => render_form(form, out),
    }
}

fn render_form<W: Write>(form: &FormView, out: &mut W) -> io::Result<()> {
    writeln!(out, "<- {} ({})", form.back.label, form.back.href)?;
    writeln!(out)?;
    writeln!(out, "{}", form.heading)?;
    writeln!(out, "{}", form.description)?;
    writeln!(out)?;

    for field in &form.fields {
        let marker = if field.required { "*" } else { "" };
        let hint = match field.kind {
            InputKind::Url => " (url)",
            InputKind::Text => "",
        };
        let shown = if field.value.is_empty() {
            format!("e.g. {}", field.placeholder)
        } else {
            field.value.clone()
        };
        writeln!(out, "  {}{}{}: {}", field.label, marker, hint, shown)?;
    }

    writeln!(out)?;
    if form.submit.busy {
        writeln!(out, "[ {} ... ]", form.submit.label)?;
    } else {
        writeln!(out, "[ {} ]", form.submit.label)?;
    }
    out.flush()
}
