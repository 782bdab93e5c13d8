use crate::terminal::render_screen;
use anyhow::{Context, Result};
use fedsaml_core::{
    FederationApi, FieldKey, LicenseGate, Navigator, NewAppController, Notifier,
    SamlFederationApp, Screen, SubmitOutcome, Translator,
};
use std::io::{BufRead, Write};
use tracing::info;

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenExit {
    Created(SamlFederationApp),
    LicenseRequired,
    /// Input ended before an app was created
    Closed,
}

/// Ask for every field in display order. An empty answer keeps the
/// current value, shown in brackets; an empty field shows its placeholder
/// as an example instead. Returns `false` once input is exhausted.
pub fn prompt_fields<A, N, V, T, R, W>(
    controller: &NewAppController<A, N, V, T>,
    input: &mut R,
    out: &mut W,
) -> Result<bool>
where
    A: FederationApi,
    N: Notifier,
    V: Navigator,
    T: Translator,
    R: BufRead,
    W: Write,
{
    for key in FieldKey::ALL {
        let current = controller.draft().get(key).to_string();
        let label = controller.translator().translate(key.label_key());
        // Placeholders are hints, never values an empty answer would keep
        if current.is_empty() {
            write!(out, "{label} (e.g. {}): ", key.placeholder())?;
        } else {
            write!(out, "{label} [{current}]: ")?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            return Ok(false);
        }

        let answer = line.trim();
        if !answer.is_empty() {
            controller.set_field(key, answer);
        }
    }
    Ok(true)
}

/// Drive the screen until an app is created or input runs out.
///
/// Rejections and failures keep the draft and prompt again, with the
/// previous answers offered as defaults.
pub async fn run_screen<A, N, V, T, G, R, W>(
    controller: &NewAppController<A, N, V, T>,
    gate: &G,
    input: &mut R,
    out: &mut W,
) -> Result<ScreenExit>
where
    A: FederationApi,
    N: Notifier,
    V: Navigator,
    T: Translator,
    G: LicenseGate,
    R: BufRead,
    W: Write,
{
    let screen = controller.render(gate).await;
    render_screen(&screen, out)?;
    if matches!(screen, Screen::LicenseRequired { .. }) {
        controller.unmount();
        return Ok(ScreenExit::LicenseRequired);
    }

    let exit = loop {
        writeln!(out)?;
        if !prompt_fields(controller, input, out)? {
            break ScreenExit::Closed;
        }

        match controller.submit().await {
            SubmitOutcome::Created(app) => break ScreenExit::Created(app),
            SubmitOutcome::Invalid(e) => writeln!(out, "{e}")?,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) | SubmitOutcome::Busy => {
                render_screen(&controller.compose(true), out)?;
            }
            SubmitOutcome::Unmounted => break ScreenExit::Closed,
        }
    };

    info!("New app screen closing: {:?}", exit);
    controller.unmount();
    Ok(exit)
}
