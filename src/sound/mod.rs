//! Audio cues, played through the terminal bell

use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Generate,
    Copy,
}

impl Cue {
    /// Number of bells rung for this cue.
    pub const fn bells(self) -> usize {
        match self {
            Cue::Generate => 1,
            Cue::Copy => 2,
        }
    }
}

const BELL: &[u8] = b"\x07";

/// Gap between bells, long enough for terminals that debounce BEL.
const BELL_GAP: Duration = Duration::from_millis(150);

/// Fire-and-forget; failures are logged and otherwise ignored.
pub fn play(cue: Cue) {
    tokio::task::spawn_blocking(move || {
        let result = ring(cue, &mut std::io::stdout().lock(), BELL_GAP);
        if let Err(e) = result {
            tracing::warn!(?cue, "sound cue failed: {e}");
        } else {
            tracing::debug!(?cue, "sound cue");
        }
    });
}

fn ring(cue: Cue, out: &mut impl Write, gap: Duration) -> std::io::Result<()> {
    for i in 0..cue.bells() {
        if i > 0 {
            std::thread::sleep(gap);
        }
        out.write_all(BELL)?;
        out.flush()?;
    }
    Ok(())
}
