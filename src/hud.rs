//! Score display
//!
//! Text formatting for the score and HI readouts, and the alpha curve of the
//! milestone blink. The host draws the strings; nothing here touches a renderer.

use crate::consts::SCORE_DIGITS;

/// One fade-out/fade-in leg of the milestone blink
pub const FLASH_LEG_MS: f32 = 100.0;
/// Blink repeats (out and back) after the first one
pub const FLASH_REPEATS: u32 = 3;
/// Total length of the milestone blink
pub const FLASH_DURATION_MS: f32 = FLASH_LEG_MS * 2.0 * (FLASH_REPEATS + 1) as f32;

/// Zero-padded score, e.g. `000123`
pub fn format_score(score: u64) -> String {
    format!("{:0width$}", score, width = SCORE_DIGITS)
}

/// Session best with prefix, e.g. `HI 000123`
pub fn format_best(best: u64) -> String {
    format!("HI {}", format_score(best))
}

/// Score text alpha at `elapsed_ms` into a blink (1.0 when no blink is playing)
pub fn flash_alpha(elapsed_ms: Option<f32>) -> f32 {
    let Some(t) = elapsed_ms else { return 1.0 };
    if t >= FLASH_DURATION_MS || t < 0.0 {
        return 1.0;
    }
    let cycle = t % (FLASH_LEG_MS * 2.0);
    if cycle < FLASH_LEG_MS {
        1.0 - cycle / FLASH_LEG_MS
    } else {
        (cycle - FLASH_LEG_MS) / FLASH_LEG_MS
    }
}
