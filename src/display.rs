//! Terminal rendering of frames through the structured logger.

use crate::constants::PROGRESS_BAR_WIDTH;
use crate::frame::RenderFrame;
use crate::logger::Log;
use crate::progress::Progress;

/// Text progress bar such as `[=======>              ]`.
pub fn progress_bar(progress: Progress) -> String {
    let filled = (PROGRESS_BAR_WIDTH as f64 * progress.value()) as usize;
    let empty = PROGRESS_BAR_WIDTH - filled;

    let bar = if filled > 0 {
        format!("{}>{}", "=".repeat(filled - 1), " ".repeat(empty))
    } else {
        " ".repeat(PROGRESS_BAR_WIDTH)
    };
    format!("[{}]", bar)
}

/// Print a frame as a status block.
pub fn log_frame(frame: &RenderFrame) {
    Log::log_pipe();
    Log::log_decorated(&format!("{}  {}", frame.current_time, frame.status));
    if !frame.remaining.is_empty() {
        Log::log_indented(&frame.remaining);
    }
    Log::log_indented(&format!(
        "Sunrise {}  Sunset {}",
        frame.sunrise_time, frame.sunset_time
    ));
    Log::log_indented(&format!(
        "{} {}%",
        progress_bar(frame.progress),
        frame.progress.percent()
    ));
    Log::log_debug(&format!(
        "sun at ({:.2}, {:.2}), dash {}",
        frame.sun.x, frame.sun.y, frame.dash_array
    ));
}
