//! Terminal and clipboard helpers for passforge.
//!
//! This module centralizes interaction with the system clipboard.
//! No generation logic lives here, and the generator never depends on
//! anything in this module succeeding.

use std::time::Duration;

use clipboard::{ClipboardContext, ClipboardProvider};

/// Copy `text` to the system clipboard and clear it after `secs` seconds.
///
/// The clear runs on a background thread and only overwrites the
/// clipboard if it still holds `text`, so anything the user copied in
/// the meantime is left alone.
pub fn copy_to_clipboard_with_timeout(text: &str, secs: u64) -> Result<(), String> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| format!("Clipboard init error: {}", e))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| format!("Clipboard set error: {}", e))?;

    let text = text.to_string();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(secs));

        let ctx2_result: Result<ClipboardContext, _> = ClipboardProvider::new();
        if let Ok(mut ctx2) = ctx2_result {
            let current: Result<String, _> = ctx2.get_contents();
            if current.ok().as_deref() == Some(&text) {
                let _ = ctx2.set_contents(String::new());
            }
        }
    });

    Ok(())
}
