//! Generate a random password.

use crate::generator::{self, GenerationConfig};
use crate::ui;

pub fn run(
    length: usize,
    use_lower: bool,
    use_upper: bool,
    use_digits: bool,
    use_symbols: bool,
    copy: bool,
) {
    // The config is built fresh from the flags on every invocation;
    // the generator holds no state between calls.
    let config = GenerationConfig {
        lower: use_lower,
        upper: use_upper,
        digits: use_digits,
        symbols: use_symbols,
        length,
    };

    let pwd = generator::generate(config);

    if pwd.is_empty() && length > 0 {
        println!("All character classes are excluded; nothing to generate.");
        return;
    }

    println!("{}", pwd);

    if copy {
        if let Err(e) = ui::copy_to_clipboard_with_timeout(&pwd, 10) {
            println!("Failed to copy to clipboard: {}", e);
        }
    }
}
