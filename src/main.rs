//! quelio main entrypoint.

use quelio::run;
use quelio::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(e.exit_code());
    }
}
