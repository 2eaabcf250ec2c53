//! guruhadir main entrypoint.

use guruhadir::run;
use guruhadir::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
