//! Tyme main entrypoint.

use tyme::run;
use tyme::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
