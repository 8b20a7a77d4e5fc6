#![deny(warnings)]

use std::{error::Error, io};

mod app;
pub(crate) use app::App;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() {
    // We put as little as possible into this function so the rest is
    // reachable from test coverage.

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let stderr = io::stderr();
    let mut stderr = stderr.lock();

    let mut app = App {
        arg_matches: app::clap_app().get_matches(),
        stdin: &mut stdin,
        stdout: &mut stdout,
        stderr: &mut stderr,
    };

    let r = app.run();
    drop(app);

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
