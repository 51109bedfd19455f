mod data;
mod pager;
mod prompt;
mod report;
mod session;

use std::io;

use session::Session;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // City files are read from the working directory.
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), ".");
    session.run()?;
    Ok(())
}
