use std::io;

fn main() {
    videopoker_cli::logging::init_logging();
    let code = videopoker_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
