use sqasm::cli::command::{self, Opts};
use structopt::StructOpt;

fn main() {
    env_logger::init();
    command::terminal_init();

    let code = match command::run(&Opts::from_args()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            2
        }
    };
    std::process::exit(code);
}
