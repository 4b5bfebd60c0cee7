use crate::assembler;
use crate::cli::dump;
use ansi_term::Colour::Red;
use anyhow::Context;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[cfg(windows)]
pub fn terminal_init() {
    ansi_term::enable_ansi_support().expect("Could enable terminal ANSI support");
}

#[cfg(not(windows))]
pub fn terminal_init() {}

#[derive(StructOpt, Debug)]
#[structopt(name = "sqasm")]
pub struct Opts {
    #[structopt(name = "in.s", parse(from_os_str))]
    in_src: PathBuf,

    /// Listing output path; stdout when absent.
    #[structopt(name = "out.lst", parse(from_os_str))]
    out_lst: Option<PathBuf>,
}

pub fn run(opts: &Opts) -> anyhow::Result<i32> {
    let source = read_source(&opts.in_src)?;

    let program = match assembler::assemble(&source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{} {}", Red.paint("error:"), err);
            return Ok(1);
        }
    };

    let listing = dump::dump(&program, &source);
    match &opts.out_lst {
        Some(path) => std::fs::write(path, listing)
            .with_context(|| format!("could not write '{}'", path.display()))?,
        None => print!("{}", listing),
    }

    Ok(0)
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("could not read '{}'", path.display()))
}
