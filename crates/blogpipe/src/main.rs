use clap::Parser;
use cli::{Args, RunCmd};

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Display the current version.
    #[clap(name = "version")]
    Version,

    /// Run the blogpipe.
    #[clap(flatten)]
    Run(Box<RunCmd>),
}

#[derive(Parser, Debug)]
#[clap(name = "blogpipe", disable_version_flag = true)]
pub struct Blogpipe {
    #[clap(flatten)]
    pub args: Args,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

fn main() {
    let blogpipe = Blogpipe::parse();

    match blogpipe.cmd {
        Cmd::Version => {
            println!("version {}", env!("CARGO_PKG_VERSION"));
        }
        Cmd::Run(run_cmd) => {
            if let Err(e) = run_cmd.run(blogpipe.args) {
                eprintln!("error: {e:?}");
                std::process::exit(1);
            }
        }
    }
}
