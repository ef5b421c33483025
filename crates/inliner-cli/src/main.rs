use inliner_cli::{cli, execute};

fn main() -> anyhow::Result<()> {
    // get_matches prints usage and exits with clap's status 2 on bad arguments
    let matches = cli::build().get_matches();

    let stdout = std::io::stdout();
    execute(&matches, &mut stdout.lock())
}
