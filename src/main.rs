use git_br::cli;
use git_br::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        // anyhow's alternate form prints the context chain on one report.
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
