use anyhow::Result;

fn main() -> Result<()> {
    fstidy_cli::run_cli()
}
