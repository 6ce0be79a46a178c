use clap::Parser;

#[tokio::main]
async fn main() {
    // Argument errors exit 1 rather than clap's default 2; --help and
    // --version still exit 0.
    let cli = match elc::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    let exit_code = elc::run(cli).await;
    std::process::exit(exit_code);
}
