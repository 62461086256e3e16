use std::process;

use clap::Parser;
use clap_stdin::FileOrStdin;
use tracing_subscriber::EnvFilter;

/// Translate a minimal S-expression language into imperative statements.
#[derive(Parser)]
#[command(name = "sexpc")]
#[command(about = "Translate S-expression forms into imperative statements")]
struct Cli {
  /// Source file, or `-` to read from stdin.
  #[arg(default_value = "-")]
  input: FileOrStdin,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();
  let source = match cli.input.contents() {
    Ok(source) => source,
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  };

  match sexpc::compile(&source) {
    Ok(program) => println!("{program}"),
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
