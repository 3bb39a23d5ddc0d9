//! `vscode-config`: write .vscode/c_cpp_properties.json for the project.

use std::process::ExitCode;

use clap::Parser;

use devtools_cli::{cmd, logging, output};

/// Write the C/C++ IntelliSense configuration to ../.vscode
#[derive(Parser)]
#[command(name = "vscode-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,

  /// Print the configuration instead of writing it
  #[arg(long)]
  print: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  match cmd::cmd_vscode_config(cli.print) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      output::print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
