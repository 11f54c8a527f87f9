use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command line in src/main.rs
// Build scripts can't reach src/ modules, so the shape is repeated here
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdvault")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format markdown notes and archive finished checklists across a vault")
        .arg_required_else_help(true)
        .arg(
            Arg::new("vault-path")
                .long("vault-path")
                .short('v')
                .help("Root directory of the vault")
                .value_hint(ValueHint::DirPath)
                .global(true),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('d')
                .help("Print a diff of each change instead of writing it")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an mdvault.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("format").about("Format every markdown file in the vault"))
        .subcommand(
            Command::new("archive").about("Archive completed checklist items in tagged files"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parsed block tree of one file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the tree as JSON")
                        .action(ArgAction::SetTrue),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdvault", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdvault", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdvault", &outdir)?;

    Ok(())
}
