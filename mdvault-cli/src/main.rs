// Command-line interface for mdvault
//
// Keeps a vault of markdown notes tidy. All markdown handling comes from mdvault-engine;
// this binary finds the files, decides which ones take part, and writes results back.
//
// Usage:
//  mdvault [-v <vault>] [-d] format        - Format every note in the vault
//  mdvault [-v <vault>] [-d] archive       - Archive finished checklists in #todo notes
//  mdvault inspect <file> [--json]         - Show the parsed block tree of one note
//  mdvault --list-transforms               - List available transforms
//
// Configuration is layered: built-in defaults, ./mdvault.toml, <vault>/.mdvault.toml,
// then --config. Set RUST_LOG=debug to see which files were skipped and why.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdvault_cli::runner::{FileReport, Job, Outcome, Runner};
use mdvault_cli::vault;
use mdvault_config::{Loader, MdvaultConfig};
use mdvault_engine::{parse_with_diagnostics, treeviz, ArchiveRules, TransformRegistry};
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("mdvault")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format markdown notes and archive finished checklists across a vault")
        .long_about(
            "mdvault keeps a vault of markdown notes tidy.\n\n\
            Commands:\n  \
            - format:  Rewrite every note in its canonical form\n  \
            - archive: Move fully checked items of #todo notes under an Archived heading\n  \
            - inspect: View the parsed block tree of a single note\n\n\
            Examples:\n  \
            mdvault -v ~/notes format          # Format the whole vault\n  \
            mdvault -v ~/notes -d archive      # Show what archiving would change\n  \
            mdvault inspect note.md --json     # Dump the tree as JSON",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("vault-path")
                .long("vault-path")
                .short('v')
                .value_name("PATH")
                .help("Root directory of the vault (defaults to the current directory)")
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
                .value_name("PATH")
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
        .subcommand(
            Command::new("format")
                .about("Format every markdown file in the vault")
                .long_about(
                    "Parse every note and write it back in canonical form: ATX headings,\n\
                    one blank line between blocks, normalized list markers and aligned tables.\n\
                    Files that are already formatted are not touched.",
                ),
        )
        .subcommand(
            Command::new("archive")
                .about("Archive completed checklist items in tagged files")
                .long_about(
                    "For notes whose leading tag block carries the archive tag (#todo by\n\
                    default), move every top-level checklist item that is checked all the\n\
                    way down under the archive heading. The result is formatted as well.",
                ),
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
        )
}

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    let vault_path = vault_path(&matches);
    let config = load_cli_config(
        &vault_path,
        matches.get_one::<String>("config").map(|s| s.as_str()),
    );

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command(&config);
        return;
    }

    let dry_run = matches.get_flag("dry-run");
    match matches.subcommand() {
        Some(("format", _)) => handle_vault_command(Job::Format, &vault_path, &config, dry_run),
        Some(("archive", _)) => handle_vault_command(Job::Archive, &vault_path, &config, dry_run),
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: inspect needs a file path");
                std::process::exit(1);
            };
            handle_inspect_command(path, sub_matches.get_flag("json"));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn vault_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("vault-path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Handle the format and archive commands
fn handle_vault_command(job: Job, vault_path: &Path, config: &MdvaultConfig, dry_run: bool) {
    let runner = Runner::from_config(config, dry_run);
    let reports = runner.run(job, vault_path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let failures = reports.iter().filter(|r| !print_report(job, r)).count();
    if failures > 0 {
        eprintln!("{failures} file(s) failed");
        std::process::exit(1);
    }
}

/// Print one file's outcome; false when the file failed.
fn print_report(job: Job, report: &FileReport) -> bool {
    let path = report.path.display();
    match &report.outcome {
        Ok(Outcome::Unchanged) | Ok(Outcome::Skipped) => {}
        Ok(Outcome::Written { archived }) => match job {
            Job::Format => println!("Formatted {path}"),
            Job::Archive => println!("Archived {archived} item(s) in {path}"),
        },
        Ok(Outcome::WouldWrite { archived, diff }) => {
            match job {
                Job::Format => println!("dry run, would format {path}:"),
                Job::Archive => println!("dry run, would archive {archived} item(s) in {path}:"),
            }
            print!("{diff}");
        }
        Err(e) => {
            eprintln!("Failed to apply changes: {e}");
            return false;
        }
    }
    true
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, json: bool) {
    let source = vault::read(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let outcome = parse_with_diagnostics(&source);

    if json {
        let value = serde_json::json!({
            "document": outcome.document,
            "recoveries": outcome.recoveries,
        });
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", treeviz(&outcome.document));
    for recovery in &outcome.recoveries {
        eprintln!("recovered: {recovery}");
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command(config: &MdvaultConfig) {
    let registry = TransformRegistry::with_archive_rules(ArchiveRules::from(&config.archive));
    println!("Available transforms:\n");
    for name in registry.list_transforms() {
        let description = registry
            .get(&name)
            .map(|transform| transform.description())
            .unwrap_or_default();
        println!("  {name:<16}{description}");
    }
}

fn load_cli_config(vault_path: &Path, explicit_path: Option<&str>) -> MdvaultConfig {
    let loader = Loader::new()
        .with_optional_file("mdvault.toml")
        .with_vault(vault_path);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
