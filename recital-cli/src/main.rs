// Command-line interface for recital
//
// Converts lesson-plan markdown (the recital dialect: bookmarks, video cards,
// local prompts, teacher-only sections) into HTML. All conversion logic lives
// in recital-core; this binary only reads files, loads configuration, picks a
// format and writes the result.
//
// Usage:
//  recital <input> [--to <format>] [--output <file>]          - Convert (default)
//  recital convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  recital bookmarks <input>                                  - List declared bookmarks
//  recital generate-template                                  - Print the built-in page shell
//  recital --list-formats                                     - List output formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// `title` and `template` are folded into the configuration; anything else is
// handed to the format as an option.
// Example:
//  recital lesson.md -o lesson.html --extra-title "Week 3" --extra-template shell.html

use clap::{Arg, ArgAction, Command, ValueHint};
use recital_config::{Loader, RecitalConfig};
use recital_core::{FormatRegistry, Lesson, Template};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "bookmarks", "generate-template", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    let input = |help: &'static str| {
        Arg::new("input")
            .help(help)
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    Command::new("recital")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert lesson-plan markdown into standalone HTML")
        .long_about(
            "recital converts poetry-recitation lesson plans written in a small markdown\n\
            dialect into a single HTML page.\n\n\
            Commands:\n  \
            - convert:           Render a lesson (default command)\n  \
            - bookmarks:         List the video and link bookmarks a lesson declares\n  \
            - generate-template: Print the built-in page shell\n\n\
            Examples:\n  \
            recital lesson.md                       # Full page to stdout\n  \
            recital lesson.md -o lesson.html        # Full page to a file\n  \
            recital lesson.md --to fragment         # Body only\n  \
            recital lesson.md --extra-title \"Week 3\" # Title when the lesson has no # heading",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a recital.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a lesson (default command)")
                .long_about(
                    "Render a lesson file.\n\n\
                    The output format is taken from --to, else from the extension of\n\
                    --output, else from `convert.format` in the configuration.\n\n\
                    Formats:\n  \
                    - html:      Standalone page using the page shell (.html)\n  \
                    - fragment:  Lesson body only\n  \
                    - bookmarks: Declared bookmarks as JSON (.json)",
                )
                .arg(input("Lesson file"))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Output format")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("bookmarks")
                .about("List the bookmarks a lesson declares")
                .arg(input("Lesson file")),
        )
        .subcommand(
            Command::new("generate-template")
                .about("Output the built-in page shell")
                .long_about(
                    "Outputs the page shell used for HTML output.\n\n\
                    Save it, edit it, and point `convert.html.template` (or\n\
                    --extra-template) at the copy. Keep the {{TITLE}} and\n\
                    {{CONTENT}} placeholders.",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is given, treat the first argument as a lesson to convert.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, to, output, &extra_params, &config);
        }
        Some(("bookmarks", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_bookmarks_command(input);
        }
        Some(("generate-template", _)) => {
            print!("{}", Template::builtin().as_str());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    // --verbose shows our own debug events, otherwise RUST_LOG or warnings only
    let filter = if verbose {
        EnvFilter::new("recital=debug,recital_core=debug,recital_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_lesson(path: &str) -> Lesson {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    Lesson::parse(source)
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &RecitalConfig,
) {
    let registry = FormatRegistry::default();
    let format = resolve_format(&registry, to, output, config);

    if let Err(e) = registry.get(&format) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let lesson = read_lesson(input);

    let mut format_options = HashMap::new();
    if format == "html" {
        format_options = html_options_from_config(config).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
    }
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&lesson, &format, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::info!(input, output = path, %format, "wrote lesson");
        }
        None => print!("{result}"),
    }
}

/// Handle the bookmarks command
fn handle_bookmarks_command(input: &str) {
    let lesson = read_lesson(input);
    for line in bookmark_lines(&lesson) {
        println!("{line}");
    }
}

fn bookmark_lines(lesson: &Lesson) -> Vec<String> {
    lesson
        .bookmarks()
        .iter()
        .map(|(id, resource)| {
            let url = if resource.has_url() {
                resource.url.as_str()
            } else {
                "(no url)"
            };
            format!(
                "{}\t{id}\t{}\t{url}",
                resource.kind,
                resource.label_or(resource.kind.default_label())
            )
        })
        .collect()
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {name:<10} {}", format.description());
        }
    }
}

/// `--to`, then the output file's extension, then the configured default.
fn resolve_format(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &RecitalConfig,
) -> String {
    if let Some(to) = to {
        return to.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.format.clone())
}

fn load_cli_config(explicit_path: Option<&str>) -> RecitalConfig {
    let loader = Loader::new().with_optional_file("recital.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.with_env().build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut RecitalConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(title) = take_override(extra_params, &["title", "default-title"]) {
        config.document.default_title = title;
    }
    if let Some(path) = take_override(extra_params, &["template", "template-path"]) {
        config.convert.html.template = Some(path);
    }
}

/// Options for the html format: the default title and, when configured, the
/// contents of the page shell file.
fn html_options_from_config(config: &RecitalConfig) -> Result<HashMap<String, String>, String> {
    let mut options = HashMap::new();
    options.insert("title".to_string(), config.document.default_title.clone());

    if let Some(path) = &config.convert.html.template {
        let shell = fs::read_to_string(path)
            .map_err(|e| format!("cannot read template '{path}': {e}"))?;
        options.insert("template".to_string(), shell);
    }

    Ok(options)
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
