//! Command-line interface for the GLSL mode
//! This binary runs the mode over shader files: token dumps, re-indentation and mode info.
//!
//! Usage:
//!   glsl tokens `<path>` [--format simple|json]   - Print every token with its category
//!   glsl indent `<path>` [--write]                 - Re-indent a file (to stdout, or in place)
//!   glsl info                                      - Describe the language and active settings
//!
//! Every subcommand accepts `--config <file>` to layer a TOML file over the built-in defaults.
//! Set `RUST_LOG=debug` to see re-indentation decisions.

use clap::{Arg, ArgAction, ArgMatches, Command};
use glsl_config::{GlslConfig, Loader, OutputFormat};
use glsl_mode::glsl::formatting::reindent;
use glsl_mode::glsl::highlight::{lex_source, render_simple};
use glsl_mode::glsl::language::LanguageRegistry;
use glsl_mode::GlslMode;
use log::info;
use std::fs;

fn main() {
    env_logger::init();

    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML file layered over the built-in defaults")
        .global(true);

    let matches = Command::new("glsl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and re-indenting GLSL shaders")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(config_arg)
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of a shader, line by line")
                .arg(
                    Arg::new("path")
                        .help("Path to the shader")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: simple or json (default: output.format from config)")
                        .value_parser(["simple", "json"]),
                ),
        )
        .subcommand(
            Command::new("indent")
                .about("Re-indent a shader")
                .arg(
                    Arg::new("path")
                        .help("Path to the shader")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .help("Rewrite the file in place instead of printing it")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("info").about("Describe the language and the active settings"))
        .get_matches();

    let Some((name, sub)) = matches.subcommand() else {
        eprintln!("Missing command. Run `glsl --help` for usage.");
        std::process::exit(1);
    };

    // `--config` is global, so the subcommand's matches see it wherever it was given
    let config = load_config(sub);
    let mode = config.to_mode_config().map(GlslMode::new).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    match name {
        "tokens" => handle_tokens_command(&mode, &config, sub),
        "indent" => handle_indent_command(&mode, sub),
        "info" => handle_info_command(&mode),
        other => {
            eprintln!("Unknown command: {}", other);
            std::process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> GlslConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        info!("loading configuration from {}", path);
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn read_source(matches: &ArgMatches) -> (String, String) {
    let path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_default();
    let source = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    (path, source)
}

/// Handle the tokens command
fn handle_tokens_command(mode: &GlslMode, config: &GlslConfig, matches: &ArgMatches) {
    let (_, source) = read_source(matches);
    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => OutputFormat::Json,
        Some(_) => OutputFormat::Simple,
        None => config.output.format,
    };

    let (lines, _) = lex_source(mode, &source);
    let formatted = match format {
        OutputFormat::Simple => render_simple(&lines),
        OutputFormat::Json => serde_json::to_string_pretty(&lines).unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            std::process::exit(1);
        }),
    };
    print!("{}", formatted);
    if format == OutputFormat::Json {
        println!();
    }
}

/// Handle the indent command
fn handle_indent_command(mode: &GlslMode, matches: &ArgMatches) {
    let (path, source) = read_source(matches);
    let formatted = reindent(mode, &source);

    if !matches.get_flag("write") {
        print!("{}", formatted);
        return;
    }
    if formatted == source {
        info!("{} already indented", path);
        return;
    }
    fs::write(&path, formatted).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {}", path, e);
        std::process::exit(1);
    });
}

/// Handle the info command
fn handle_info_command(mode: &GlslMode) {
    let registry = LanguageRegistry::with_glsl();
    for language in registry.ids().into_iter().filter_map(|id| registry.get(id)) {
        println!("{} ({})", language.name, language.id);
        println!("  modes: {}", language.modes.join(", "));
        println!("  extensions: {}", language.file_extensions.join(", "));
        if let Some(line) = &language.line_comment {
            println!("  line comment: {}", line);
        }
        if let Some((open, close)) = &language.block_comment {
            println!("  block comment: {} {}", open, close);
        }
    }

    let config = mode.config();
    let triggers: String = config.hooks.triggers().collect();
    println!();
    println!("indent unit: {}", config.indent_unit);
    println!("tab size: {}", config.tab_size);
    println!("multi-line strings: {}", config.multi_line_strings);
    println!("electric chars: {}", mode.electric_chars());
    println!("hook triggers: {}", triggers);
}
