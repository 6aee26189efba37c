use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use kiamtsa::dict::{self, source, ReadingDictionary};
use kiamtsa::render::{to_ruby_html, to_text, verdict};
use kiamtsa::{check, settings, trace_init, Alignment, Matcher, WordGroup};

#[derive(Parser)]
#[command(name = "kiamtsa", about = "Check romanized Taiwanese against its Han text")]
struct Cli {
    /// Settings TOML overriding the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for the JSON-lines trace log (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align one Han sentence against its romanization
    Align {
        /// Han text
        hanji: String,
        /// Romanized text
        lomaji: String,
        /// Extra dictionary (.kmdx compiled or .tsv source)
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Use only the extra dictionary, not the built-in one
        #[arg(long, requires = "dict")]
        no_builtin: bool,
        /// Output as JSON instead of text
        #[arg(long, conflicts_with = "html")]
        json: bool,
        /// Output ruby markup instead of text
        #[arg(long)]
        html: bool,
    },

    /// Check every `hanji<TAB>lomaji` line of a file and report failures
    Check {
        /// Path to the input file
        input_file: PathBuf,
        /// Extra dictionary (.kmdx compiled or .tsv source)
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Use only the extra dictionary, not the built-in one
        #[arg(long, requires = "dict")]
        no_builtin: bool,
    },

    /// Dictionary maintenance
    Dict {
        #[command(subcommand)]
        command: DictCommand,
    },
}

#[derive(Subcommand)]
enum DictCommand {
    /// Compile a TSV source into a binary dictionary
    Build {
        /// Path to the TSV source
        tsv_file: PathBuf,
        /// Path to the output .kmdx file
        output_file: PathBuf,
    },
    /// Print character and reading counts (built-in table when no file given)
    Stats {
        /// Path to a .kmdx or .tsv dictionary
        dict_file: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct AlignReport<'a> {
    pass: bool,
    alignment: &'a Alignment,
    groups: &'a [WordGroup],
}

fn load_dict(path: &Path) -> ReadingDictionary {
    let result = if path.extension().is_some_and(|ext| ext == "tsv") {
        source::read_tsv(path)
    } else {
        ReadingDictionary::open(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Failed to open dictionary at {}: {}", path.display(), e);
        process::exit(1);
    })
}

fn resolve_dict(extra: Option<&Path>, no_builtin: bool) -> ReadingDictionary {
    let mut merged = if no_builtin {
        ReadingDictionary::new()
    } else {
        dict::builtin().clone()
    };
    if let Some(path) = extra {
        merged.extend(&load_dict(path));
    }
    merged
}

fn read_pairs(input_file: &Path) -> Vec<(usize, String, String)> {
    let file = fs::File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file.display(), e);
        process::exit(1);
    });
    let mut pairs = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Failed to read line: {}", e);
            process::exit(1);
        });
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once('\t') {
            Some((hanji, lomaji)) => {
                pairs.push((idx + 1, hanji.trim().to_string(), lomaji.trim().to_string()))
            }
            None => eprintln!("  SKIP:    line {}: expected hanji<TAB>lomaji", idx + 1),
        }
    }
    pairs
}

fn main() {
    let cli = Cli::parse();

    let _trace_guard = cli.trace_dir.as_deref().map(trace_init::init_tracing);

    if let Some(path) = &cli.config {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read config {}: {}", path.display(), e);
            process::exit(1);
        });
        if let Err(e) = settings::init_custom(content) {
            eprintln!("Invalid config {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    match cli.command {
        Command::Align {
            hanji,
            lomaji,
            dict,
            no_builtin,
            json,
            html,
        } => {
            let dictionary = resolve_dict(dict.as_deref(), no_builtin);
            let matcher = Matcher::new(&dictionary, None);
            let (alignment, groups) = check(&hanji, &lomaji, &matcher);
            let pass = verdict(&alignment.units);

            if json {
                let report = AlignReport {
                    pass,
                    alignment: &alignment,
                    groups: &groups,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else if html {
                println!("{}", to_ruby_html(&groups));
            } else {
                print!("{}", to_text(&groups));
                println!(
                    "{} (matches: {}, forced: {})",
                    if pass { "PASS" } else { "FAIL" },
                    alignment.score.match_count,
                    alignment.score.forced_pair_count
                );
            }

            if !pass {
                process::exit(1);
            }
        }

        Command::Check {
            input_file,
            dict,
            no_builtin,
        } => {
            let dictionary = resolve_dict(dict.as_deref(), no_builtin);
            let matcher = Matcher::new(&dictionary, None);
            let pairs = read_pairs(&input_file);

            let mut failed = 0usize;
            for (line_no, hanji, lomaji) in &pairs {
                let (alignment, groups) = check(hanji, lomaji, &matcher);
                if !verdict(&alignment.units) {
                    failed += 1;
                    println!("  FAIL:    line {}: {}", line_no, hanji);
                    for row in to_text(&groups).lines() {
                        println!("           {}", row);
                    }
                }
            }

            println!();
            println!("=== Summary ===");
            println!("  Total:    {}", pairs.len());
            println!("  Passed:   {}", pairs.len() - failed);
            println!("  Failed:   {failed}");

            if failed > 0 {
                process::exit(1);
            }
        }

        Command::Dict { command } => match command {
            DictCommand::Build {
                tsv_file,
                output_file,
            } => {
                let dictionary = source::read_tsv(&tsv_file).unwrap_or_else(|e| {
                    eprintln!("Failed to parse {}: {}", tsv_file.display(), e);
                    process::exit(1);
                });
                if let Err(e) = dictionary.save(&output_file) {
                    eprintln!("Failed to write {}: {}", output_file.display(), e);
                    process::exit(1);
                }
                let (chars, readings) = dictionary.stats();
                eprintln!(
                    "Dictionary written: {chars} characters, {readings} readings -> {}",
                    output_file.display()
                );
            }
            DictCommand::Stats { dict_file } => {
                let (chars, readings) = match dict_file {
                    Some(path) => load_dict(&path).stats(),
                    None => dict::builtin().stats(),
                };
                println!("  Characters: {chars}");
                println!("  Readings:   {readings}");
            }
        },
    }
}
