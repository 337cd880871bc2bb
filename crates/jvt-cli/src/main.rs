use clap::{Args as ClapArgs, Parser, Subcommand};
use std::io::Read as _;
use std::path::{Path, PathBuf};

use jvt_core::{MappingRule, MappingSet, PreprocessOpts, TransformOpts};

mod rules_file;

#[derive(Parser, Debug)]
#[command(
    name = "jvt",
    about = "Copy JSON values between key paths matched at any depth",
    version
)]
struct Cli {
    /// Log rule matching details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Apply mapping rules and print (or write) the resulting JSON
    Apply(ApplyArgs),
    /// List every node matching a key chain
    Resolve(ResolveArgs),
    /// Print the built-in preset rules as JSON
    Preset,
}

#[derive(ClapArgs, Debug)]
struct ApplyArgs {
    /// JSON file to transform; reads stdin when omitted
    file: Option<PathBuf>,
    /// Rule as IN=OUT, e.g. en.prompt=de.prompt (repeatable, applied in order)
    #[arg(long = "map", value_name = "IN=OUT")]
    maps: Vec<String>,
    /// JSON file with a list of {inputKey, outputKey, id} rules
    #[arg(long, value_name = "JSON", conflicts_with = "maps")]
    rules: Option<PathBuf>,
    /// Use the built-in en.prompt preset instead of custom rules
    #[arg(long, default_value_t = false, conflicts_with_all = ["maps", "rules"])]
    preset: bool,
    /// Optional output path; otherwise prints to stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Reject input that is not strictly valid JSON
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(ClapArgs, Debug)]
struct ResolveArgs {
    /// JSON file to search; reads stdin when omitted
    file: Option<PathBuf>,
    /// Dot-separated key chain, e.g. en.prompt
    #[arg(long = "path", value_name = "CHAIN")]
    chain: String,
    /// Reject input that is not strictly valid JSON
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Cmd::Apply(a) => cmd_apply(a),
        Cmd::Resolve(a) => cmd_resolve(a),
        Cmd::Preset => cmd_preset(),
    }
}

fn read_input(path: Option<&Path>) -> String {
    let res = match path {
        Some(p) => std::fs::read_to_string(p),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s).map(|_| s)
        }
    };
    res.unwrap_or_else(|e| {
        eprintln!("error reading input: {}", e);
        std::process::exit(2);
    })
}

fn build_rules(args: &ApplyArgs) -> Result<MappingSet, String> {
    if args.preset {
        return Ok(MappingSet::preset());
    }
    if let Some(p) = &args.rules {
        return rules_file::load_rules(p);
    }
    let mut set = MappingSet::default();
    for m in &args.maps {
        let (input, output) = rules_file::parse_map_arg(m)?;
        set.push(input, output).map_err(|e| e.to_string())?;
    }
    Ok(set)
}

fn cmd_apply(args: ApplyArgs) {
    let rules = build_rules(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(3);
    });
    let raw = read_input(args.file.as_deref());
    let opts = TransformOpts {
        preprocess: PreprocessOpts {
            lenient: !args.strict,
        },
    };
    tracing::debug!(rules = rules.len(), "applying");
    let out = jvt_core::transform_with(&raw, rules.as_slice(), &opts).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(4);
    });
    if let Some(path) = args.out {
        std::fs::write(&path, out).unwrap_or_else(|e| {
            eprintln!("error writing: {}", e);
            std::process::exit(5);
        });
    } else {
        println!("{}", out);
    }
}

fn cmd_resolve(args: ResolveArgs) {
    let raw = read_input(args.file.as_deref());
    let chain = jvt_core::PathExpression::parse(&args.chain).unwrap_or_else(|_| {
        eprintln!("invalid key chain: {:?}", args.chain);
        std::process::exit(3);
    });
    let opts = PreprocessOpts {
        lenient: !args.strict,
    };
    let doc = jvt_core::preprocess(&raw, &opts).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    let found = jvt_core::resolve(&doc, &chain);
    if found.is_empty() {
        eprintln!("not found: {}", chain);
        std::process::exit(4);
    }
    for m in found {
        println!("{}\t{}", m.path.to_pointer(), m.value);
    }
}

fn cmd_preset() {
    let rules: &[MappingRule] = &jvt_core::PRESET_RULES;
    match serde_json::to_string_pretty(rules) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(5);
        }
    }
}
