mod debug_report;

use smurfify::{Lexicon, Options, Substitutor};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            exit(2);
        }
    };

    if let Err(fatal) = run(config) {
        eprintln!("{}", fatal.message);
        exit(fatal.code);
    }
}

enum Source {
    Text(String),
    File(PathBuf),
    Stdin,
}

struct CliConfig {
    source: Source,
    lexicon: Option<PathBuf>,
    options: Options,
    explain: bool,
    color: bool,
}

struct Fatal {
    code: i32,
    message: String,
}

impl Fatal {
    fn usage(message: String) -> Self {
        Fatal { code: 2, message }
    }

    fn io(message: String) -> Self {
        Fatal { code: 1, message }
    }
}

fn run(config: CliConfig) -> Result<(), Fatal> {
    let custom;
    let lexicon = match &config.lexicon {
        Some(path) => {
            custom = load_lexicon(path)?;
            &custom
        }
        None => Lexicon::builtin(),
    };

    let mut substitutor =
        Substitutor::new(lexicon, config.options).map_err(|err| Fatal::usage(format!("error: {err}")))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let explain = config.explain;
    let color = config.color;

    let written = match config.source {
        Source::Text(text) => {
            let input = text.as_bytes();
            pump(&mut substitutor, input, &mut out, explain, color)
        }
        Source::File(path) => {
            let file = File::open(&path)
                .map_err(|err| Fatal::io(format!("error: cannot open '{}': {err}", path.display())))?;
            pump(&mut substitutor, BufReader::new(file), &mut out, explain, color)
        }
        Source::Stdin if io::stdin().is_terminal() => interactive(&mut substitutor, &mut out, explain, color),
        Source::Stdin => pump(&mut substitutor, io::stdin().lock(), &mut out, explain, color),
    };

    written.map_err(|err| Fatal::io(format!("error: {err}")))
}

fn load_lexicon(path: &Path) -> Result<Lexicon, Fatal> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| Fatal::io(format!("error: cannot read lexicon '{}': {err}", path.display())))?;
    Lexicon::parse(&text).map_err(|err| Fatal::usage(format!("error: {}: {err}", path.display())))
}

/// Smurf every line of `input` to `out`, lazily.
fn pump<B: BufRead, W: Write>(
    substitutor: &mut Substitutor<'_>,
    input: B,
    out: &mut W,
    explain: bool,
    color: bool,
) -> io::Result<()> {
    if explain {
        for line in input.lines() {
            let line = line?;
            let (smurfed, details) = substitutor.smurf_line_verbose(&line);
            out.write_all(debug_report::render_line(&line, &smurfed, &details, color).as_bytes())?;
        }
    } else {
        for line in substitutor.reader(input) {
            writeln!(out, "{}", line?)?;
        }
    }
    out.flush()
}

fn interactive<W: Write>(substitutor: &mut Substitutor<'_>, out: &mut W, explain: bool, color: bool) -> io::Result<()> {
    writeln!(out, "smurfify {}: type a line to smurf, Ctrl-D (or Ctrl-Z) to quit.", env!("CARGO_PKG_VERSION"))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if explain {
            let (smurfed, details) = substitutor.smurf_line_verbose(&line);
            out.write_all(debug_report::render_line(&line, &smurfed, &details, color).as_bytes())?;
        } else {
            writeln!(out, "{}", substitutor.smurf_line(&line))?;
        }
        out.flush()?;
    }

    writeln!(out, "\nStay smurfy!")?;
    out.flush()
}

fn parse_args() -> Result<CliConfig, String> {
    let mut text: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut lexicon: Option<PathBuf> = None;
    let mut options = Options::playful();
    let mut explain = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                exit(0);
            }
            "-V" | "--version" => {
                println!("smurfify {}", env!("CARGO_PKG_VERSION"));
                exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--explain" => explain = true,
            "--no-chaos" => options.chaos_enabled = false,
            "--no-phrase-rules" => options.phrase_rules = false,
            "--chaos" => {
                let value = args.next().ok_or_else(|| "error: --chaos expects a value".to_string())?;
                options = options.with_chaos(parse_probability(&value)?);
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| "error: --seed expects a value".to_string())?;
                options = options.with_seed(parse_seed(&value)?);
            }
            "-f" | "--file" => {
                let value = args.next().ok_or_else(|| "error: --file expects a value".to_string())?;
                file = Some(PathBuf::from(value));
            }
            "-l" | "--lexicon" => {
                let value = args.next().ok_or_else(|| "error: --lexicon expects a value".to_string())?;
                lexicon = Some(PathBuf::from(value));
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>().join(" ");
                if !rest.is_empty() {
                    text = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--chaos=") => {
                options = options.with_chaos(parse_probability(arg.trim_start_matches("--chaos="))?);
            }
            _ if arg.starts_with("--seed=") => {
                options = options.with_seed(parse_seed(arg.trim_start_matches("--seed="))?);
            }
            _ if arg.starts_with("--file=") => {
                file = Some(PathBuf::from(arg.trim_start_matches("--file=")));
            }
            _ if arg.starts_with("--lexicon=") => {
                lexicon = Some(PathBuf::from(arg.trim_start_matches("--lexicon=")));
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                text = Some(std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    let source = match (text, file) {
        (Some(_), Some(_)) => return Err("error: pass either text or --file, not both".to_string()),
        (Some(text), None) => Source::Text(text),
        (None, Some(path)) => Source::File(path),
        (None, None) => Source::Stdin,
    };

    Ok(CliConfig { source, lexicon, options, explain, color })
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let p: f64 = value.parse().map_err(|_| format!("error: invalid --chaos '{value}' (expected a number in [0, 1])"))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("error: invalid --chaos '{value}' (expected a number in [0, 1])"));
    }
    Ok(p)
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value.parse().map_err(|_| format!("error: invalid --seed '{value}' (expected an unsigned integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "smurfify {version}

Replace common words with smurf-style language.

Usage:
  smurfify [OPTIONS] [--] <text...>
  smurfify [OPTIONS] --file <path>
  <command> | smurfify [OPTIONS]

With no text and no --file, piped stdin is smurfed line by line; on a
terminal an interactive prompt is started.

Options:
  -f, --file <path>        Smurf a file line by line.
  -l, --lexicon <path>     Use a custom lexicon file instead of the built-in one.
  --chaos <p>              Chance to smurf a word the lexicon does not know.
                           Default: {chaos}
  --no-chaos               Only smurf words found in the lexicon.
  --seed <n>               Seed the random source for reproducible output.
  --no-phrase-rules        Do not thin out phrases like \"fix some bugs\".
  --explain                Print a per-word decision report.
  --color                  Force ANSI color in the report.
  --no-color               Disable ANSI color in the report.
  -h, --help               Show this help message.
  -V, --version            Print version information.

Environment:
  SMURFIFY_DEBUG=1         Trace every lookup and random decision to stderr.

Exit codes:
  0  Success.
  1  Input could not be read or output could not be written.
  2  Invalid arguments, configuration or lexicon.
",
        version = env!("CARGO_PKG_VERSION"),
        chaos = Options::DEFAULT_CHAOS_PROBABILITY
    )
}
