use anyhow::{bail, Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

use textundo::input::{encoding_for_label, parse_script, read_script, read_script_stdin};
use textundo::session::{demo_script, Session};
use textundo::{utils, Config};

const HELP: &str = "\
textundo - replay an edit script against a reversible command history

USAGE:
  textundo [OPTIONS] [SCRIPT]

ARGS:
  [SCRIPT]                Edit script to run (reads stdin when omitted)

OPTIONS:
  --demo                  Run the built-in demo script
  --limit <N>             Number of commands kept for undo (default: 1000)
  --encoding <LABEL>      Script encoding (default: detect BOM, else UTF-8)
  --output <PATH>         Save the final buffer to PATH
  --save-encoding <LABEL> Encoding used with --output (default: UTF-8)
  --no-color              Disable colored notes
  --debug                 Enable debug logging
  -h, --help              Print help
  -V, --version           Print version

SCRIPT FORMAT:
  exec <text>             Append text (rest of line, trailing spaces kept)
  exec \"<text>\"           Append quoted text (\\n \\t \\\" \\\\ escapes)
  undo                    Undo the most recent command
  redo                    Redo the most recently undone command
  print                   Print the buffer with a status line
  # comment
";

struct Args {
    script: Option<PathBuf>,
    demo: bool,
    limit: Option<usize>,
    encoding: Option<&'static encoding_rs::Encoding>,
    output: Option<PathBuf>,
    save_encoding: &'static encoding_rs::Encoding,
    no_color: bool,
    debug: bool,
}

fn parse_args() -> Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }
    if pargs.contains(["-V", "--version"]) {
        println!("textundo {}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }

    let args = Args {
        demo: pargs.contains("--demo"),
        limit: pargs.opt_value_from_str("--limit")?,
        encoding: pargs.opt_value_from_fn("--encoding", encoding_for_label)?,
        output: pargs.opt_value_from_str("--output")?,
        save_encoding: pargs
            .opt_value_from_fn("--save-encoding", encoding_for_label)?
            .unwrap_or(encoding_rs::UTF_8),
        no_color: pargs.contains("--no-color"),
        debug: pargs.contains("--debug"),
        script: pargs.opt_free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {:?}", remaining);
    }
    if args.demo && args.script.is_some() {
        bail!("--demo cannot be combined with a script");
    }
    if args.limit == Some(0) {
        bail!("--limit must be at least 1");
    }
    Ok(Some(args))
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    // 初始化日誌
    utils::init_logger(args.debug);

    let mut config = Config::default();
    if let Some(limit) = args.limit {
        config.history_limit = limit;
    }
    config.color = !args.no_color && std::io::stdout().is_terminal();

    let ops = if args.demo {
        demo_script()
    } else {
        let source = match &args.script {
            Some(path) => read_script(path, args.encoding)?,
            None => read_script_stdin(args.encoding)?,
        };
        let name = args
            .script
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string());
        parse_script(&source).with_context(|| format!("Failed to parse script {name}"))?
    };
    log::debug!("running {} operations", ops.len());

    let mut session = Session::new(&config);
    let stdout = std::io::stdout();
    session.run(ops, &mut stdout.lock())?;

    if let Some(path) = &args.output {
        session.into_buffer().save_to(path, args.save_encoding)?;
    }

    Ok(())
}
