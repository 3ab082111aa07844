// SPDX-License-Identifier: MPL-2.0
use quiz_rush::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
QuizRush - timed multiple-choice quiz

USAGE:
  quiz_rush [OPTIONS]

OPTIONS:
  --questions <PATH|URL>    Question list (JSON file or http(s) URL)
  --config-dir <PATH>       Directory holding settings.toml
  --countdown <SECS>        Pre-start countdown (1-30)
  --question-time <SECS>    Time per question (3-120)
  -h, --help                Print this help
";

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_rush=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        questions: args.opt_value_from_str("--questions")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        countdown: args.opt_value_from_str("--countdown")?,
        question_time: args.opt_value_from_str("--question-time")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}
