use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use quiz_core::model::{QuizConfig, ScoreSummary};
use services::{
    AnswerFeedback, IssueSeverity, QuizSession, SessionBuilder, list_candidate_files,
    list_candidate_files_recursive, load_many, render_text_report,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- run  [files...] [--dir <path>] [--recursive]");
    eprintln!("                           [--shuffle-questions] [--shuffle-choices] [--seed <n>]");
    eprintln!("                           [--explain]");
    eprintln!("  cargo run -p app -- list [--dir <path>] [--recursive]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --dir questions");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_DIR");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    List,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "run" => Some(Self::Run),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

struct Args {
    paths: Vec<PathBuf>,
    dir: PathBuf,
    recursive: bool,
    shuffle_questions: bool,
    shuffle_choices: bool,
    seed: Option<u64>,
    explain: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            paths: Vec::new(),
            dir: std::env::var("QUIZ_QUESTIONS_DIR")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map_or_else(|| PathBuf::from("questions"), PathBuf::from),
            recursive: false,
            shuffle_questions: false,
            shuffle_choices: false,
            seed: None,
            explain: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dir" => parsed.dir = PathBuf::from(require_value(args, "--dir")?),
                "--recursive" => parsed.recursive = true,
                "--shuffle-questions" => parsed.shuffle_questions = true,
                "--shuffle-choices" => parsed.shuffle_choices = true,
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    parsed.seed = Some(seed);
                }
                "--explain" => parsed.explain = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if arg.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => parsed.paths.push(PathBuf::from(arg)),
            }
        }

        Ok(parsed)
    }

    fn config(&self) -> QuizConfig {
        let mut config = QuizConfig::new()
            .with_show_explanation(self.explain)
            .with_shuffle_questions(self.shuffle_questions)
            .with_shuffle_choices(self.shuffle_choices);
        if let Some(seed) = self.seed {
            config = config.with_shuffle_seed(seed);
        }
        config
    }

    /// Explicit paths win; otherwise discover under `dir`.
    fn question_files(&self) -> io::Result<Vec<PathBuf>> {
        if !self.paths.is_empty() {
            return Ok(self.paths.clone());
        }
        if self.recursive {
            list_candidate_files_recursive(&self.dir)
        } else {
            list_candidate_files(&self.dir)
        }
    }
}

fn list_files(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let files = args.question_files()?;
    if files.is_empty() {
        eprintln!("no .json files under {}", args.dir.display());
        return Ok(());
    }
    for path in files {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_quiz(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let files = args.question_files()?;
    if files.is_empty() {
        return Err(format!("no question files under {}", args.dir.display()).into());
    }

    let loaded = load_many(&files);
    for issue in &loaded.issues {
        match issue.severity() {
            IssueSeverity::Warning => eprintln!("warning: {issue}"),
            IssueSeverity::Error => eprintln!("error: {issue}"),
        }
    }
    if loaded.bank.is_empty() {
        return Err("no valid questions found".into());
    }

    let session = SessionBuilder::new(loaded.bank)
        .with_config(args.config())
        .start()?;
    let summary = drive_session(session)?;

    println!();
    println!("{}", render_text_report(&summary, &loaded.files));
    Ok(())
}

fn print_feedback(feedback: &AnswerFeedback, explain: bool) {
    let prefix = if feedback.correct {
        "Correct."
    } else {
        "Incorrect."
    };
    if explain {
        let explanation = feedback
            .explanation
            .as_deref()
            .unwrap_or("No explanation for this question.");
        println!("{prefix} {explanation}");
    } else {
        println!("{prefix}");
    }
}

fn drive_session(mut session: QuizSession) -> Result<ScoreSummary, Box<dyn std::error::Error>> {
    let explain = session.config().show_explanation_after_answer();
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut input = String::new();

    while let Some(prompt) = session.current_prompt() {
        println!();
        println!("Question {}/{} [{}]", prompt.number, prompt.total, prompt.qid);
        println!("{}", prompt.stem);
        for (position, choice) in prompt.choices.iter().enumerate() {
            println!("  {}. {choice}", position + 1);
        }
        print!("answer (1-{}), s to skip, q to quit: ", prompt.choices.len());
        io::stdout().flush()?;

        input.clear();
        if reader.read_line(&mut input)? == 0 {
            // stdin closed; treat like quitting.
            break;
        }

        match input.trim() {
            "q" | "quit" => break,
            "s" | "skip" => {
                session.advance();
            }
            line => {
                let Ok(number) = line.parse::<usize>() else {
                    eprintln!("enter a choice number, s to skip, or q to quit");
                    continue;
                };
                let Some(choice) = number.checked_sub(1) else {
                    eprintln!("choices start at 1");
                    continue;
                };
                match session.submit_answer(choice) {
                    Ok(feedback) => {
                        print_feedback(&feedback, explain);
                        session.advance();
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
        }
    }

    let progress = session.progress();
    if !progress.is_complete {
        println!();
        println!(
            "Ended early: answered {}/{}, {} skipped.",
            progress.answered, progress.total, progress.skipped
        );
    }

    Ok(session.score())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: run the quiz when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Run,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Run,
        Some(first) => match Command::from_arg(first) {
            Some(cmd) => cmd,
            // A bare .json path means "run these files".
            None if first.to_ascii_lowercase().ends_with(".json") => Command::Run,
            None => {
                eprintln!("unknown subcommand: {first}");
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "unknown subcommand",
                )
                .into());
            }
        },
    };

    if argv
        .first()
        .is_some_and(|first| Command::from_arg(first).is_some())
    {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    match cmd {
        Command::Run => run_quiz(&parsed),
        Command::List => list_files(&parsed),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
