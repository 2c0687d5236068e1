use anyhow::Context;
use clap::Parser;
use neucogar_core::{NeucogarConfig, Neurotransmitter};
use neucogar_expression::BehaviorHook;
use neucogar_limbic::{AffectEngine, EmotionalState, SessionReport};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod actuators;

use actuators::{LoggingDisplay, LoggingMovement};

#[derive(Parser, Debug)]
#[command(name = "neucogar", author, version, about = "NEUCOGAR affective state engine", long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "neucogar.toml", env = "NEUCOGAR_CONFIG")]
    config: PathBuf,

    /// Apply a trigger and exit instead of starting a session (repeatable)
    #[arg(short, long = "trigger")]
    triggers: Vec<String>,

    /// Export the session to this path on exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print the analytics report on exit
    #[arg(long)]
    report: bool,

    /// Print states as JSON lines
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const HELP: &str = "\
Commands:
  <text>                         apply a trigger (name or free text)
  state                          show all eight signal levels
  recent [n]                     show the last n logged states
  report                         show session analytics
  self <confidence> [context]    report a self-recognition
  direct <axis> <delta> [reason] move one signal directly
  export [path]                  write the session document
  reset                          clear the log and return to neutral
  help                           show this text
  quit                           end the session";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let config = NeucogarConfig::load_or_default(&args.config);
    let hook = BehaviorHook::from_config(&config.behavior)
        .with_movement(Box::new(LoggingMovement))
        .with_display(Box::new(LoggingDisplay));
    let mut engine = AffectEngine::new(&config)
        .context("invalid trigger configuration")?
        .with_behavior(Box::new(hook));

    if args.triggers.is_empty() {
        run_session(&mut engine, &config, args.json).await?;
    } else {
        for trigger in &args.triggers {
            let state = engine.apply_trigger(trigger);
            print_state(&state, args.json)?;
        }
    }

    if args.report {
        print_report(&engine.report(), args.json)?;
    }
    if let Some(path) = &args.export {
        export(&engine, path)?;
    }
    Ok(())
}

fn init_tracing(args: &Args) {
    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

async fn run_session(
    engine: &mut AffectEngine,
    config: &NeucogarConfig,
    json: bool,
) -> anyhow::Result<()> {
    println!("NEUCOGAR session {}. Type 'help' for commands.", engine.session_id());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, ending session");
                None
            }
        };
        let Some(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Usage(usage) => println!("usage: {}", usage),
            Command::State => {
                let telemetry = engine.current_state();
                if json {
                    println!("{}", serde_json::to_string(&telemetry)?);
                } else {
                    for (axis, level) in &telemetry.levels {
                        println!("  {:<14} {:.3}", axis, level);
                    }
                    println!("  {} / {} ({:.2})", telemetry.primary, telemetry.sub_emotion, telemetry.intensity);
                }
            }
            Command::Recent(n) => {
                for state in engine.recent(n) {
                    print_state(&state, json)?;
                }
            }
            Command::Report => print_report(&engine.report(), json)?,
            Command::Reset => {
                engine.reset();
                println!("Back to neutral.");
            }
            Command::SelfRecognition { confidence, context } => {
                let event = engine.handle_self_recognition(confidence, &context);
                if json {
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    println!("{} → {}", event.trigger_used, event.state.detail);
                    for line in &event.cognitive_implications {
                        println!("  - {}", line);
                    }
                }
            }
            Command::Direct { axis, delta, reason } => {
                let state = engine.apply_direct(axis, delta, &reason);
                print_state(&state, json)?;
            }
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| default_export_path(engine, config));
                if let Err(e) = export(engine, &path) {
                    println!("Export failed: {:#}", e);
                }
            }
            Command::Trigger(text) => {
                let state = engine.apply_trigger(text);
                print_state(&state, json)?;
            }
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    Help,
    Usage(&'static str),
    State,
    Recent(usize),
    Report,
    Reset,
    SelfRecognition { confidence: f64, context: String },
    Direct { axis: Neurotransmitter, delta: f64, reason: String },
    Export(Option<PathBuf>),
    Trigger(&'a str),
}

/// A command claims the line only when its arguments fit. Anything else,
/// including prose that happens to start with a command word, is trigger text.
fn parse_command(line: &str) -> Command<'_> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    match (command, rest.as_slice()) {
        ("quit" | "exit", []) => Command::Quit,
        ("help", []) => Command::Help,
        ("state", []) => Command::State,
        ("recent", []) => Command::Recent(5),
        ("recent", [n]) => match n.parse() {
            Ok(n) => Command::Recent(n),
            Err(_) => Command::Trigger(line),
        },
        ("report", []) => Command::Report,
        ("reset", []) => Command::Reset,
        ("self", []) => Command::Usage("self <confidence> [context]"),
        ("self", [confidence, context @ ..]) => match confidence.parse() {
            Ok(confidence) => Command::SelfRecognition {
                confidence,
                context: context.join(" "),
            },
            Err(_) => Command::Trigger(line),
        },
        ("direct", []) => Command::Usage("direct <axis> <delta> [reason]"),
        ("direct", args) => match parse_direct(args) {
            Ok((axis, delta, reason)) => Command::Direct { axis, delta, reason },
            Err(e) => {
                tracing::debug!("Treating '{}' as trigger text: {:#}", line, e);
                Command::Trigger(line)
            }
        },
        ("export", []) => Command::Export(None),
        ("export", [path]) => Command::Export(Some(PathBuf::from(*path))),
        _ => Command::Trigger(line),
    }
}

fn parse_direct(words: &[&str]) -> anyhow::Result<(Neurotransmitter, f64, String)> {
    let [axis, delta, reason @ ..] = words else {
        anyhow::bail!("usage: direct <axis> <delta> [reason]");
    };
    let axis: Neurotransmitter = axis.parse().map_err(anyhow::Error::msg)?;
    let delta: f64 = delta
        .parse()
        .with_context(|| format!("invalid delta '{}'", delta))?;
    let reason = if reason.is_empty() {
        "manual".to_string()
    } else {
        reason.join(" ")
    };
    Ok((axis, delta, reason))
}

fn default_export_path(engine: &AffectEngine, config: &NeucogarConfig) -> PathBuf {
    config
        .export
        .directory
        .join(format!("session_{}.json", engine.session_id().simple()))
}

fn export(engine: &AffectEngine, path: &Path) -> anyhow::Result<()> {
    engine
        .export(path)
        .with_context(|| format!("failed to export session to {}", path.display()))?;
    println!("Session exported to {}", path.display());
    Ok(())
}

fn print_state(state: &EmotionalState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        let c = &state.coordinates;
        println!(
            "[{}] {} / {} ({:.2}) {} | R {:+.3} S {:+.3} A {:+.3}",
            state.seq,
            state.primary,
            state.sub_emotion,
            state.intensity,
            state.detail,
            c.reward,
            c.stability,
            c.arousal
        );
    }
    Ok(())
}

fn print_report(report: &SessionReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    println!("{}", report.summary());
    println!("  states: {}  stability: {:.2}", report.total_states, report.stability_score);
    for (emotion, count) in &report.emotion_frequency {
        println!("  {:<12} {}", emotion, count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_commands() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("reset"), Command::Reset);
        assert_eq!(parse_command("recent"), Command::Recent(5));
        assert_eq!(parse_command("recent 3"), Command::Recent(3));
        assert_eq!(parse_command("export"), Command::Export(None));
    }

    #[test]
    fn test_command_words_in_prose_are_triggers() {
        for line in [
            "reset the mood please, that was scary",
            "quit being stupid",
            "help me I am lost",
            "state of the art praise",
            "report card was great",
            "recent news is sad",
            "self esteem is low",
            "direct insult from a stranger",
            "export the whole mess",
        ] {
            assert_eq!(parse_command(line), Command::Trigger(line), "{}", line);
        }
    }

    #[test]
    fn test_arguments_parse() {
        assert_eq!(
            parse_command("self 0.9 mirror"),
            Command::SelfRecognition {
                confidence: 0.9,
                context: "mirror".to_string()
            }
        );
        assert_eq!(
            parse_command("direct dopamine 0.2 coherent scene"),
            Command::Direct {
                axis: Neurotransmitter::Dopamine,
                delta: 0.2,
                reason: "coherent scene".to_string()
            }
        );
        assert_eq!(parse_command("self"), Command::Usage("self <confidence> [context]"));
    }
}
