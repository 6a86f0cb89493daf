use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use sidenav::geometry::{Point, Size};
use sidenav::gesture::{DragPhase, DragSample, Recognizer};
use sidenav::presentation::{Layout, render};
use sidenav::{Action, NavPhase, NavigationState, PanelOptions, Side, SideNavigation};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

/// Upper bound on frames run by a `settle` event.
const MAX_SETTLE_FRAMES: usize = 10_000;

const DEMO_SCRIPT: &str = r#"
# Open the left menu with an edge drag just past halfway.
{"event":"attach","side":"left","content":"menu"}
{"event":"attach","side":"right","content":"cart","options":{"position":"front","width_percent":0.8}}
{"event":"pointer_down","x":4,"y":300}
{"event":"drag","recognizer":"left_edge","phase":"began"}
{"event":"drag","recognizer":"left_edge","phase":"changed","translation":70}
{"event":"drag","recognizer":"left_edge","phase":"ended","translation":70}
{"event":"settle"}
{"event":"state"}
# Tap the overlay to dismiss, then open the cart programmatically.
{"event":"tap","x":300,"y":400}
{"event":"settle"}
{"event":"show","side":"right"}
{"event":"settle"}
{"event":"state"}
{"event":"close","animated":false}
{"event":"state"}
"#;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("container size must be positive, got {width}x{height}")]
    Bounds { width: f64, height: f64 },
    #[error("frame length must be at least 1 ms")]
    FrameLength,
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid panel options in {path}: {source}")]
    Options { path: String, source: serde_json::Error },
    #[error("line {line}: invalid event: {source}")]
    Event { line: usize, source: serde_json::Error },
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sidenav", about = "Drive a headless side navigation container from JSON events")]
struct Cli {
    #[arg(long, env = "SIDENAV_WIDTH", default_value_t = 400.0)]
    width: f64,

    #[arg(long, env = "SIDENAV_HEIGHT", default_value_t = 800.0)]
    height: f64,

    #[arg(long, env = "SIDENAV_LEFT_OPTIONS", help = "JSON panel options for a left panel attached at startup")]
    left_options: Option<PathBuf>,

    #[arg(long, env = "SIDENAV_RIGHT_OPTIONS", help = "JSON panel options for a right panel attached at startup")]
    right_options: Option<PathBuf>,

    #[arg(long, default_value_t = 16, help = "Frame length in milliseconds for `settle` events")]
    frame_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a built-in script that opens and closes both sides.
    Demo,
    /// Apply JSON-lines events and print the resulting actions.
    Replay {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Print the layout of one side at a fixed progress.
    Layout {
        #[arg(value_parser = parse_side)]
        side: Side,
        #[arg(long, default_value_t = 1.0)]
        progress: f64,
    },
}

/// One scripted input to the container.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event {
    Attach {
        side: Side,
        content: String,
        #[serde(default)]
        options: Option<PanelOptions>,
    },
    Detach {
        side: Side,
    },
    Main {
        content: String,
    },
    Show {
        side: Side,
        #[serde(default = "animated")]
        animated: bool,
    },
    Close {
        #[serde(default = "animated")]
        animated: bool,
    },
    PointerDown {
        x: f64,
        y: f64,
    },
    Drag {
        recognizer: Recognizer,
        phase: DragPhase,
        #[serde(default)]
        translation: f64,
        #[serde(default)]
        velocity: f64,
    },
    Tap {
        x: f64,
        y: f64,
    },
    Tick {
        ms: u64,
    },
    Settle,
    Resize {
        width: f64,
        height: f64,
    },
    State,
}

fn animated() -> bool {
    true
}

/// One printed line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Action(Action<String>),
    Hit { recognizer: Option<Recognizer> },
    Snapshot { phase: NavPhase, state: NavigationState, visible_content: Option<String> },
    Layout(Layout),
}

/// The container plus the frame clock used to settle animations.
struct Host {
    nav: SideNavigation<String>,
    frame: Duration,
}

impl Host {
    fn new(bounds: Size, frame: Duration) -> Self {
        Self { nav: SideNavigation::with_main("main".to_owned(), bounds), frame }
    }

    fn apply(&mut self, event: Event) -> Result<Vec<Output>, CliError> {
        let actions = match event {
            Event::Attach { side, content, options } => {
                self.nav.attach_side(side, content, options.unwrap_or_default())
            }
            Event::Detach { side } => self.nav.detach_side(side),
            Event::Main { content } => self.nav.set_main_content(content),
            Event::Show { side, animated } => self.nav.show_side(side, animated),
            Event::Close { animated } => self.nav.close_visible_side(animated),
            Event::PointerDown { x, y } => {
                return Ok(vec![Output::Hit { recognizer: self.nav.recognizer_at(Point::new(x, y)) }]);
            }
            Event::Drag { recognizer, phase, translation, velocity } => {
                self.nav.on_drag(recognizer, phase, DragSample::new(translation, velocity))
            }
            Event::Tap { x, y } => self.nav.on_tap_at(Point::new(x, y)),
            Event::Tick { ms } => self.nav.advance(Duration::from_millis(ms)),
            Event::Settle => self.settle(),
            Event::Resize { width, height } => self.nav.set_bounds(checked_bounds(width, height)?),
            Event::State => return Ok(vec![self.snapshot()]),
        };
        Ok(actions.into_iter().map(Output::Action).collect())
    }

    fn settle(&mut self) -> Vec<Action<String>> {
        let mut actions = Vec::new();
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.nav.animation_id().is_none() {
                break;
            }
            actions.extend(self.nav.advance(self.frame));
        }
        actions
    }

    fn snapshot(&self) -> Output {
        Output::Snapshot {
            phase: self.nav.phase(),
            state: *self.nav.state(),
            visible_content: self.nav.visible_content().cloned(),
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    let bounds = checked_bounds(cli.width, cli.height)?;
    let frame = frame_length(cli.frame_ms)?;
    let left = cli.left_options.as_deref().map(load_options).transpose()?;
    let right = cli.right_options.as_deref().map(load_options).transpose()?;

    if let Command::Layout { side, progress } = cli.command {
        let options = match side {
            Side::Left => left,
            Side::Right => right,
        };
        return print_output(&Output::Layout(render(side, &options.unwrap_or_default(), bounds, progress)));
    }

    let mut host = Host::new(bounds, frame);
    for (side, options) in [(Side::Left, left), (Side::Right, right)] {
        if let Some(options) = options {
            let content = format!("{side:?}").to_lowercase();
            for output in host.apply(Event::Attach { side, content, options: Some(options) })? {
                print_output(&output)?;
            }
        }
    }

    match cli.command {
        Command::Demo => run_script(&mut host, DEMO_SCRIPT.as_bytes()),
        Command::Replay { input } => {
            if input == "-" {
                run_script(&mut host, io::stdin().lock())
            } else {
                let file = File::open(&input).map_err(|source| CliError::Read { path: input.clone(), source })?;
                run_script(&mut host, BufReader::new(file))
            }
        }
        Command::Layout { .. } => Ok(()),
    }
}

/// Container size from the command line or a `resize` event; both sides must be positive.
fn checked_bounds(width: f64, height: f64) -> Result<Size, CliError> {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok(Size::new(width, height))
    } else {
        Err(CliError::Bounds { width, height })
    }
}

fn frame_length(ms: u64) -> Result<Duration, CliError> {
    if ms == 0 {
        return Err(CliError::FrameLength);
    }
    Ok(Duration::from_millis(ms))
}

fn load_options(path: &Path) -> Result<PanelOptions, CliError> {
    let display = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| CliError::Read { path: display.clone(), source })?;
    PanelOptions::from_json(&text).map_err(|source| CliError::Options { path: display, source })
}

fn run_script(host: &mut Host, reader: impl BufRead) -> Result<(), CliError> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let event = parse_event(&line).map_err(|source| CliError::Event { line: index + 1, source })?;
        let Some(event) = event else {
            continue;
        };
        tracing::debug!(?event, "applying event");
        for output in host.apply(event)? {
            print_output(&output)?;
        }
    }
    Ok(())
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
fn parse_event(line: &str) -> Result<Option<Event>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

fn parse_side(raw: &str) -> Result<Side, String> {
    match raw.to_ascii_lowercase().as_str() {
        "left" => Ok(Side::Left),
        "right" => Ok(Side::Right),
        other => Err(format!("expected `left` or `right`, got `{other}`")),
    }
}

fn print_output(output: &Output) -> Result<(), CliError> {
    let rendered = serde_json::to_string(output)?;
    println!("{rendered}");
    Ok(())
}
