//! Runs the wave, then the void, on a line of text.
//!
//! RUST_LOG=debug voidfx --text "to stare off into the distance" --countdown 0

use clap::Parser;
use crossterm::{cursor, execute};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::io::{BufRead, Write, stdout};
use std::time::Duration;
use voidfx::animations::void::VoidRenderer;
use voidfx::animations::wave::WaveRenderer;
use voidfx::config::{VoidConfig, WaveConfig};
use voidfx::interrupt::{self, Interrupt};
use voidfx::stage::Stage;
use voidfx::{AnimationStatus, install_panic_handler};

const DEFAULT_TEXT: &str = "to stare off into the distance";

/// Feeds a line of text to the number one black hole of the universe.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Text to process. Prompted for on stdin if missing
    #[arg(short, long)]
    text: Option<String>,

    /// Seconds between two wave frames
    #[arg(long, default_value_t = 0.025)]
    delay: f64,

    /// Oscillation multiplier of the wave highlight
    #[arg(long, default_value_t = 2.0)]
    wave_speed: f64,

    /// Seconds the spiral takes to swallow the text
    #[arg(long, default_value_t = 6.0)]
    duration: f64,

    /// Seconds to count down before starting, 0 to skip
    #[arg(long, default_value_t = 3)]
    countdown: u64,

    /// Seed for a reproducible explosion
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    install_panic_handler();
    let args = Args::parse();

    let result = run(&args);
    let _ = execute!(stdout(), cursor::Show);
    match result {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::Interrupted => {
            println!("\n\nProcess interrupted.");
        }
        Err(err) => {
            println!("\nError: {err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> io::Result<()> {
    execute!(
        stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    println!("Welcome to the number one black hole of the universe.");
    println!("{}", "─".repeat(22));

    let text = match &args.text {
        Some(text) => text.trim().to_string(),
        None => prompt()?,
    };
    let text = if text.is_empty() {
        println!("Using: {DEFAULT_TEXT}");
        DEFAULT_TEXT.to_string()
    } else {
        text
    };

    // only take over Ctrl-C once we are done reading stdin
    let interrupt = interrupt::sigint()?;
    countdown(args.countdown, &interrupt)?;

    println!("Analyzing text...");
    pause(Duration::from_secs(1), &interrupt)?;
    let wave = WaveRenderer::new(WaveConfig {
        delay: args.delay,
        wave_speed: args.wave_speed,
    });
    let mut stage = Stage::stdout(interrupt.clone());
    if let AnimationStatus::Rejected(reason) = wave.run(&mut stage, &text)? {
        println!("Seriously?! You should try writing something. ({reason})");
        return Ok(());
    }

    println!("\nAnalysis complete.");
    pause(Duration::from_secs(2), &interrupt)?;
    println!("Processing...");
    pause(Duration::from_secs(1), &interrupt)?;

    // the terminal may have been resized while we were talking
    let mut stage = Stage::stdout(interrupt.clone());
    let void = VoidRenderer::new(VoidConfig::with_duration(args.duration));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    void.run(&mut stage, &text, &mut rng)?;

    println!("\nProcess completed.");
    println!("Text has been consumed.");
    Ok(())
}

fn prompt() -> io::Result<String> {
    println!("\nEnter text to process:");
    print!("> ");
    stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn countdown(seconds: u64, interrupt: &Interrupt) -> io::Result<()> {
    if seconds == 0 {
        return Ok(());
    }
    println!("\nInitializing...");
    for i in (1..=seconds).rev() {
        println!("{i}...");
        pause(Duration::from_secs(1), interrupt)?;
    }
    println!("Starting.\n");
    Ok(())
}

fn pause(duration: Duration, interrupt: &Interrupt) -> io::Result<()> {
    std::thread::sleep(duration);
    interrupt.check()
}
