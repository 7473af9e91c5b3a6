//! Command-line front end for the 24-point game.
//!
//! `play` runs an interactive session on standard input, one event per line.
//! `deal`, `solve` and `eval` expose the dealer, the exhaustive solver and the
//! expression pipeline on their own.

use anyhow::{Context, bail};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{BufRead, Write};
use std::time::Duration;
use twentyfour::{
    Game, GameConfig, Operator, Phase, SubmitOutcome, SystemClock, evaluate, grammar, tokenize,
};
use twentyfour_deck::{Dealer, Hand, ScreenStrategy, solver};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    settings: Settings,

    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct Settings {
    /// How dealt hands are screened: `table` or `exhaustive`
    #[arg(long, global = true, default_value_t = ScreenStrategy::ExclusionTable)]
    strategy: ScreenStrategy,

    /// Draws attempted before dealing the fallback hand
    #[arg(long, global = true, default_value_t = 1000)]
    max_attempts: u32,

    /// Hand dealt when every draw was rejected
    #[arg(long, global = true, value_delimiter = ',', default_values_t = [1u8, 2, 3, 4])]
    fallback: Vec<u8>,

    /// Seed for a reproducible sequence of hands
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Value to reach
    #[arg(long, global = true, default_value_t = 24.0)]
    target: f64,

    /// Largest distance from the target counted as a win
    #[arg(long, global = true, default_value_t = 1e-4)]
    tolerance: f64,

    /// Points awarded per win
    #[arg(long, global = true, default_value_t = 10)]
    points: u32,

    /// Milliseconds between a win and the next deal
    #[arg(long, global = true, default_value_t = 2000)]
    next_round_ms: u64,

    /// Milliseconds a message stays visible
    #[arg(long, global = true, default_value_t = 3000)]
    message_ms: u64,
}

impl Settings {
    fn to_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig {
            target: self.target,
            tolerance: self.tolerance,
            points_per_win: self.points,
            next_round_delay: Duration::from_millis(self.next_round_ms),
            message_ttl: Duration::from_millis(self.message_ms),
            seed: self.seed,
            ..GameConfig::default()
        }
        .with_strategy(self.strategy)
        .with_fallback(&self.fallback)?;
        config.dealer.max_attempts = self.max_attempts;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plays interactively, reading one event per line
    Play,
    /// Prints dealt hands
    Deal {
        /// Number of hands
        #[arg(default_value_t = 1)]
        count: usize,

        /// Also print one solution per hand
        #[arg(short, long)]
        solve: bool,
    },
    /// Lists every solution for four cards
    Solve {
        /// Card values in 1..=13
        #[arg(num_args = 4, required = true)]
        cards: Vec<u8>,
    },
    /// Tokenizes, validates and evaluates an expression
    Eval {
        /// Expression such as `8/(3-8/3)`
        expr: String,
    },
}

/// One line of input in a `play` session.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    Card(usize),
    Operator(Operator),
    Open,
    Close,
    Delete,
    Clear,
    Submit,
    New,
    Help,
    Quit,
}

fn parse_event(line: &str) -> Option<Event> {
    let event = match line.trim() {
        "(" => Event::Open,
        ")" => Event::Close,
        "del" | "delete" => Event::Delete,
        "clear" => Event::Clear,
        "=" | "submit" => Event::Submit,
        "new" => Event::New,
        "help" | "?" => Event::Help,
        "quit" | "q" => Event::Quit,
        "x" | "X" => Event::Operator(Operator::Mul),
        s => match s.parse::<usize>() {
            Ok(n @ 1..=4) => Event::Card(n - 1),
            Ok(_) => return None,
            Err(_) => Event::Operator(s.parse().ok()?),
        },
    };
    Some(event)
}

const HELP: &str = "\
events: 1-4 pick a card, + - * / (or x ÷ ×) operators, ( ), del, clear, = to submit,
        new for a fresh hand, quit to leave";

fn print_state(game: &Game<SystemClock>) {
    let used = game.expression().used();
    let cards: Vec<std::string::String> = game
        .hand()
        .cards()
        .iter()
        .map(|c| {
            let mark = if used.contains(c.slot) { "*" } else { "" };
            format!("{}:{}{}", c.slot + 1, c.face, mark)
        })
        .collect();
    println!(
        "round {}  score {}  cards {}",
        game.round_number(),
        game.score(),
        cards.join(" ")
    );
    println!("  > {}", game.display());
    if let Some(message) = game.message() {
        println!("  {message}");
    }
}

fn play(config: GameConfig) -> anyhow::Result<()> {
    let mut game = Game::new(config)?;
    println!("{HELP}");
    print_state(&game);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("? ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("can't read standard input")?;
        if line.trim().is_empty() {
            game.poll();
            print_state(&game);
            continue;
        }
        let Some(event) = parse_event(&line) else {
            println!("unknown event {:?}; type help", line.trim());
            continue;
        };
        // Errors are already shown as the game's message.
        let _ = match event {
            Event::Card(slot) => game.tap_number(slot),
            Event::Operator(op) => game.tap_operator(op),
            Event::Open => game.tap_open_paren(),
            Event::Close => game.tap_close_paren(),
            Event::Delete => game.delete_last(),
            Event::Clear => game.clear(),
            Event::Submit => match game.submit() {
                Ok(SubmitOutcome::Won { .. }) => {
                    print_state(&game);
                    wait_for_next_round(&mut game);
                    Ok(())
                }
                Ok(SubmitOutcome::Wrong { .. }) => Ok(()),
                Err(e) => Err(e),
            },
            Event::New => {
                game.new_game();
                Ok(())
            }
            Event::Help => {
                println!("{HELP}");
                Ok(())
            }
            Event::Quit => break,
        };
        print_state(&game);
    }
    println!("final score {}", game.score());
    Ok(())
}

/// Sleeps through the delay after a win so the next hand appears on its own.
fn wait_for_next_round(game: &mut Game<SystemClock>) {
    use twentyfour::Clock;
    while game.phase() == Phase::Won {
        let Some(due) = game.pending_deadline() else {
            break;
        };
        std::thread::sleep(due.saturating_sub(game.clock().now()));
        game.poll();
    }
}

fn deal(config: &GameConfig, count: usize, solve: bool) {
    use rand::SeedableRng;
    let dealer = Dealer::new(config.dealer);
    let mut seeded = config.seed.map(rand::rngs::StdRng::seed_from_u64);
    for _ in 0..count {
        let hand = match seeded.as_mut() {
            Some(rng) => dealer.deal_with(rng),
            None => dealer.deal(),
        };
        if solve {
            match solver::solutions(hand.faces()).first() {
                Some(solution) => println!("{hand}  {solution}"),
                None => println!("{hand}  (no solution)"),
            }
        } else {
            println!("{hand}");
        }
    }
}

fn solve(cards: &[u8]) -> anyhow::Result<()> {
    let hand = Hand::try_from_slice(cards)?;
    let solutions = solver::solutions(hand.faces());
    if solutions.is_empty() {
        println!("{hand}: no solution");
    }
    for solution in &solutions {
        println!("{solution} = 24");
    }
    Ok(())
}

fn eval(expr: &str) -> anyhow::Result<()> {
    let tokens = tokenize(expr);
    if let Err(e) = grammar::check(&tokens) {
        bail!("invalid expression {expr:?}: {e}");
    }
    let value = evaluate(&tokens).with_context(|| format!("can't evaluate {expr:?}"))?;
    println!("{value}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.settings.to_config()?;
    log::debug!("{config:?}");

    match args.command {
        Commands::Play => play(config),
        Commands::Deal { count, solve } => {
            deal(&config, count, solve);
            Ok(())
        }
        Commands::Solve { cards } => solve(&cards),
        Commands::Eval { expr } => eval(&expr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_from_lines() {
        assert_eq!(parse_event("1"), Some(Event::Card(0)));
        assert_eq!(parse_event(" 4 "), Some(Event::Card(3)));
        assert_eq!(parse_event("5"), None);
        assert_eq!(parse_event("0"), None);
        assert_eq!(parse_event("x"), Some(Event::Operator(Operator::Mul)));
        assert_eq!(parse_event("÷"), Some(Event::Operator(Operator::Div)));
        assert_eq!(parse_event("-"), Some(Event::Operator(Operator::Sub)));
        assert_eq!(parse_event("("), Some(Event::Open));
        assert_eq!(parse_event("="), Some(Event::Submit));
        assert_eq!(parse_event("del"), Some(Event::Delete));
        assert_eq!(parse_event("quit"), Some(Event::Quit));
        assert_eq!(parse_event("hello"), None);
    }

    #[test]
    fn settings_default_to_the_classic_game() {
        let args = Args::try_parse_from(["twentyfour", "deal"]).unwrap();
        assert_eq!(args.settings.to_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn settings_reject_a_bad_fallback() {
        let args =
            Args::try_parse_from(["twentyfour", "--fallback", "1,2,3", "deal"]).unwrap();
        assert!(args.settings.to_config().is_err());
    }

    #[test]
    fn eval_reports_errors() {
        assert!(eval("8/(3-8/3)").is_ok());
        assert!(eval("5/(5-5)").is_err());
        assert!(eval("3++4").is_err());
    }
}
