use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use hilo::events::{Channel, EventHandler};
use hilo::game::{GameEngine, StatsManager};
use hilo::model::{
    AttemptLimit, Difficulty, GameEngineEvent, GameError, GameMode, GuessOutcome, Proximity,
    Statistics,
};
use hilo::storage::FileStore;

const APP_DIR: &str = "hilo";

struct ConsolePresenter;

impl EventHandler<GameEngineEvent> for ConsolePresenter {
    fn handle_event(&mut self, event: &GameEngineEvent) {
        match event {
            GameEngineEvent::RoundStarted {
                difficulty,
                mode,
                attempt_limit,
                drawn,
                pool_size,
            } => {
                println!(
                    "Guess the number between {} and {} - {} mode, {} attempts.",
                    difficulty.min(),
                    difficulty.max(),
                    mode,
                    attempt_limit
                );
                println!("Numbers used this session: {}/{}", drawn, pool_size);
            }
            GameEngineEvent::PoolExhausted { difficulty } => {
                println!(
                    "Every number between {} and {} has been used! Change difficulty to reshuffle.",
                    difficulty.min(),
                    difficulty.max()
                );
            }
            GameEngineEvent::StatsChanged(stats) => print_stats(stats),
            // Guess outcomes are rendered by the command loop, which also
            // has the error channel.
            GameEngineEvent::GuessEvaluated(_) => (),
        }
    }
}

fn print_stats(stats: &Statistics) {
    println!(
        "High score: {} | Won: {} | Lost: {} | Played: {}",
        stats.high_score, stats.games_won, stats.games_lost, stats.total_games
    );
}

fn print_help() {
    println!("Type a number to guess. Other commands:");
    println!("  difficulty easy|medium|hard");
    println!("  mode classic|challenge|expert");
    println!("  restart | stats | help | quit");
}

fn hint_line(proximity: &Proximity) -> &'static str {
    match proximity {
        Proximity::VeryHot => "Very hot, you are extremely close!",
        Proximity::Hot => "Hot, getting closer.",
        Proximity::Warm => "Warm, keep going.",
        Proximity::Cold => "Cold, far away.",
    }
}

fn render_remaining(remaining: &AttemptLimit) {
    if let AttemptLimit::Limited(n) = remaining {
        println!("{} attempts remaining.", n);
    }
}

fn render_outcome(outcome: &GuessOutcome) {
    match outcome {
        GuessOutcome::Correct { attempts, score } => {
            let noun = if *attempts == 1 { "attempt" } else { "attempts" };
            println!(
                "Correct! You got it in {} {} for {} points. Type restart to play again.",
                attempts, noun, score
            );
        }
        GuessOutcome::Lost { secret } => {
            println!(
                "Out of attempts! The number was {}. Type restart to play again.",
                secret
            );
        }
        GuessOutcome::Higher {
            proximity,
            remaining,
        } => {
            println!("The secret number is higher. {}", hint_line(proximity));
            render_remaining(remaining);
        }
        GuessOutcome::Lower {
            proximity,
            remaining,
        } => {
            println!("The secret number is lower. {}", hint_line(proximity));
            render_remaining(remaining);
        }
        GuessOutcome::Exhausted => {
            println!("No secret available - the whole range has been used. Change difficulty to reshuffle.");
        }
    }
}

fn render_error(error: &GameError) {
    match error {
        GameError::Validation(e) => println!("Invalid guess: {}", e),
        GameError::ExhaustedPool => {
            println!("No numbers left to draw. Change difficulty to reshuffle.")
        }
    }
}

fn handle_line(engine: &mut GameEngine, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let head = match words.next() {
        Some(head) => head,
        None => return true,
    };

    match (head.to_lowercase().as_str(), words.next()) {
        ("quit", _) | ("exit", _) => return false,
        ("help", _) => print_help(),
        ("stats", _) => print_stats(engine.stats()),
        ("restart", _) => {
            if let Err(e) = engine.restart() {
                render_error(&e);
            }
        }
        ("difficulty", Some(name)) => match Difficulty::from_name(name) {
            Some(difficulty) => {
                if let Err(e) = engine.change_difficulty(difficulty) {
                    render_error(&e);
                }
            }
            None => println!("Unknown difficulty {:?}. Try easy, medium or hard.", name),
        },
        ("mode", Some(name)) => match GameMode::from_name(name) {
            Some(mode) => {
                if let Err(e) = engine.change_mode(mode) {
                    render_error(&e);
                }
            }
            None => println!("Unknown mode {:?}. Try classic, challenge or expert.", name),
        },
        ("difficulty", None) => println!("Usage: difficulty easy|medium|hard"),
        ("mode", None) => println!("Usage: mode classic|challenge|expert"),
        _ => match engine.submit_input(line) {
            Ok(outcome) => render_outcome(&outcome),
            Err(e) => render_error(&e),
        },
    }
    true
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn main() {
    env_logger::init();

    let store = FileStore::in_user_data_dir(APP_DIR);
    let stats_manager = StatsManager::new(Box::new(store));
    let (emitter, observer) = Channel::new();

    let presenter = Rc::new(RefCell::new(ConsolePresenter));
    let _subscription = observer.subscribe(move |event| {
        presenter.borrow_mut().handle_event(event);
    });

    let mut engine = GameEngine::new(stats_manager, emitter, GameEngine::seed_from_env());
    print_stats(engine.stats());
    print_help();
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if !handle_line(&mut engine, &line) {
            break;
        }
        prompt();
    }
    println!("Thanks for playing!");
}
