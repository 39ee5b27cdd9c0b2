use clap::Parser;
use presidents_quiz::config::GameSettings;
use presidents_quiz::core::engine::QuizEngine;
use presidents_quiz::domain::ports::{AssetSource, ScoreStore};
use presidents_quiz::domain::roster;
use presidents_quiz::utils::logger;
use presidents_quiz::{AlwaysPresent, CliConfig, JsonFileStore, LocalAssets, MemoryStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting presidents-quiz");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match GameSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let roster = roster::builtin();
    if let Err(e) = settings.validate_for_roster(roster.len()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let rng = match settings.seed {
        Some(seed) => {
            tracing::debug!("using fixed RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let assets: Box<dyn AssetSource> = if Path::new(&settings.portraits_dir).is_dir() {
        Box::new(LocalAssets::new(&settings.portraits_dir))
    } else {
        tracing::debug!(
            "no portraits directory at {}, keeping every tile selectable",
            settings.portraits_dir
        );
        Box::new(AlwaysPresent)
    };

    let outcome = if settings.persist {
        let store = JsonFileStore::new(&settings.data_dir);
        let engine = QuizEngine::new(roster, &settings, store, rng)?;
        run(engine, &settings, assets.as_ref())
    } else {
        tracing::info!("Persistence disabled, scores are kept in memory only");
        let engine = QuizEngine::new(roster, &settings, MemoryStore::new(), rng)?;
        run(engine, &settings, assets.as_ref())
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Game session failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run<S: ScoreStore, R: Rng>(
    mut engine: QuizEngine<S, R>,
    settings: &GameSettings,
    assets: &dyn AssetSource,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("🇺🇸 US Presidents Quiz");
    println!("Pick the portrait that matches the named president.");

    loop {
        show_hall_of_fame(&engine);

        // Name prompt with an inline validation message, retried until
        // the name is accepted.
        loop {
            let Some(name) = prompt(&mut lines, "\nEnter your name: ")? else {
                return Ok(());
            };
            match engine.start(&name) {
                Ok(()) => break,
                Err(e) => println!("❌ {}", e.user_friendly_message()),
            }
        }

        while !engine.state().finished() {
            let round = engine.state().round;
            let score = engine.state().score;
            let total = engine.rules().total_rounds;
            let Some(selection) = engine.current_round() else {
                anyhow::bail!("no round dealt while the game is in progress");
            };
            let target = selection.target.clone();
            let Some(view) = engine.board(assets) else {
                anyhow::bail!("no round dealt while the game is in progress");
            };

            println!("\n📜 Round {}/{}  |  Score: {}", round, total, score);
            println!("Find: {} ({})", target.display_name, target.years_in_service);
            for (i, tile) in view.tiles.iter().enumerate() {
                if tile.enabled {
                    println!("  {:>2}. {}", i + 1, tile.portrait);
                } else {
                    println!("  {:>2}. {} (unavailable)", i + 1, tile.portrait);
                }
            }

            let picked = loop {
                let Some(input) = prompt(&mut lines, "Your pick (number, q quits): ")? else {
                    return Ok(());
                };
                let input = input.trim().to_string();
                if input.eq_ignore_ascii_case("q") {
                    println!("👋 Thanks for playing!");
                    return Ok(());
                }
                match input.parse::<usize>() {
                    Ok(n) if n >= 1 && n <= view.tiles.len() => {
                        if let Some(candidate) = view.pick(n - 1) {
                            break candidate.clone();
                        }
                        println!("❌ That tile is unavailable, pick another.");
                    }
                    _ => println!("❌ Enter a number between 1 and {}.", view.tiles.len()),
                }
            };

            let feedback = engine.submit(picked.id)?;
            if feedback.is_correct {
                println!(
                    "🎉 ✅ Correct! +{} points",
                    engine.rules().points_per_correct
                );
                pause(settings.pacing.correct_delay_ms);
            } else {
                println!(
                    "❌ Not quite. You picked {}, not {}.",
                    picked.display_name, feedback.target.display_name
                );
                pause(settings.pacing.incorrect_delay_ms);
            }
            if !feedback.finished {
                pause(settings.pacing.settle_delay_ms);
            }
        }

        let state = engine.state();
        let best = engine.rules().total_rounds * engine.rules().points_per_correct;
        println!("\n🏁 Game over, {}!", state.player_name);
        println!("Final score: {} of {}", state.score, best);
        for outcome in &state.answers {
            let mark = if outcome.is_correct { "✅" } else { "❌" };
            println!("  {} Round {:>2}: {}", mark, outcome.round, outcome.target.display_name);
        }

        let Some(again) = prompt(&mut lines, "\nPlay again? (y/n): ")? else {
            return Ok(());
        };
        if again.trim().eq_ignore_ascii_case("y") {
            engine.play_again()?;
        } else {
            println!("👋 Thanks for playing!");
            return Ok(());
        }
    }
}

fn show_hall_of_fame<S: ScoreStore, R: Rng>(engine: &QuizEngine<S, R>) {
    let entries = engine.hall_of_fame();
    if entries.is_empty() {
        return;
    }
    println!("\n🏆 Hall of Fame");
    for (i, entry) in entries.iter().take(5).enumerate() {
        println!(
            "  {}. {} with {} pts ({})",
            i + 1,
            entry.player_name,
            entry.score,
            entry.date.format("%Y-%m-%d")
        );
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> anyhow::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}
