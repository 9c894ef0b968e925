//! Wordle Player - CLI
//!
//! Plays recorded Wordle games autonomously and prints the share block.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;
use wordle_player::{
    catalog::InMemoryCatalog,
    commands::{evaluate_guess, play_game, run_benchmark},
    core::{GameId, ShareCard, Word},
    output::{print_benchmark_result, print_evaluation, print_play_result, print_share_card},
    player::{Player, PlayerConfig},
    puzzles::GameBook,
    wordlists::{
        WORDS,
        loader::{load_games, load_words, words_from_slice},
    },
};

#[derive(Parser, Debug)]
#[command(
    name = "wordle_player",
    about = "Plays recorded Wordle games by constraint narrowing and prints the share result",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Game file with one "<game> <word>" per line
    #[arg(short = 'g', long, global = true, env = "WORDLE_GAMES_FILE")]
    games: Option<PathBuf>,

    /// Fixed first guess used instead of a catalog lookup
    #[arg(short = 'f', long, global = true, env = "WORDLE_FIRST_WORD")]
    opener: Option<String>,

    /// Seed for guess selection, for reproducible games
    #[arg(short = 's', long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game and print its share block (default: latest game)
    Play {
        /// Game number to play
        game: Option<GameId>,

        /// Show each guess with colored feedback
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one guess against a solution
    Evaluate {
        /// The solution word
        solution: String,

        /// The guess to score
        guess: String,
    },

    /// Find a Wordle score in a chat message
    Parse {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Play every recorded game and summarize the scores
    Benchmark {
        /// Limit number of games to play (most recent first)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the game book from the -g flag
fn load_book(path: Option<&PathBuf>) -> Result<GameBook> {
    match path {
        Some(path) => {
            let book = load_games(path)?;
            info!("Loaded {} games from {}", book.len(), path.display());
            Ok(book)
        }
        None => Ok(GameBook::new()),
    }
}

/// Load the catalog words from the -w flag
fn load_catalog_words(mode: &str) -> Result<Vec<Word>> {
    let words = match mode {
        "embedded" => words_from_slice(WORDS),
        path => load_words(path)?,
    };
    info!("Loaded {} catalog words", words.len());
    Ok(words)
}

fn player_config(opener: Option<&str>) -> Result<PlayerConfig> {
    match opener.map(str::trim).filter(|o| !o.is_empty()) {
        Some(opener) => {
            let word = Word::new(opener).with_context(|| format!("Invalid opener {opener:?}"))?;
            Ok(PlayerConfig::with_opener(word))
        }
        None => Ok(PlayerConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("Command line options: {cli:?}");

    // Default to playing the latest game if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        game: None,
        verbose: false,
    });

    match command {
        Commands::Evaluate { solution, guess } => {
            let result = evaluate_guess(&solution, &guess).map_err(|e| anyhow!(e))?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Parse { text } => {
            let card = ShareCard::find(&text.join(" "));
            print_share_card(card.as_ref());
            Ok(())
        }
        Commands::Play { game, verbose } => {
            let book = load_book(cli.games.as_ref())?;
            let words = load_catalog_words(&cli.words)?;
            let config = player_config(cli.opener.as_deref())?;
            run_play_command(&book, words, config, cli.seed, game, verbose)
        }
        Commands::Benchmark { limit } => {
            let book = load_book(cli.games.as_ref())?;
            let words = load_catalog_words(&cli.words)?;
            let config = player_config(cli.opener.as_deref())?;
            run_benchmark_command(&book, words, config, cli.seed, limit);
            Ok(())
        }
    }
}

fn build_catalog(book: &GameBook, words: Vec<Word>, seed: Option<u64>) -> InMemoryCatalog<'_> {
    let mut catalog = match seed {
        Some(seed) => InMemoryCatalog::seeded(words, book, seed),
        None => InMemoryCatalog::new(words, book),
    };

    // Past answers are always valid guesses
    for (_, word) in book.solutions() {
        catalog.add_word(word.clone());
    }
    catalog
}

fn run_play_command(
    book: &GameBook,
    words: Vec<Word>,
    config: PlayerConfig,
    seed: Option<u64>,
    game: Option<GameId>,
    verbose: bool,
) -> Result<()> {
    let catalog = build_catalog(book, words, seed);
    let player = Player::new(&catalog, book, config);

    let outcome = play_game(&player, book, game).map_err(|e| anyhow!(e))?;
    print_play_result(&outcome, verbose);
    Ok(())
}

fn run_benchmark_command(
    book: &GameBook,
    words: Vec<Word>,
    config: PlayerConfig,
    seed: Option<u64>,
    limit: Option<usize>,
) {
    let catalog = build_catalog(book, words, seed);
    let player = Player::new(&catalog, book, config);

    let mut games: Vec<GameId> = book.solutions().iter().map(|&(game, _)| game).collect();
    games.reverse();
    if let Some(limit) = limit {
        games.truncate(limit);
    }

    println!("Playing {} recorded games...", games.len());
    let result = run_benchmark(&player, &games, true);
    print_benchmark_result(&result);
}
