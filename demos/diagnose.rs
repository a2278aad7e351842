use clap::Parser;

use mhs_rs::brute::{enumerate_all, search_space_size};
use mhs_rs::compare::compare_heuristics;
use mhs_rs::config::SearchConfig;
use mhs_rs::diagnosis::{to_bracket_string, Diagnosis};
use mhs_rs::family::ConflictFamily;
use mhs_rs::heuristic::HeuristicKind;
use mhs_rs::hstree::HsTree;
use mhs_rs::score::score;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Conflict sets, each a comma-separated list of components (e.g. `A,B`).
    #[arg(value_name = "CONFLICT", required = true)]
    conflicts: Vec<String>,

    /// Conflict-selection heuristic (smallest, most_frequent, random).
    #[arg(long, value_name = "NAME", default_value = "smallest")]
    heuristic: HeuristicKind,

    /// Seed for the random heuristic.
    #[arg(long, value_name = "INT", default_value = "0")]
    seed: u64,

    /// Maximum number of search nodes.
    #[arg(long, value_name = "INT")]
    max_nodes: Option<usize>,

    /// Maximum diagnosis cardinality.
    #[arg(long, value_name = "INT")]
    max_depth: Option<usize>,

    /// Run all heuristics and print a comparison table.
    #[arg(long)]
    compare: bool,

    /// Cross-check the result with brute-force enumeration.
    #[arg(long)]
    verify: bool,

    /// Guessed diagnoses to score, as `A,B;C` (sets separated by `;`).
    #[arg(long, value_name = "SETS")]
    guess: Option<String>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn split_components(s: &str) -> Vec<&str> {
    s.split(|c: char| c == ',' || c.is_whitespace()).filter(|c| !c.is_empty()).collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let family = ConflictFamily::new(args.conflicts.iter().map(|c| split_components(c)))?;
    println!("Conflict sets: {}", family);
    if !family.is_minimal() {
        log::warn!("conflict family is not minimal, reduced form: {}", family.reduced());
    }

    let mut config = SearchConfig::new();
    if let Some(n) = args.max_nodes {
        config = config.with_max_nodes(n);
    }
    if let Some(d) = args.max_depth {
        config = config.with_max_depth(d);
    }

    if args.compare {
        let cmp = compare_heuristics(&family, &HeuristicKind::ALL, args.seed, &config)?;
        print!("{}", cmp);
        if let Some((min, max, percent)) = cmp.node_spread() {
            println!("Variation: {} nodes ({:.1}% difference)", max - min, percent);
        }
        if cmp.all_agree() {
            println!("All heuristics found the same minimal hitting sets.");
        } else {
            println!("Heuristics disagree on the minimal hitting sets!");
        }
    }

    let tree = HsTree::new(config);
    let outcome = tree.search(&family, &mut args.heuristic.build(args.seed))?;
    println!("Minimal hitting sets ({}): {}", args.heuristic, to_bracket_string(&outcome.diagnoses));
    println!("Search: {}", outcome.stats);

    if args.verify {
        println!("Brute force over {} candidate subsets...", search_space_size(&family));
        let reference = enumerate_all(&family)?;
        println!("Hitting sets: {}", to_bracket_string(&reference.all));
        if reference.minimal == outcome.diagnoses {
            println!("Brute force agrees.");
        } else {
            println!("Brute force disagrees: {}", to_bracket_string(&reference.minimal));
        }
    }

    if let Some(guess) = &args.guess {
        let guessed = ConflictFamily::new(guess.split(';').map(split_components))?;
        let guessed: Vec<Diagnosis> = guessed.iter().map(|c| Diagnosis::new(c.components().iter().cloned())).collect();
        println!("Your score: {:.2}%", score(&outcome.diagnoses, &guessed));
    }

    Ok(())
}
