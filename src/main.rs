use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank leads from a file by priority (highest category first)
    Rank {
        /// Lead batch file (YAML, or JSON with a .json extension)
        file: PathBuf,

        /// Emit tab-separated values for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show the full scoring breakdown for one lead by its rank index
    Show {
        /// Lead batch file (YAML, or JSON with a .json extension)
        file: PathBuf,

        /// Index of the lead to show (1-based, as shown in rank)
        index: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "leadscore")]
#[command(about = "Sales lead prioritization CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/leadscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match leadscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = leadscore::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let file = match &cli.command {
        Commands::Rank { file, .. } | Commands::Show { file, .. } => file.clone(),
    };

    // Load leads
    let leads = match leadscore::leads::load_leads(&file) {
        Ok(leads) => leads,
        Err(e) => {
            eprintln!("Lead file error: {}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} leads from {}", leads.len(), file.display());
    }

    if leads.is_empty() {
        eprintln!("No leads in {}.", file.display());
        eprintln!("Add leads to the file:");
        eprintln!("  leads:");
        eprintln!("    - id: 1");
        eprintln!("      budget_potential: 120000");
        eprintln!("      urgency: 4");
        eprintln!("      raw_intent: 3");
        eprintln!("      interest_level: 2");
        eprintln!("      customer_type: new");
        std::process::exit(EXIT_CONFIG);
    }

    // Reject the whole batch on any out-of-domain attribute: scoring is
    // all-or-nothing per run.
    if let Err(errors) = leadscore::leads::validate_leads(&leads) {
        eprintln!("Invalid lead attributes:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Score all leads
    let mut scored_leads: Vec<_> = leads
        .into_iter()
        .map(|lead| {
            let result = leadscore::scoring::calculate_score(&lead, &effective_scoring);
            (lead, result)
        })
        .collect();

    if cli.verbose {
        for (lead, result) in &scored_leads {
            eprintln!(
                "  {}: likelihood {:.3}, business value {:.3}, final {:.3} -> category {}",
                lead.id, result.likelihood, result.business_value, result.final_score,
                result.category
            );
        }
    }

    // Sort by final score descending; the per-lead tie-break terms make
    // collisions rare, id order settles the rest deterministically.
    scored_leads.sort_by(|a, b| {
        let score_cmp = b
            .1
            .final_score
            .partial_cmp(&a.1.final_score)
            .unwrap_or(std::cmp::Ordering::Equal);
        if score_cmp != std::cmp::Ordering::Equal {
            return score_cmp;
        }
        a.0.id.tie_key().cmp(&b.0.id.tie_key())
    });

    let scored_refs: Vec<leadscore::output::ScoredLead> = scored_leads
        .iter()
        .map(|(lead, result)| leadscore::output::ScoredLead { lead, result })
        .collect();

    let use_colors = leadscore::output::should_use_colors();

    match cli.command {
        Commands::Rank { tsv, .. } => {
            if tsv {
                let output = leadscore::output::format_tsv(&scored_refs);
                if !output.is_empty() {
                    println!("{}", output);
                }
            } else if cli.verbose {
                // Verbose mode: full breakdown per lead
                for scored in &scored_refs {
                    println!("{}", leadscore::output::format_lead_detail(scored, use_colors));
                    println!();
                }
            } else {
                // Normal mode: ranked table
                let output = leadscore::output::format_ranked_table(&scored_refs, use_colors);
                println!("{}", output);
            }
        }
        Commands::Show { index, .. } => {
            // Validate index bounds (1-based)
            if index < 1 || index > scored_refs.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    scored_refs.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            let scored = &scored_refs[index - 1];
            println!("{}", leadscore::output::format_lead_detail(scored, use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
