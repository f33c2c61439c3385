use clap::{Parser, Subcommand};
use dhruv_porutham::{
    LordScoring, MatchConfig, MatchReport, Nakshatra, Role, all_records,
    calculate_compatibility_with, count_from_bride_to_groom, rank_partners, try_find_by_name,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "porutham", about = "Nakshatra porutham (birth-star compatibility) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full ten-porutham report for a couple
    Match {
        /// Groom's nakshatra (e.g. "Aswini", "Purva Phalguni")
        groom: String,
        /// Bride's nakshatra
        bride: String,
        /// Reject unknown star names instead of substituting Aswini
        #[arg(long)]
        strict: bool,
        /// Score Rasi Adhipathi with the natural friendship table
        #[arg(long)]
        lord_friendship: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Position of the groom's star counted from the bride's star
    Count {
        /// Groom's nakshatra
        groom: String,
        /// Bride's nakshatra
        bride: String,
    },
    /// List the 27 nakshatras and their attributes
    Stars,
    /// Rank every partner star against one star
    Rank {
        /// Nakshatra to rank partners for
        star: String,
        /// Role of the given star: groom (default) or bride
        #[arg(long, default_value = "groom")]
        role: String,
        /// Show only the best N partners
        #[arg(long)]
        top: Option<usize>,
        /// Score Rasi Adhipathi with the natural friendship table
        #[arg(long)]
        lord_friendship: bool,
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
    },
}

fn build_config(strict: bool, lord_friendship: bool) -> MatchConfig {
    let config = if strict {
        MatchConfig::strict()
    } else {
        MatchConfig::legacy()
    };
    if lord_friendship {
        config.with_lord_scoring(LordScoring::Friendship)
    } else {
        config
    }
}

fn require_star(name: &str) -> Nakshatra {
    match try_find_by_name(name) {
        Ok(record) => record.nakshatra,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run `porutham stars` for the list of valid names.");
            std::process::exit(1);
        }
    }
}

fn parse_role(s: &str) -> Role {
    match s.to_lowercase().as_str() {
        "groom" | "boy" => Role::Groom,
        "bride" | "girl" => Role::Bride,
        _ => {
            eprintln!("Invalid role: {s}");
            eprintln!("Valid: groom, bride");
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_report(report: &MatchReport) {
    let g = &report.groom_star;
    let b = &report.bride_star;
    println!(
        "Groom: {} (#{}, {}, {}, {} rajju, lord {})",
        g.name,
        g.id,
        g.rashi,
        g.gana.name(),
        g.rajju.name(),
        g.lord.english_name()
    );
    println!(
        "Bride: {} (#{}, {}, {}, {} rajju, lord {})",
        b.name,
        b.id,
        b.rashi,
        b.gana.name(),
        b.rajju.name(),
        b.lord.english_name()
    );
    println!("Count from bride to groom: {}", report.count);
    println!();
    println!("{:<16} {:>5}  {:<11} {}", "Porutham", "Score", "Status", "Measures");
    println!("{}", "-".repeat(64));
    for r in &report.results {
        println!(
            "{:<16} {:>5.1}  {:<11} {}",
            r.name,
            r.score,
            r.status.name(),
            r.description
        );
    }
    println!("{}", "-".repeat(64));
    println!("Total: {:.1} / {:.0}", report.total_score, report.total_possible);
    println!("Verdict: {}", report.verdict);
}

fn print_stars() {
    println!(
        "{:>2}  {:<18} {:<10} {:<12} {:<9} {:<9} {:<6} {:<8} Vedhai",
        "#", "Name", "Rashi", "Sign", "Gana", "Yoni", "Rajju", "Lord"
    );
    for r in all_records() {
        let vedhai: Vec<&str> = r.vedhai.iter().map(|n| n.name()).collect();
        println!(
            "{:>2}  {:<18} {:<10} {:<12} {:<9} {:<9} {:<6} {:<8} {}",
            r.id,
            r.name,
            r.rashi.name(),
            r.rashi.western_name(),
            r.gana.name(),
            r.yoni.name(),
            r.rajju.name(),
            r.lord.english_name(),
            vedhai.join(", ")
        );
    }
}

fn print_ranking(reports: &[MatchReport], role: Role) {
    println!(
        "{:>4}  {:<18} {:>5}  {:>6}  Verdict",
        "Rank", "Partner", "Total", "Passed"
    );
    for (i, r) in reports.iter().enumerate() {
        let partner = match role {
            Role::Groom => &r.bride_star,
            Role::Bride => &r.groom_star,
        };
        println!(
            "{:>4}  {:<18} {:>5.1}  {:>6}  {}",
            i + 1,
            partner.name,
            r.total_score,
            r.passed(),
            r.verdict
        );
    }
}

/// `RUST_LOG` replaces the default filter entirely; without it only warnings
/// (such as the unknown-star fallback) reach stderr.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Match {
            groom,
            bride,
            strict,
            lord_friendship,
            json,
        } => {
            let config = build_config(strict, lord_friendship);
            let report = calculate_compatibility_with(&groom, &bride, &config)
                .unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
            if json {
                print_json(&report);
            } else {
                print_report(&report);
            }
        }

        Commands::Count { groom, bride } => {
            let g = require_star(&groom);
            let b = require_star(&bride);
            println!(
                "{} is star {} counted from {}",
                g,
                count_from_bride_to_groom(b, g),
                b
            );
        }

        Commands::Stars => print_stars(),

        Commands::Rank {
            star,
            role,
            top,
            lord_friendship,
            json,
        } => {
            let star = require_star(&star);
            let role = parse_role(&role);
            let config = build_config(true, lord_friendship);
            let mut reports = rank_partners(star, role, &config);
            if let Some(n) = top {
                reports.truncate(n);
            }
            if json {
                print_json(reports.as_slice());
            } else {
                print_ranking(&reports, role);
            }
        }
    }
}
