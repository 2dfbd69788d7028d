use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use grievance_engine::analyzer::GrievanceAnalyzer;
use grievance_engine::config::{AppConfig, ConfigOverrides};
use grievance_engine::intake::GrievanceSubmission;
use grievance_engine::logging;
use grievance_engine::utils::string_utils::StringUtils;
use grievance_engine::AnalysisResult;

#[derive(Parser)]
#[command(name = "grievance-cli")]
#[command(about = "Grievance analysis engine command line interface")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, help = "Configuration file path")]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze grievance text and print the classification
    Analyze {
        #[arg(help = "Free-form grievance text", conflicts_with_all = ["title", "description"])]
        text: Option<String>,

        #[arg(short, long, help = "Submission title", requires = "description")]
        title: Option<String>,

        #[arg(short, long, help = "Submission description", requires = "title")]
        description: Option<String>,

        #[arg(short, long, help = "Output format", value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List configured categories, keywords, and suggested schemes
    Categories,

    /// Validate a configuration file
    Validate {
        #[arg(help = "Path to configuration file")]
        config_file: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if let Some(config_path) = &cli.config {
        AppConfig::load_from_file(config_path)?
    } else {
        AppConfig::load()?
    };
    ConfigOverrides::apply(&mut config);

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init_logging(&config.logging)?;

    info!("grievance-cli v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze {
            text,
            title,
            description,
            format,
        } => {
            run_analyze(&config, text, title, description, format)?;
        }
        Commands::Categories => {
            list_categories(&config);
        }
        Commands::Validate { config_file } => {
            validate_config(&config_file);
        }
    }

    Ok(())
}

fn run_analyze(
    config: &AppConfig,
    text: Option<String>,
    title: Option<String>,
    description: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let text = match (text, title, description) {
        (Some(text), _, _) => text,
        (None, Some(title), Some(description)) => {
            let submission = GrievanceSubmission::new(title, description);
            submission.validate()?;
            submission.combined_text()
        }
        _ => anyhow::bail!("provide grievance text, or both --title and --description"),
    };

    info!("Analyzing grievance: {}", StringUtils::truncate(&text, 80));

    let analyzer = GrievanceAnalyzer::new(config.analyzer.clone())?;
    let result = analyzer.analyze(&text)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_result(&result),
    }

    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("Category:   {}", result.category);
    println!("Priority:   {}", result.priority);
    println!("Confidence: {}", result.explanation.confidence);
    println!("Schemes:");
    for scheme in &result.suggested_schemes {
        println!("  - {}", scheme);
    }
    println!();
    println!("Explanation:");
    println!("  {}", result.explanation.category_detection);
    println!("  {}", result.explanation.priority_reason);
    println!("  Keyword hits:");
    for hit in &result.explanation.relevant_keywords {
        println!("    {:<20} {}", hit.category, hit.matches);
    }
}

fn list_categories(config: &AppConfig) {
    println!("{:<20} {:<10} Schemes", "Category", "Keywords");
    println!("{}", "-".repeat(72));
    for rule in &config.analyzer.categories {
        println!(
            "{:<20} {:<10} {}",
            rule.category.name(),
            rule.keywords.len(),
            rule.schemes.join("; ")
        );
    }
    println!();
    println!("High priority keywords: {}", config.analyzer.priority.high.join(", "));
    println!("Low priority keywords:  {}", config.analyzer.priority.low.join(", "));
}

fn validate_config(config_file: &str) {
    match AppConfig::load_from_file(config_file) {
        Ok(_) => println!("Configuration file is valid."),
        Err(e) => {
            error!("Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    }
}
