//! ddb-character CLI
//!
//! Prints D&D Beyond character data and asks OpenAI for descriptions and
//! backstories.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use ddb_character::{CharacterClient, OpenAiCompletions, Settings};

const DEMO_CHARACTER_ID: u64 = 44962573;
const RULER_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "ddb-character")]
#[command(about = "Describe D&D Beyond characters with an LLM", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Name, gender/race and class levels
    Show {
        /// D&D Beyond character ID
        character_id: u64,
    },

    /// Appearance data from the character sheet
    Appearance { character_id: u64 },

    /// Personality and background data from the character sheet
    Personality { character_id: u64 },

    /// Backstory written on the character sheet
    Backstory { character_id: u64 },

    /// Generate a physical description
    Describe { character_id: u64 },

    /// Generate a backstory
    GenerateBackstory { character_id: u64 },

    /// Run every command against one character
    Demo {
        #[arg(default_value_t = DEMO_CHARACTER_ID)]
        character_id: u64,
    },
}

type Client = CharacterClient<OpenAiCompletions>;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env().context("Configuration error")?;

    match cli.command {
        Commands::Show { character_id } => cmd_show(&client(&settings, character_id)).await,
        Commands::Appearance { character_id } => {
            cmd_appearance(&client(&settings, character_id)).await
        }
        Commands::Personality { character_id } => {
            cmd_personality(&client(&settings, character_id)).await
        }
        Commands::Backstory { character_id } => {
            cmd_backstory(&client(&settings, character_id)).await
        }
        Commands::Describe { character_id } => {
            cmd_describe(&client(&settings, character_id)).await
        }
        Commands::GenerateBackstory { character_id } => {
            cmd_generate_backstory(&client(&settings, character_id)).await
        }
        Commands::Demo { character_id } => cmd_demo(&client(&settings, character_id)).await,
    }
}

fn client(settings: &Settings, character_id: u64) -> Client {
    CharacterClient::new(character_id, Arc::new(settings.text_generator()))
        .with_api(settings.character_api())
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_show(client: &Client) -> Result<()> {
    let display = client.to_display_string().await?;
    let mut lines = display.lines();

    if let Some(name) = lines.next() {
        println!("{}", name.cyan().bold());
    }
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

async fn cmd_appearance(client: &Client) -> Result<()> {
    let appearance = client.appearance().await?;
    print_table("Character Description Data:", &appearance.entries());
    Ok(())
}

async fn cmd_personality(client: &Client) -> Result<()> {
    let personality = client.personality().await?;
    print_table("Character Personality Data:", &personality.entries());
    Ok(())
}

async fn cmd_backstory(client: &Client) -> Result<()> {
    println!("{}", client.backstory().await?);
    Ok(())
}

async fn cmd_describe(client: &Client) -> Result<()> {
    let description = client
        .generate_description()
        .await
        .context("Failed to generate description")?;
    println!("{}", description);
    Ok(())
}

async fn cmd_generate_backstory(client: &Client) -> Result<()> {
    let backstory = client
        .generate_backstory()
        .await
        .context("Failed to generate backstory")?;
    println!("{}", backstory);
    Ok(())
}

async fn cmd_demo(client: &Client) -> Result<()> {
    cmd_show(client).await?;
    print_ruler();
    cmd_appearance(client).await?;
    print_ruler();
    cmd_describe(client).await?;
    print_ruler();
    cmd_personality(client).await?;
    print_ruler();
    cmd_generate_backstory(client).await
}

// ============================================
// Output Helpers
// ============================================

fn print_table(title: &str, entries: &[(&'static str, &str)]) {
    println!("{}", title.bold());
    for (key, value) in entries {
        println!("{}:\t{}", capitalize(key).as_str().cyan(), value);
    }
}

fn print_ruler() {
    println!("{}", "-".repeat(RULER_WIDTH).dimmed());
}

/// First letter upper-cased, the rest lower-cased (`personalityTraits` -> `Personalitytraits`)
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("gender"), "Gender");
        assert_eq!(capitalize("personalPossessions"), "Personalpossessions");
        assert_eq!(capitalize("class_levels"), "Class_levels");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_demo_defaults_to_sample_character() {
        let cli = Cli::parse_from(["ddb-character", "demo"]);
        match cli.command {
            Commands::Demo { character_id } => assert_eq!(character_id, DEMO_CHARACTER_ID),
            _ => panic!("expected demo command"),
        }
    }

    #[test]
    fn test_parse_generate_backstory() {
        let cli = Cli::parse_from(["ddb-character", "generate-backstory", "12345"]);
        assert!(matches!(
            cli.command,
            Commands::GenerateBackstory { character_id: 12345 }
        ));
    }
}
