//! One-off deck generation from the command line.

use anyhow::Result;
use console::style;

use pitchdeck_types::deck::DECK_LEN;
use pitchdeck_types::idea::IdeaFields;

use crate::cli::GenerateArgs;
use crate::state::AppState;

/// Run the pipeline once and print the deck.
pub async fn generate(state: &AppState, args: GenerateArgs, json: bool) -> Result<()> {
    let idea = IdeaFields::from(args).validate()?;
    let generated = state.generator.generate(&idea).await?;
    let usage = state.usage.summary();

    if json {
        let mut output = serde_json::json!({ "slides": generated.deck.slides });
        if state.config.usage.report {
            output["usage"] = serde_json::to_value(&usage)?;
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {}",
        style("⚡").bold(),
        style(&idea.name).cyan().bold()
    );
    println!();

    for (index, slide) in generated.deck.slides.iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("{}/{DECK_LEN}", index + 1)).dim(),
            style(slide.title).bold()
        );
        for line in slide.content.lines() {
            println!("    {line}");
        }
        println!();
    }

    if state.config.usage.report {
        println!("  {}", style("── Usage ──").dim());
        println!("  Tokens used:    {}", format_tokens(usage.total_tokens));
        println!("  Estimated cost: {}", style(&usage.estimated_cost).yellow());
        println!();
    }

    Ok(())
}

fn format_tokens(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
