use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::leads::types::LeadAttributes;
use crate::scoring::{Grade, ScoreResult};

/// A lead with its calculated score for display
pub struct ScoredLead<'a> {
    pub lead: &'a LeadAttributes,
    pub result: &'a ScoreResult,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a final score with three decimals ("0.750")
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Format a priority category as a badge ("P5" down to "P1")
pub fn format_category(category: u8, use_colors: bool) -> String {
    let badge = format!("P{}", category);
    if !use_colors {
        return badge;
    }
    match category {
        5 => badge.green().bold().to_string(),
        4 => badge.green().to_string(),
        3 => badge.yellow().to_string(),
        _ => badge.dimmed().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a lead name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format leads as a ranked table with columns: Index, Category, Score, Name, Id
/// No headers (minimal format)
/// Index column: 3 chars (fits "99."), right-aligned
pub fn format_ranked_table(leads: &[ScoredLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let category_width = 2;
    let score_width = 5;
    let separator = "  ";

    leads
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let category_str = format_category(scored.result.category, use_colors);
            let score_str = format_score(scored.result.final_score);
            let id_str = format!("#{}", scored.lead.id);

            // Leave the rest of the line for the name.
            let fixed_width = index_width
                + 1
                + category_width
                + score_width
                + separator.len() * 3
                + id_str.len();
            let name = scored.lead.display_name();
            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&name, width - fixed_width)
                } else {
                    truncate_name(&name, 20)
                }
            } else {
                name
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    category_str,
                    separator,
                    score_str.bold(),
                    separator,
                    name,
                    separator,
                    id_str.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, category_str, separator, score_str, separator, name, separator,
                    id_str
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: id, category, final score, name (no headers, no colors)
pub fn format_tsv(leads: &[ScoredLead]) -> String {
    if leads.is_empty() {
        return String::new();
    }

    leads
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}",
                scored.lead.id,
                scored.result.category,
                format_score(scored.result.final_score),
                scored.lead.display_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_grade(label: &str, grade: &Grade) -> String {
    format!(
        "    {:<10} low {:.2}  medium {:.2}  high {:.2}",
        label, grade.low, grade.medium, grade.high
    )
}

/// Format a single scored lead with the full multi-line breakdown
/// (for the show subcommand and verbose mode)
pub fn format_lead_detail(scored: &ScoredLead, use_colors: bool) -> String {
    let lead = scored.lead;
    let result = scored.result;
    let b = &result.breakdown;

    let mut lines = Vec::new();

    let title = format!("{} (#{})", lead.display_name(), lead.id);
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title);
    }

    lines.push(format!(
        "  Budget: {:.0}  Urgency: {}  Intent: {}  Interest: {}  Customer: {:?}",
        lead.budget_potential,
        lead.urgency,
        lead.effective_intent(),
        lead.interest_level,
        lead.customer_type,
    ));
    if let Some(sentiment) = &lead.sentiment {
        lines.push(format!(
            "  Sentiment: {:.1} (1 practical .. 5 emotional)",
            sentiment.practical_emotional
        ));
    }

    lines.push(format!(
        "  Weights: budget {:.3}  urgency {:.3}  intent {:.3}  interest {:.3}  customer {:.3}",
        b.weights.budget_potential,
        b.weights.urgency,
        b.weights.intent,
        b.weights.interest_level,
        b.weights.customer_type,
    ));

    lines.push("  Memberships (after business rules):".to_string());
    lines.push(format_grade("profit", &b.adjusted.profit));
    lines.push(format_grade("urgency", &b.adjusted.urgency));
    lines.push(format_grade("intent", &b.adjusted.intent));
    lines.push(format_grade("interest", &b.adjusted.interest));

    lines.push(format!(
        "  Likelihood: {:.3}  Business value: {:.3}  Combined: {:.3}",
        result.likelihood, result.business_value, result.combined,
    ));
    lines.push(format!(
        "  Tie-breaker: {:.4}  Recency: {:.4}",
        b.tie_breaker, b.recency,
    ));

    let verdict = format!(
        "  Final: {}  Category: {}",
        format_score(result.final_score),
        format_category(result.category, use_colors)
    );
    lines.push(verdict);

    lines.join("\n")
}
