// Colored terminal output for signatures, guesses and rankings.
//
// main.rs delegates all printing here so the library stays free of
// formatting concerns.

use std::path::Path;

use colored::Colorize;

use super::format_value;
use crate::scoring::Guess;
use crate::signature::{FeatureSet, Signature, Signatures};

/// Display a table of author signatures, one row per author.
pub fn display_signatures(title: &str, features: &FeatureSet, signatures: &Signatures) {
    if signatures.is_empty() {
        println!("No known authors loaded. Put one .txt file per author in the known-author directory.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {title} ({} authors) ===", signatures.len()).bold()
    );
    println!();

    for (i, feature) in features.iter().enumerate() {
        println!("  {} {}", format!("[{i}]").dimmed(), feature);
    }
    println!();

    let header: String = (0..features.len())
        .map(|i| format!("{:>8}", format!("[{i}]")))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {:<28} {}", "Author".dimmed(), header.dimmed());
    println!("  {}", "-".repeat(29 + 9 * features.len()).dimmed());

    for (author, sig) in signatures {
        println!("  {:<28} {}", author, format_row(sig));
    }
    println!();
}

/// Display one text's signature with feature names.
pub fn display_signature(label: &str, features: &FeatureSet, signature: &Signature) {
    println!("\n{}", format!("=== Signature: {label} ===").bold());
    for (feature, value) in features.iter().zip(signature.values()) {
        println!("  {:<24} {}", feature.to_string(), format_value(*value));
    }
    println!();
}

/// Display the guessed author for one unknown file.
pub fn display_guess(path: &Path, guess: Option<&Guess>) {
    match guess {
        Some(g) => println!(
            "  {}: {} {}",
            path.display(),
            g.author.bright_green().bold(),
            format!("(distance {:.4})", g.distance).dimmed()
        ),
        None => println!(
            "  {}: {}",
            path.display(),
            "no known authors to compare against".yellow()
        ),
    }
}

/// Display every author by distance for one unknown file.
pub fn display_ranking(path: &Path, ranking: &[Guess]) {
    println!("\n{}", format!("=== Ranking for {} ===", path.display()).bold());
    if ranking.is_empty() {
        println!("  {}", "no known authors to compare against".yellow());
        return;
    }

    for (i, guess) in ranking.iter().enumerate() {
        let author = if i == 0 {
            guess.author.bright_green().bold()
        } else {
            guess.author.normal()
        };
        println!("  {:>2}. {:<28} {:>10.4}", i + 1, author, guess.distance);
    }
}

fn format_row(signature: &Signature) -> String {
    signature
        .values()
        .iter()
        .map(|v| format_value(*v))
        .collect::<Vec<_>>()
        .join(" ")
}
