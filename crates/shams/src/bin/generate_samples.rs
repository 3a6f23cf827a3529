use anyhow::{Context, Result};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Set default values
    let original_path = args.get(1).map(String::as_str).unwrap_or("original.txt");
    let modified_path = args.get(2).map(String::as_str).unwrap_or("modified.txt");
    let line_count = match args.get(3) {
        Some(count) => count
            .parse::<usize>()
            .with_context(|| format!("invalid line count {:?}", count))?,
        None => 5000,
    };

    println!("Generating sample documents for comparison:");
    println!("  Original: {}", original_path);
    println!("  Modified: {}", modified_path);
    println!("  Lines: {}", line_count);

    // Seeded so runs are reproducible
    let mut rng = StdRng::seed_from_u64(42);

    let original = generate_document(line_count, &mut rng);
    let modified = modify_document(&original, &mut rng);

    write_lines(original_path, &original)?;
    write_lines(modified_path, &modified)?;

    println!("Done: {} and {} lines written.", original.len(), modified.len());
    Ok(())
}

fn random_words(rng: &mut StdRng) -> String {
    let words = rng.gen_range(3..10);
    (0..words)
        .map(|_| {
            let length = rng.gen_range(2..9);
            (0..length)
                .map(|_| rng.sample(Alphanumeric) as char)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lines of random words, numbered so most lines are unique
fn generate_document(line_count: usize, rng: &mut StdRng) -> Vec<String> {
    (0..line_count)
        .map(|i| format!("{}: {}", i + 1, random_words(rng)))
        .collect()
}

/// Apply edits to about 5% of the lines: rewrite a word, delete, insert,
/// or move a short block further down
fn modify_document(lines: &[String], rng: &mut StdRng) -> Vec<String> {
    let mut modified = Vec::with_capacity(lines.len());
    let mut moved: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !rng.gen_bool(0.05) {
            modified.push(lines[i].clone());
            // Drop a pending moved block back in somewhere later
            if !moved.is_empty() && rng.gen_bool(0.1) {
                modified.append(&mut moved);
            }
            i += 1;
            continue;
        }

        match rng.gen_range(0..4) {
            0 => {
                // Modify one word of the line
                let mut words: Vec<String> =
                    lines[i].split(' ').map(str::to_string).collect();
                let index = rng.gen_range(1..words.len().max(2));
                if let Some(word) = words.get_mut(index) {
                    *word = word.to_uppercase();
                }
                modified.push(words.join(" "));
            }
            1 => {
                // Delete the line
            }
            2 => {
                // Insert a new line before this one
                modified.push(format!("inserted: {}", random_words(rng)));
                modified.push(lines[i].clone());
            }
            _ => {
                // Take a block of up to three lines out to reinsert later
                let end = (i + rng.gen_range(1..4)).min(lines.len());
                moved.extend(lines[i..end].iter().cloned());
                i = end;
                continue;
            }
        }
        i += 1;
    }

    modified.append(&mut moved);
    modified
}

fn write_lines<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}
