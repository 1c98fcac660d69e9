// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Synthetic dataset generation.
//!
//! Emits three categories of payloads into one flat directory:
//! random binary blobs, small XML user records, and short text paragraphs.
//! The binary blobs are deliberately larger than any OAEP plaintext limit,
//! so that category exercises the per-message failure path.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{BenchError, BenchResult};

/// Sizes a random blob is drawn from.
const RANDOM_SIZES: [usize; 3] = [1024, 2048, 4096];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Ivan", "John",
    "Katherine", "Leslie", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Whitfield",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Diffie", "Dijkstra", "Goldwasser", "Hamilton", "Hellman", "Hopper", "Johnson",
    "Knuth", "Lamport", "Liskov", "Lovelace", "McCarthy", "Perlman", "Rivest", "Shamir",
    "Sutherland", "Turing", "Wirth",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

const WORDS: &[&str] = &[
    "account", "after", "agree", "around", "become", "between", "billion", "budget", "central",
    "civil", "common", "court", "daughter", "decide", "design", "early", "economy", "energy",
    "every", "factor", "figure", "friend", "general", "ground", "happen", "history", "impact",
    "interest", "kitchen", "leader", "letter", "market", "measure", "memory", "middle", "minute",
    "nation", "network", "notice", "number", "office", "option", "others", "paper", "people",
    "picture", "policy", "present", "process", "public", "quality", "reason", "record", "region",
    "report", "return", "season", "series", "simple", "social", "source", "speech", "station",
    "strategy", "student", "system", "theory", "though", "through", "travel", "value", "village",
    "window", "within", "worker", "world", "yourself",
];

/// Counts of files written per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub random: usize,
    pub structured: usize,
    pub text: usize,
}

/// Write `per_category` files of each category into `root`.
pub fn generate_dataset<R: Rng>(
    root: &Path,
    per_category: usize,
    rng: &mut R,
) -> BenchResult<DatasetSummary> {
    std::fs::create_dir_all(root).map_err(|e| BenchError::Io {
        context: "creating dataset directory",
        source: e,
    })?;

    let mut summary = DatasetSummary::default();

    for i in 0..per_category {
        write(root, &format!("random_data_{}.bin", i), &random_payload(rng))?;
        summary.random += 1;
    }

    for i in 0..per_category {
        write(
            root,
            &format!("structured_data_{}.xml", i),
            structured_payload(rng).as_bytes(),
        )?;
        summary.structured += 1;
    }

    for i in 0..per_category {
        write(root, &format!("text_data_{}.txt", i), text_payload(rng).as_bytes())?;
        summary.text += 1;
    }

    tracing::info!(
        root = %root.display(),
        random = summary.random,
        structured = summary.structured,
        text = summary.text,
        "Generated dataset"
    );

    Ok(summary)
}

fn write(root: &Path, name: &str, contents: &[u8]) -> BenchResult<()> {
    std::fs::write(root.join(name), contents).map_err(|e| BenchError::Io {
        context: "writing dataset file",
        source: e,
    })
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn random_payload<R: Rng>(rng: &mut R) -> Vec<u8> {
    let size = RANDOM_SIZES.choose(rng).copied().unwrap_or(RANDOM_SIZES[0]);
    let mut data = vec![0u8; size];
    rng.fill(data.as_mut_slice());
    data
}

fn structured_payload<R: Rng>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let domain = pick(rng, DOMAINS);
    let age: u8 = rng.gen_range(18..=80);

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<user>\n    <name>{first} {last}</name>\n    <email>{}.{}@{domain}</email>\n    <age>{age}</age>\n</user>\n",
        first.to_lowercase(),
        last.to_lowercase(),
    )
}

fn text_payload<R: Rng>(rng: &mut R) -> String {
    let sentences = rng.gen_range(2..=4);
    let mut paragraph = Vec::with_capacity(sentences);

    for _ in 0..sentences {
        let len = rng.gen_range(4..=9);
        let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
        let mut sentence = String::new();
        if let Some(first) = words.first() {
            let mut chars = first.chars();
            if let Some(c) = chars.next() {
                sentence.push(c.to_ascii_uppercase());
                sentence.push_str(chars.as_str());
            }
        }
        for word in words.iter().skip(1) {
            sentence.push(' ');
            sentence.push_str(word);
        }
        sentence.push('.');
        paragraph.push(sentence);
    }

    paragraph.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DatasetDir, MessageSource};
    use crate::types::DatasetCategory;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_generate_dataset_layout() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("dataset");
        let mut rng = StdRng::seed_from_u64(7);

        let summary = generate_dataset(&root, 4, &mut rng).unwrap();
        assert_eq!(
            summary,
            DatasetSummary {
                random: 4,
                structured: 4,
                text: 4
            }
        );

        let dataset = DatasetDir::new(&root);
        for prefix in ["random_data", "structured_data", "text_data"] {
            let messages = dataset.load(&DatasetCategory::new(prefix).unwrap()).unwrap();
            assert_eq!(messages.len(), 4, "category {}", prefix);
        }
    }

    #[test]
    fn test_random_payload_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(RANDOM_SIZES.contains(&random_payload(&mut rng).len()));
        }
    }

    #[test]
    fn test_structured_payload_shape() {
        let mut rng = StdRng::seed_from_u64(2);
        let xml = structured_payload(&mut rng);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<name>"));
        assert!(xml.contains("@"));
        assert!(xml.trim_end().ends_with("</user>"));
    }

    #[test]
    fn test_text_payload_is_sentences() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = text_payload(&mut rng);
        assert!(text.ends_with('.'));
        assert!(text.chars().next().unwrap().is_ascii_uppercase());
    }
}
