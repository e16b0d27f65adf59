//! Demo: syllabify and score a handful of words.
//!
//! Run with: cargo run -p syllabet-core --example score_words

use syllabet_core::{destress, pretty_print, syllabify, wcm};

fn main() {
    let words: &[(&str, &str)] = &[
        ("cat", "K AE1 T"),
        ("hello", "HH AH0 L OW1"),
        ("alaska", "AH0 L AE1 S K AH0"),
        ("street", "S T R IY1 T"),
        ("construct", "K AH0 N S T R AH1 K T"),
        ("computer", "K AH0 M P Y UW1 T ER0"),
        ("banana", "B AH0 N AE1 N AH0"),
    ];

    println!("{:<12} {:<28} {:<24} WCM", "word", "syllables", "destressed");
    for (word, pron) in words {
        let pron: Vec<String> = pron.split_whitespace().map(String::from).collect();
        match syllabify(&pron, true) {
            Ok(syllables) => {
                let score = wcm(&pron, true).expect("scored the syllabification");
                println!(
                    "{:<12} {:<28} {:<24} {}",
                    word,
                    pretty_print(&syllables),
                    pretty_print(&destress(&syllables)),
                    score
                );
            }
            Err(e) => eprintln!("{word}: {e}"),
        }
    }
}
