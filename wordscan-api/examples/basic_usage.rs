//! Basic usage of the wordscan API

use wordscan_api::{walk_text, BoundaryWalker, Config, SimpleWordTokenizer, Text, WordTokenizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Single cursor moves
    println!("=== Method 1: Cursor Moves ===");
    let tokenizer = SimpleWordTokenizer::new();
    let text = Text::new("One. Two.");

    if let Some(next) = tokenizer.next_word_boundary(&text, 3) {
        println!("next word after 3 starts at {next}: {:?}", text.slice_from(next));
    }
    if let Some(previous) = tokenizer.previous_word_boundary(&text, 9) {
        println!("previous boundary before 9 is {previous}");
    }

    // Method 2: Walk every boundary
    println!("\n=== Method 2: Forward Walk ===");
    let output = walk_text("Hello, world. How are you?");
    println!("Found boundaries at {:?}", output.char_offsets());

    // Method 3: Configured backward walk
    println!("\n=== Method 3: Backward Walk ===");
    let config = Config::builder().backward().limit(Some(3)).build()?;
    let output = BoundaryWalker::with_config(config).walk_text("これは日本語です。テストです。");
    println!("Last three boundaries: {:?}", output.char_offsets());

    // Method 4: Typing continuation
    println!("\n=== Method 4: Continuation ===");
    for next in ['d', ' ', '.'] {
        println!(
            "\"wor\" + {next:?} continues: {}",
            tokenizer.is_word_continuation("wor", next)
        );
    }

    Ok(())
}
