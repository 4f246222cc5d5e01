// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markup_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **strong**, *em* and `code` text - plus a [link](https://example.com).\n\n- Bullet point\n- Another item with {Ctrl C}\n\n> A quoted line\n> spanning two lines\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_abbreviated_content(terms: usize, paragraphs: usize) -> String {
    let mut content = String::new();

    for term in 0..terms {
        content.push_str(&format!("*[T{term}]: Term number {term}\n"));
    }
    content.push('\n');

    for paragraph in 0..paragraphs {
        let mentions: Vec<String> = (0..terms)
            .filter(|t| t % 3 == paragraph % 3)
            .map(|t| format!("T{t}"))
            .collect();
        content.push_str(&format!(
            "Paragraph {paragraph} mentions {} in passing.\n\n",
            mentions.join(", ")
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_markup_content(200)
}
