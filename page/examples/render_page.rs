//! Basic page generation example.
//!
//! Run with: `cargo run --example render_page`

fn main() {
    let html = kuro_page::render_page();

    let output_path = "kuro-panel.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
