//! Dumps the tree-sitter AST for a JavaScript file.
//!
//! Usage:
//!   cat app.js | cargo run --bin dump_js_ast
//!   cargo run --bin dump_js_ast < app.js
//!
//! Field names are printed in front of a node when the grammar assigns one,
//! e.g. `property: property_identifier`.

use camelint_js_parser::JsParser;
use std::io::{self, Read};

fn main() {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    }

    if source.trim().is_empty() {
        eprintln!("Error: No input provided. Pipe a JavaScript file to stdin.");
        eprintln!("Usage: cat app.js | dump_js_ast");
        std::process::exit(1);
    }

    let mut parser = JsParser::new();
    let Some(result) = parser.parse(&source) else {
        eprintln!("Error: Failed to parse JavaScript source");
        std::process::exit(1);
    };

    let mut cursor = result.tree.walk();
    print_tree(&mut cursor, &source, 0);
}

fn print_tree(cursor: &mut tree_sitter::TreeCursor, source: &str, depth: usize) {
    let node = cursor.node();
    let indent = "  ".repeat(depth);
    let start = node.start_position();
    let end = node.end_position();
    let field = cursor
        .field_name()
        .map(|name| format!("{name}: "))
        .unwrap_or_default();

    if node.child_count() == 0 {
        // Leaf: show a short preview of the text
        let text: String = node
            .utf8_text(source.as_bytes())
            .unwrap_or("")
            .chars()
            .take(40)
            .map(|c| if c == '\n' { '↵' } else { c })
            .collect();
        println!(
            "{}{}{} [{}:{}-{}:{}] \"{}\"",
            indent,
            field,
            node.kind(),
            start.row + 1,
            start.column,
            end.row + 1,
            end.column,
            text
        );
    } else {
        println!(
            "{}{}{} [{}:{}-{}:{}]",
            indent,
            field,
            node.kind(),
            start.row + 1,
            start.column,
            end.row + 1,
            end.column
        );
    }

    if cursor.goto_first_child() {
        loop {
            print_tree(cursor, source, depth + 1);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}
