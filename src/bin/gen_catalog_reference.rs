//! Generate `docs/CATALOG_REFERENCE.md` from the static catalog.
//!
//! Usage:
//!   cargo run --bin gen_catalog_reference > docs/CATALOG_REFERENCE.md

use eth_method_catalog::catalog::{self, categories, flow_totals, shared_signatures};

fn escape_md_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

fn main() {
    let total = catalog::iter_methods().count();
    let shared = shared_signatures();

    println!("# Ethereum Method Catalog Reference\n");
    println!("**Status:** Generated (do not edit by hand)\n");
    println!("This file is generated from the static catalog.\n");
    println!("Regenerate with:\n");
    println!("```bash");
    println!("cargo run --bin gen_catalog_reference > docs/CATALOG_REFERENCE.md");
    println!("```\n");

    println!("## Summary\n");
    println!("- Categories: {}", categories().len());
    println!("- Entries: {total}");
    for (flow, count) in flow_totals() {
        println!("- {flow}: {count}");
    }
    println!("- Shared selectors: {}\n", shared.len());

    for category in categories() {
        println!("## {} (`{}`)\n", category.title, category.key);
        println!("| Method | Selector | Flow | Description |");
        println!("|--------|----------|------|-------------|");
        for m in category.methods {
            println!(
                "| `{}` | `{}` | {} | {} |",
                m.name,
                m.signature_or_na(),
                m.flow,
                escape_md_cell(m.description)
            );
        }
        println!();
    }

    println!("## Shared selectors\n");
    println!("| Selector | Used by |");
    println!("|----------|---------|");
    for (selector, owners) in shared {
        let owners: Vec<String> = owners
            .iter()
            .map(|m| format!("`{}/{}`", m.category.key, m.method.name))
            .collect();
        println!("| `{selector}` | {} |", owners.join(", "));
    }
}
