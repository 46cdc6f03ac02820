use eth_method_catalog::catalog::{self, Category};
use eth_method_catalog::report::{Report, write_category};
use eth_method_catalog::{FlowType, OutputFormat};
use insta::assert_snapshot;
use regex::Regex;

fn render(category: &Category) -> String {
    let mut buf = Vec::new();
    write_category(&mut buf, category).expect("writing to a Vec should succeed");
    String::from_utf8(buf).expect("utf-8")
}

fn render_report(report: &Report, format: OutputFormat) -> String {
    let mut buf = Vec::new();
    report
        .write(&mut buf, format)
        .expect("writing to a Vec should succeed");
    String::from_utf8(buf).expect("utf-8")
}

#[test]
fn transfer_types_block() {
    let text = render(&catalog::TRANSFER_TYPES);
    assert_snapshot!(text.trim(), @r###"
    TRANSFER TYPES:
    ---------------

    NATIVE_TRANSFER:
      Signature: N/A
      Description: Direct transfer of native chain token (ETH, BNB, etc.)
      Flow Type: BOTHFLOW

    ERC20_TRANSFER:
      Signature: 0xa9059cbb
      Description: Standard ERC20 token transfer
      Flow Type: BOTHFLOW

    ERC20_TRANSFER_FROM:
      Signature: 0x23b872dd
      Description: ERC20 transfer on behalf of another address (requires approval)
      Flow Type: BOTHFLOW
    "###);
}

#[test]
fn every_block_starts_with_blank_line_title_and_underline() {
    for category in catalog::categories() {
        let text = render(category);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("{}:", category.title));
        assert_eq!(lines[2], "-".repeat(category.title.len() + 1));
    }
}

#[test]
fn underline_lengths_at_the_extremes() {
    let longest = render(&catalog::TOKEN_CREATION_METHODS);
    assert_eq!(longest.lines().nth(2).unwrap().len(), 23);

    let shortest = render(&catalog::MAKER_METHODS);
    assert_eq!(shortest.lines().nth(2).unwrap().len(), 14);

    let bridge = render(&catalog::BRIDGE_METHODS);
    assert_eq!(bridge.lines().nth(2).unwrap().len(), 15);
}

#[test]
fn one_block_per_entry() {
    for category in catalog::categories() {
        let text = render(category);
        let blocks = text.matches("\n  Signature: ").count();
        assert_eq!(blocks, category.len(), "{}", category.title);
        // title line + underline + 5 lines per entry, after the leading blank
        assert_eq!(text.lines().count(), 3 + 5 * category.len());
    }
}

#[test]
fn rendered_fields_are_verbatim() {
    let flow_line = Regex::new(r"^  Flow Type: (OUTFLOW|INFLOW|BOTHFLOW)$").unwrap();
    for category in catalog::categories() {
        let text = render(category);
        let sig_lines: Vec<_> = text.lines().filter(|l| l.starts_with("  Signature: ")).collect();
        let flow_lines: Vec<_> = text.lines().filter(|l| l.starts_with("  Flow Type: ")).collect();

        for ((method, sig_line), flow) in category.methods.iter().zip(&sig_lines).zip(&flow_lines) {
            match method.signature {
                Some(sig) => assert_eq!(*sig_line, format!("  Signature: {sig}")),
                None => assert_eq!(*sig_line, "  Signature: N/A"),
            }
            assert!(flow_line.is_match(flow), "{flow}");
            assert_eq!(*flow, format!("  Flow Type: {}", method.flow));
        }
    }
}

#[test]
fn category_selection_keeps_requested_order() {
    let picked = catalog::resolve_categories(&["compound", "curve"]).unwrap();
    let text = render_report(&Report::new(picked), OutputFormat::Pretty);
    let compound = text.find("COMPOUND METHODS:").unwrap();
    let curve = text.find("CURVE METHODS:").unwrap();
    assert!(compound < curve);
    assert!(!text.contains("TRANSFER TYPES:"));
    assert!(text.starts_with("ETHEREUM METHOD SIGNATURES AND DESCRIPTIONS\n\n===="));
}

#[test]
fn flow_filter_keeps_only_matching_entries() {
    let report = Report::full().with_flow(Some(FlowType::Inflow));
    let text = render_report(&report, OutputFormat::Pretty);
    assert!(text.contains("  Flow Type: INFLOW"));
    assert!(!text.contains("  Flow Type: OUTFLOW"));
    assert!(!text.contains("  Flow Type: BOTHFLOW"));
    assert!(!text.contains("GOVERNANCE METHODS:"));
    assert_eq!(text.matches("  Flow Type: INFLOW").count(), 21);
}

#[test]
fn json_report_shape() {
    let picked = catalog::resolve_categories(&["transfer_types"]).unwrap();
    let text = render_report(&Report::new(picked), OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

    let category = &value[0];
    assert_eq!(category["key"], "transfer_types");
    assert_eq!(category["title"], "TRANSFER TYPES");

    let native = &category["methods"][0];
    assert_eq!(native["name"], "NATIVE_TRANSFER");
    assert!(native["signature"].is_null());
    assert_eq!(native["flow_type"], "BOTHFLOW");
    assert_eq!(category["methods"][1]["signature"], "0xa9059cbb");
}

#[test]
fn json_report_covers_whole_catalog() {
    let text = render_report(&Report::full(), OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    let categories = value.as_array().unwrap();
    assert_eq!(categories.len(), 16);
    let entries: usize = categories
        .iter()
        .map(|c| c["methods"].as_array().unwrap().len())
        .sum();
    assert_eq!(entries, 74);
}
