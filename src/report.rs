//! Text and JSON rendering of catalog categories.
//!
//! The pretty layout is fixed: a banner, then for each category a blank line,
//! `TITLE:`, an underline of `-` one longer than the title, and a four-line
//! block per entry preceded by a blank line.

use crate::catalog::{self, Category, MethodEntry};
use crate::error::CatalogResult;
use crate::flow::FlowType;
use crate::instrument_block;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub const BANNER_TITLE: &str = "ETHEREUM METHOD SIGNATURES AND DESCRIPTIONS";
pub const BANNER_RULE_WIDTH: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(BANNER_RULE_WIDTH))
}

/// Render one category with all of its entries.
pub fn write_category<W: Write>(out: &mut W, category: &Category) -> io::Result<()> {
    write_block(out, category.title, category.methods)
}

/// Render a titled block for an arbitrary sequence of entries.
pub fn write_block<'a, W, I>(out: &mut W, title: &str, methods: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a MethodEntry>,
{
    writeln!(out)?;
    writeln!(out, "{title}:")?;
    writeln!(out, "{}", "-".repeat(title.len() + 1))?;

    for method in methods {
        writeln!(out)?;
        writeln!(out, "{}:", method.name)?;
        writeln!(out, "  Signature: {}", method.signature_or_na())?;
        writeln!(out, "  Description: {}", method.description)?;
        writeln!(out, "  Flow Type: {}", method.flow)?;
    }
    Ok(())
}

/// Full catalog in the pretty layout, as printed by a bare invocation.
pub fn render_catalog() -> String {
    let mut buf = Vec::new();
    Report::full()
        .write(&mut buf, OutputFormat::Pretty)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("catalog text is UTF-8")
}

/// A selection of categories, optionally narrowed to one flow type.
#[derive(Debug, Clone)]
pub struct Report {
    categories: Vec<&'static Category>,
    flow: Option<FlowType>,
}

#[derive(Serialize)]
struct JsonCategory<'a> {
    key: &'static str,
    title: &'static str,
    methods: Vec<&'a MethodEntry>,
}

impl Report {
    pub fn new(categories: Vec<&'static Category>) -> Self {
        Self {
            categories,
            flow: None,
        }
    }

    /// Every category, in catalog order.
    pub fn full() -> Self {
        Self::new(catalog::categories().iter().collect())
    }

    #[must_use]
    pub fn with_flow(mut self, flow: Option<FlowType>) -> Self {
        self.flow = flow;
        self
    }

    fn selected(&self, category: &'static Category) -> Vec<&'static MethodEntry> {
        category
            .methods
            .iter()
            .filter(|m| self.flow.is_none_or(|flow| m.flow == flow))
            .collect()
    }

    /// Categories with at least one entry after filtering, paired with those entries.
    pub fn sections(&self) -> Vec<(&'static Category, Vec<&'static MethodEntry>)> {
        self.categories
            .iter()
            .map(|&c| (c, self.selected(c)))
            .filter(|(_, methods)| !methods.is_empty())
            .collect()
    }

    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> CatalogResult<()> {
        instrument_block!("report::write", {
            match format {
                OutputFormat::Pretty => self.write_pretty(out)?,
                OutputFormat::Json => self.write_json(out)?,
            }
            out.flush()?;
            Ok(())
        })
    }

    fn write_pretty<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_banner(out)?;
        for (category, methods) in self.sections() {
            write_block(out, category.title, methods)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> CatalogResult<()> {
        let body: Vec<JsonCategory<'_>> = self
            .sections()
            .into_iter()
            .map(|(category, methods)| JsonCategory {
                key: category.key,
                title: category.title,
                methods,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &body)?;
        writeln!(out)?;
        Ok(())
    }
}
