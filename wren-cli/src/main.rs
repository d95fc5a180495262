//! Wren CLI - build a CSS selector from its parts
//!
//! Parts are applied in canonical order regardless of flag order, so the
//! only construction errors left are the ones the builder reports itself.
//!
//! Examples:
//!   wren -e a --id nav -c link -a 'href$=".png"' -p hover
//!   wren -c card -P before --json

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;
use wren_css::SelectorBuilder;

/// Wren — build a CSS selector string from its parts
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Element, id and a class
    wren -e div -i main -c wide

    # Attribute selectors are given without brackets
    wren -e img -a 'src$=".png"' -a alt

    # Describe the parts as JSON
    wren -c btn -p hover --json
"#)]
struct Cli {
    /// Type selector, e.g. div
    #[arg(short, long, value_name = "NAME")]
    element: Option<String>,

    /// ID selector without '#'
    #[arg(short, long, value_name = "NAME")]
    id: Option<String>,

    /// Class selector without '.' (repeatable)
    #[arg(short = 'c', long = "class", value_name = "NAME")]
    classes: Vec<String>,

    /// Attribute selector without brackets, e.g. 'href^=https' (repeatable)
    #[arg(short = 'a', long = "attr", value_name = "ATTR")]
    attributes: Vec<String>,

    /// Pseudo-class without ':' (repeatable)
    #[arg(short = 'p', long = "pseudo-class", value_name = "NAME")]
    pseudo_classes: Vec<String>,

    /// Pseudo-element without '::'
    #[arg(short = 'P', long, value_name = "NAME")]
    pseudo_element: Option<String>,

    /// Print the selector and its parts as JSON
    #[arg(short, long)]
    json: bool,
}

/// JSON output: the rendered selector next to its parts.
#[derive(Serialize)]
struct Report<'a> {
    selector: String,
    #[serde(flatten)]
    parts: &'a SelectorBuilder,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let builder = build(&cli)?;

    if cli.json {
        let report = Report {
            selector: builder.stringify(),
            parts: &builder,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{builder}");
    }

    Ok(())
}

/// Apply the flags to a fresh builder in canonical part order.
fn build(cli: &Cli) -> Result<SelectorBuilder> {
    let mut builder = SelectorBuilder::new();
    if let Some(element) = &cli.element {
        builder = builder.element(element)?;
    }
    if let Some(id) = &cli.id {
        builder = builder.id(id)?;
    }
    for class in &cli.classes {
        builder = builder.class(class)?;
    }
    for attribute in &cli.attributes {
        builder = builder.attr(attribute)?;
    }
    for pseudo_class in &cli.pseudo_classes {
        builder = builder.pseudo_class(pseudo_class)?;
    }
    if let Some(pseudo_element) = &cli.pseudo_element {
        builder = builder.pseudo_element(pseudo_element)?;
    }

    if builder.is_empty() {
        bail!(
            "no selector parts given; pass at least one of --element, --id, --class, --attr, --pseudo-class or --pseudo-element"
        );
    }
    Ok(builder)
}
