//! Primer CLI
//!
//! Build selector strings and work with rectangles from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use primer_common::warning::{set_color_enabled, warn_once};
use primer_selector::{Combinator, FragmentKind, SelectorBuilder, Stringify, combine};
use primer_shape::{decode, encode, make_rectangle, rectangle};

/// Primer: selector builder and rectangle helpers
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    primer selector element=a class=nav pseudoClass=hover

    # Two compounds joined by a child combinator
    primer selector element=ul id=menu '>' element=li

    # Attribute values may contain '='
    primer selector element=input attr=type=text

    # Area of a 10x20 rectangle, or its JSON form
    primer rect 10 20
    primer rect 10 20 --json

    # Area of a decoded rectangle
    primer area '{"width": 10, "height": 20}'
"#)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind=value` parts and combinator tokens
    Selector {
        /// `kind=value` (kind: element, id, class, attr, pseudoClass,
        /// pseudoElement) or a combinator such as '>', '+', '~' or ' '
        #[arg(value_name = "PART", required = true)]
        parts: Vec<String>,
    },

    /// Print the area of a rectangle
    Rect {
        /// Horizontal extent
        width: f64,

        /// Vertical extent
        height: f64,

        /// Print the encoded rectangle instead of its area
        #[arg(long)]
        json: bool,
    },

    /// Decode a JSON rectangle and print its area
    Area {
        /// JSON object with `width` and `height`
        #[arg(value_name = "JSON")]
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;
    set_color_enabled(color);

    match cli.command {
        Command::Selector { parts } => {
            println!("{}", build_selector(&parts)?);
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            let rect = make_rectangle(width, height);
            if json {
                println!("{}", encode(&rect)?);
            } else {
                println!("{} {}", label("area:", color), rect.area());
            }
        }
        Command::Area { text } => {
            let rect = decode(rectangle::prototype(), &text).context("invalid rectangle JSON")?;
            let area = rect.call("area").context("cannot compute area")?;
            println!("{} {area}", label("area:", color));
        }
    }

    Ok(())
}

fn label(text: &str, color: bool) -> String {
    if color {
        text.cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Split `parts` into compound selectors separated by combinator tokens and
/// join them left to right. A part without `=` is a combinator token.
fn build_selector(parts: &[String]) -> Result<String> {
    let mut compounds: Vec<SelectorBuilder> = Vec::new();
    let mut combinators: Vec<&str> = Vec::new();
    let mut current: Option<SelectorBuilder> = None;

    for part in parts {
        let Some((kind, value)) = part.split_once('=') else {
            let Some(compound) = current.take() else {
                bail!("combinator `{part}` must follow a selector part");
            };
            if Combinator::from_token(part).is_none() {
                let _ = warn_once(
                    "Selector",
                    &format!("`{part}` is not a known combinator; inserting it verbatim"),
                );
            }
            compounds.push(compound);
            combinators.push(part);
            continue;
        };

        let kind: FragmentKind = kind
            .parse()
            .with_context(|| format!("unknown fragment kind `{kind}`"))?;
        let builder = current.take().unwrap_or_default();
        let before = builder.stringify();
        current = Some(
            builder
                .append(kind, value)
                .with_context(|| format!("cannot append `{part}` after `{before}`"))?,
        );
    }

    let Some(last) = current else {
        bail!("selector must end with a `kind=value` part");
    };
    compounds.push(last);

    let mut compounds = compounds.into_iter();
    let Some(first) = compounds.next() else {
        bail!("no selector parts given");
    };
    let Some((combinator, second)) = combinators.first().zip(compounds.next()) else {
        return Ok(first.stringify());
    };

    let mut combined = combine(&first, combinator, &second);
    for (combinator, next) in combinators.iter().skip(1).zip(compounds) {
        combined = combine(&combined, combinator, &next);
    }
    Ok(combined.stringify())
}
