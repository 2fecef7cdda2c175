//! selkit CLI
//!
//! Build CSS selectors and exercise the object helpers from the shell.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use selkit_css::{Combinator, FragmentKind, SelectorBuilder};
use selkit_objects::{Rectangle, from_json, to_json};

#[derive(Parser, Debug)]
#[command(name = "selkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    selkit selector element=a id=x class=c1 'attr=href$=".png"' pseudo-class=focus

    # Combined selectors
    selkit selector element=div id=main + element=table id=data

    # Rectangle area
    selkit area 10 20

    # Revive a rectangle positionally from JSON
    selkit revive '{"width":10,"height":20}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from KIND=VALUE fragments and combinators
    Selector {
        /// Fragments (`element`, `id`, `class`, `attr`, `pseudo-class`,
        /// `pseudo-element`) as KIND=VALUE, separated by combinators
        /// (`+`, `~`, `>`, `descendant`)
        #[arg(value_name = "TOKEN", required = true)]
        tokens: Vec<String>,
    },

    /// Print the area of a WIDTH x HEIGHT rectangle
    Area {
        /// Rectangle width
        width: f64,
        /// Rectangle height
        height: f64,
    },

    /// Revive a rectangle from JSON, consuming values in key order
    Revive {
        /// JSON object or array, e.g. '{"width":10,"height":20}'
        #[arg(value_name = "JSON")]
        json: String,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Selector { tokens } => {
            println!("{}", build_selector(&tokens)?);
        }
        Command::Area { width, height } => {
            println!("{}", Rectangle::new(width, height).area());
        }
        Command::Revive { json } => {
            let rect: Rectangle = from_json(&json).context("failed to revive rectangle")?;
            println!("{}", to_json(&rect)?);
            println!("area: {}", rect.area());
        }
    }
    Ok(())
}

/// Fold the tokens left to right: fragments extend the current compound
/// selector, a combinator closes it and joins it to everything before.
fn build_selector(tokens: &[String]) -> Result<SelectorBuilder> {
    let mut joined: Option<(SelectorBuilder, Combinator)> = None;
    let mut current = SelectorBuilder::new();

    for token in tokens {
        if let Some((kind, value)) = token.split_once('=') {
            let kind: FragmentKind = kind
                .parse()
                .with_context(|| format!("unknown fragment kind in {token:?}"))?;
            current = current.push(kind, value)?;
        } else {
            let combinator: Combinator = token.parse()?;
            let left = close(joined.take(), current)?;
            joined = Some((left, combinator));
            current = SelectorBuilder::new();
        }
    }

    close(joined, current)
}

fn close(
    joined: Option<(SelectorBuilder, Combinator)>,
    current: SelectorBuilder,
) -> Result<SelectorBuilder> {
    if current.is_empty() {
        bail!("a combinator needs a selector on both sides");
    }
    Ok(match joined {
        Some((left, combinator)) => SelectorBuilder::combine(&left, combinator, &current),
        None => current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_compound_selector_from_tokens() {
        let sel = build_selector(&tokens(&[
            "element=a",
            "id=x",
            "class=c1",
            r#"attr=href$=".png""#,
            "pseudo-class=focus",
            "pseudo-element=before",
        ]))
        .unwrap();
        assert_eq!(sel.stringify(), r#"a#x.c1[href$=".png"]:focus::before"#);
    }

    #[test]
    fn test_combinators_fold_left_to_right() {
        let sel = build_selector(&tokens(&[
            "element=ul",
            ">",
            "element=li",
            "descendant",
            "element=a",
        ]))
        .unwrap();
        assert_eq!(sel.stringify(), "ul > li   a");
    }

    #[test]
    fn test_ordering_errors_surface() {
        let err = build_selector(&tokens(&["class=a", "element=div"])).unwrap_err();
        assert!(err.to_string().contains("Selector parts should be arranged"));
    }

    #[test]
    fn test_dangling_combinator_is_rejected() {
        assert!(build_selector(&tokens(&["element=div", "+"])).is_err());
        assert!(build_selector(&tokens(&["~", "element=div"])).is_err());
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        assert!(build_selector(&tokens(&["universal=*"])).is_err());
        assert!(build_selector(&tokens(&["element=p", "||", "element=a"])).is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["selkit", "area", "10", "20"]).unwrap();
        assert!(matches!(cli.command, Command::Area { .. }));
        assert!(run(cli).is_ok());
    }
}
