use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use kolabcal_core::{Converter, ErrorHandler, FromNative, MapperConfig, ToNative, kcal, kolab};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToNative,
    FromNative,
    RoundTrip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Event,
    Todo,
    Journal,
    Contact,
}

pub fn run(direction: Direction, kind: Kind, input: Option<&Path>, config: MapperConfig) -> Result<()> {
    let document = read_input(input)?;

    let log = Arc::new(ErrorHandler::new());
    let converter = Converter::new(Arc::clone(&log), config);
    let output = convert_document(direction, kind, &document, &converter)?;
    println!("{output}");

    for diagnostic in log.messages() {
        eprintln!("{}", diagnostic.render());
    }

    if converter.failed() {
        anyhow::bail!(
            "Conversion reported {} level problems: {}",
            log.worst_severity(),
            log.worst_message()
        );
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("Failed to read stdin")?;
            Ok(document)
        }
    }
}

pub fn convert_document(
    direction: Direction,
    kind: Kind,
    document: &str,
    converter: &Converter,
) -> Result<String> {
    match kind {
        Kind::Event => convert::<kolab::Event, kcal::Event>(direction, document, converter),
        Kind::Todo => convert::<kolab::Todo, kcal::Todo>(direction, document, converter),
        Kind::Journal => convert::<kolab::Journal, kcal::Journal>(direction, document, converter),
        Kind::Contact => convert::<kolab::Contact, kcal::Addressee>(direction, document, converter),
    }
}

fn convert<T, N>(direction: Direction, document: &str, converter: &Converter) -> Result<String>
where
    T: ToNative<Native = N> + FromNative<Native = N> + Serialize + DeserializeOwned,
    N: Serialize + DeserializeOwned,
{
    let output = match direction {
        Direction::ToNative => {
            let neutral: T = parse(document, "neutral")?;
            serde_json::to_string_pretty(&neutral.to_native(converter))?
        }
        Direction::FromNative => {
            let native: N = parse(document, "native")?;
            serde_json::to_string_pretty(&T::from_native(&native, converter))?
        }
        Direction::RoundTrip => {
            let neutral: T = parse(document, "neutral")?;
            let native = neutral.to_native(converter);
            serde_json::to_string_pretty(&T::from_native(&native, converter))?
        }
    };
    Ok(output)
}

fn parse<V: DeserializeOwned>(document: &str, model: &str) -> Result<V> {
    serde_json::from_str(document).with_context(|| format!("Failed to parse {model} document"))
}
