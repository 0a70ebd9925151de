//! Manifest loader over the yaml-rust2 event parser
//!
//! Builds the same `Yaml` tree as `YamlLoader`, except that plain scalars with
//! a leading zero (`0440`) keep their source text. Compose reads those as
//! octal, so re-emitting them as decimal would change file modes.

use anyhow::{Context, Result};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};
use yaml_rust2::yaml::Hash;
use yaml_rust2::Yaml;

#[derive(Default)]
struct ManifestLoader {
    docs: Vec<Yaml>,
    // Open collections with their anchor ids
    stack: Vec<(Yaml, usize)>,
    // Pending key for each open mapping
    keys: Vec<Option<Yaml>>,
    anchors: HashMap<usize, Yaml>,
}

/// Load every document in `content`
pub fn load_documents(content: &str) -> Result<Vec<Yaml>> {
    let mut loader = ManifestLoader::default();
    Parser::new_from_str(content)
        .load(&mut loader, true)
        .context("Failed to parse manifest YAML")?;
    Ok(loader.docs)
}

/// `0440`, `-017`: integers YAML 1.1 readers treat as octal
fn is_leading_zero_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    digits.len() > 1 && digits.starts_with('0') && digits.bytes().all(|b| b.is_ascii_digit())
}

fn resolve_scalar(value: String, style: TScalarStyle, tag: Option<Tag>) -> Yaml {
    if style != TScalarStyle::Plain {
        return Yaml::String(value);
    }

    if let Some(tag) = tag {
        match tag.suffix.as_str() {
            "str" => return Yaml::String(value),
            "int" => {
                return value
                    .parse::<i64>()
                    .map(Yaml::Integer)
                    .unwrap_or(Yaml::BadValue)
            }
            "float" => return Yaml::Real(value),
            _ => {}
        }
    }

    if is_leading_zero_integer(&value) {
        // Emitted verbatim by YamlEmitter
        return Yaml::Real(value);
    }

    Yaml::from_str(&value)
}

impl ManifestLoader {
    fn insert_node(&mut self, node: Yaml, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }

        match self.stack.last_mut() {
            None => self.docs.push(node),
            Some((Yaml::Array(items), _)) => items.push(node),
            Some((Yaml::Hash(map), _)) => {
                if let Some(pending) = self.keys.last_mut() {
                    match pending.take() {
                        Some(key) => {
                            map.insert(key, node);
                        }
                        None => *pending = Some(node),
                    }
                }
            }
            Some(_) => {}
        }
    }

    fn close_collection(&mut self) {
        if let Some((node, anchor)) = self.stack.pop() {
            self.insert_node(node, anchor);
        }
    }
}

impl MarkedEventReceiver for ManifestLoader {
    fn on_event(&mut self, ev: Event, _mark: Marker) {
        match ev {
            Event::SequenceStart(anchor, ..) => self.stack.push((Yaml::Array(Vec::new()), anchor)),
            Event::SequenceEnd => self.close_collection(),
            Event::MappingStart(anchor, ..) => {
                self.stack.push((Yaml::Hash(Hash::new()), anchor));
                self.keys.push(None);
            }
            Event::MappingEnd => {
                self.keys.pop();
                self.close_collection();
            }
            Event::Scalar(value, style, anchor, tag) => {
                let node = resolve_scalar(value, style, tag);
                self.insert_node(node, anchor);
            }
            Event::Alias(id) => {
                let node = self.anchors.get(&id).cloned().unwrap_or(Yaml::BadValue);
                self.insert_node(node, 0);
            }
            _ => {}
        }
    }
}
