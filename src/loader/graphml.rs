//! GraphML import.
//!
//! Reads `<node id="…"><data>label</data></node>` and
//! `<edge source="…" target="…"><data>label</data></edge>` elements. The
//! first `<data>` child supplies the label; other GraphML structure (keys,
//! graph attributes, nested graphs) is ignored. Node types are recovered
//! from ids shaped `('Type', 'key')`.

use once_cell::sync::Lazy;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;

use crate::error::AppError;
use crate::models::{Edge, EntityType, Graph, Node};

/// Leading quoted segment of an encoded id: `('Researcher', …` → `Researcher`.
static TYPE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\('([^']+)'").expect("valid regex"));

/// Element whose `<data>` label is being collected.
enum Pending {
    Node {
        id: String,
        label: Option<String>,
    },
    Edge {
        source: String,
        target: String,
        label: Option<String>,
    },
}

impl Pending {
    fn set_label_once(&mut self, text: &str) {
        let label = match self {
            Pending::Node { label, .. } | Pending::Edge { label, .. } => label,
        };
        if label.is_none() {
            *label = Some(text.to_string());
        }
    }

    fn finish(self, nodes: &mut Vec<Node>, links: &mut Vec<Edge>) {
        match self {
            Pending::Node { id, label } => nodes.push(typed_node(id, label.unwrap_or_default())),
            Pending::Edge {
                source,
                target,
                label,
            } => links.push(Edge::new(source, target, label.unwrap_or_default())),
        }
    }
}

/// Parse a GraphML document into a validated graph.
pub fn parse(xml: &str) -> Result<Graph, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut nodes = Vec::new();
    let mut links = Vec::new();
    let mut current: Option<Pending> = None;
    let mut in_data = false;
    let mut text = String::new();

    loop {
        match reader.read_event().map_err(AppError::graphml)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"node" => current = Some(pending_node(&e)?),
                b"edge" => current = Some(pending_edge(&e)?),
                b"data" if current.is_some() => {
                    in_data = true;
                    text.clear();
                }
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"node" => pending_node(&e)?.finish(&mut nodes, &mut links),
                b"edge" => pending_edge(&e)?.finish(&mut nodes, &mut links),
                b"data" => {
                    if let Some(pending) = current.as_mut() {
                        pending.set_label_once("");
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_data => {
                text.push_str(&t.unescape().map_err(AppError::graphml)?);
            }
            Event::CData(t) if in_data => {
                text.push_str(&String::from_utf8_lossy(&t));
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"data" if in_data => {
                    in_data = false;
                    if let Some(pending) = current.as_mut() {
                        pending.set_label_once(text.trim());
                    }
                }
                b"node" | b"edge" => {
                    if let Some(pending) = current.take() {
                        pending.finish(&mut nodes, &mut links);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    let graph = Graph::new(nodes, links);
    graph.validate()?;
    tracing::debug!(
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        "Parsed GraphML"
    );
    Ok(graph)
}

/// Entity type encoded in an id, or an empty type when the id is not encoded.
pub fn type_from_id(id: &str) -> EntityType {
    TYPE_PREFIX
        .captures(id)
        .and_then(|c| c.get(1))
        .map(|m| EntityType::from(m.as_str().to_string()))
        .unwrap_or_else(|| EntityType::Other(String::new()))
}

fn typed_node(id: String, label: String) -> Node {
    let entity_type = type_from_id(&id);
    Node::new(id, entity_type).with_label(label)
}

fn pending_node(e: &BytesStart<'_>) -> Result<Pending, AppError> {
    Ok(Pending::Node {
        id: attribute(e, "id")?,
        label: None,
    })
}

fn pending_edge(e: &BytesStart<'_>) -> Result<Pending, AppError> {
    Ok(Pending::Edge {
        source: attribute(e, "source")?,
        target: attribute(e, "target")?,
        label: None,
    })
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<String, AppError> {
    for attr in e.attributes() {
        let attr = attr.map_err(AppError::graphml)?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(attr.unescape_value().map_err(AppError::graphml)?.into_owned());
        }
    }
    Err(AppError::GraphMl {
        message: format!(
            "<{}> is missing attribute '{}'",
            String::from_utf8_lossy(e.local_name().as_ref()),
            name
        ),
    })
}
