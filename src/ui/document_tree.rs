//! Read-only expandable table of the documents on the visible page.

use std::collections::HashSet;

use iced::alignment::Vertical;
use iced::widget::{Button, Column, Container, Row, Space, Text, container};
use iced::{Color, Element, Length};
use mongodb::bson::{Bson, Document};

use crate::Message;

#[derive(Debug, Default)]
pub struct DocumentTree {
    roots: Vec<DocumentNode>,
    expanded: HashSet<usize>,
}

#[derive(Debug)]
struct DocumentNode {
    id: usize,
    key: String,
    kind: NodeKind,
}

#[derive(Debug)]
enum NodeKind {
    Document(Vec<DocumentNode>),
    Array(Vec<DocumentNode>),
    Scalar { display: String, type_label: &'static str },
}

struct TreeRow<'a> {
    depth: usize,
    node: &'a DocumentNode,
    expanded: bool,
}

impl DocumentTree {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the tree for one page. `first_ordinal` is the 1-based position
    /// of the page's first document in the full result set, so row labels
    /// number documents absolutely across pages.
    pub fn from_documents(documents: &[Document], first_ordinal: usize, expand_first: bool) -> Self {
        let mut next_id = 0usize;
        let roots: Vec<DocumentNode> = documents
            .iter()
            .enumerate()
            .map(|(offset, document)| {
                let key = root_label(first_ordinal + offset, document);
                DocumentNode::from_bson(key, &Bson::Document(document.clone()), &mut next_id)
            })
            .collect();

        let mut expanded = HashSet::new();
        if expand_first {
            if let Some(first) = roots.first() {
                expanded.insert(first.id);
            }
        }

        Self { roots, expanded }
    }

    pub fn toggle(&mut self, node_id: usize) {
        if self.expanded.contains(&node_id) {
            self.expanded.remove(&node_id);
        } else if container_exists(&self.roots, node_id) {
            self.expanded.insert(node_id);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let row_color_a = Color::from_rgb8(0xfe, 0xfe, 0xfe);
        let row_color_b = Color::from_rgb8(0xf9, 0xfd, 0xf9);
        let header_bg = Color::from_rgb8(0xef, 0xf1, 0xf5);

        let mut rows = Vec::new();
        self.collect_rows(&mut rows, &self.roots, 0);

        let header_row = Row::new()
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .push(
                Container::new(Text::new("Key").size(14))
                    .width(Length::FillPortion(4))
                    .padding([6, 8]),
            )
            .push(
                Container::new(Text::new("Value").size(14))
                    .width(Length::FillPortion(5))
                    .padding([6, 8]),
            )
            .push(
                Container::new(Text::new("Type").size(14))
                    .width(Length::FillPortion(3))
                    .padding([6, 8]),
            );

        let header = Container::new(header_row).width(Length::Fill).style(move |_| {
            container::Style { background: Some(header_bg.into()), ..Default::default() }
        });

        let mut body = Column::new().spacing(1).width(Length::Fill);

        for (index, TreeRow { depth, node, expanded }) in rows.into_iter().enumerate() {
            let background = if index % 2 == 0 { row_color_a } else { row_color_b };

            let mut key_cell = Row::new().spacing(6).align_y(Vertical::Center);
            key_cell = key_cell.push(Space::new().width(Length::Fixed((depth as f32) * 16.0)));

            if node.is_container() {
                let indicator = if expanded { "▼" } else { "▶" };
                key_cell = key_cell.push(
                    Button::new(Text::new(indicator))
                        .padding([0, 4])
                        .on_press(Message::DocumentToggled(node.id)),
                );
            } else {
                key_cell = key_cell.push(Space::new().width(Length::Fixed(18.0)));
            }

            key_cell = key_cell.push(Text::new(node.key.clone()).size(14));

            let content = Row::new()
                .align_y(Vertical::Center)
                .width(Length::Fill)
                .push(Container::new(key_cell).width(Length::FillPortion(4)).padding([6, 8]))
                .push(
                    Container::new(Text::new(node.value_display()).size(14))
                        .width(Length::FillPortion(5))
                        .padding([6, 8]),
                )
                .push(
                    Container::new(Text::new(node.type_label()).size(14))
                        .width(Length::FillPortion(3))
                        .padding([6, 8]),
                );

            body = body.push(Container::new(content).width(Length::Fill).style(move |_| {
                container::Style { background: Some(background.into()), ..Default::default() }
            }));
        }

        Column::new().spacing(2).push(header).push(body).width(Length::Fill).into()
    }

    fn collect_rows<'a>(
        &'a self,
        rows: &mut Vec<TreeRow<'a>>,
        nodes: &'a [DocumentNode],
        depth: usize,
    ) {
        for node in nodes {
            let expanded = self.expanded.contains(&node.id);
            rows.push(TreeRow { depth, node, expanded });
            if expanded {
                if let Some(children) = node.children() {
                    self.collect_rows(rows, children, depth + 1);
                }
            }
        }
    }
}

impl DocumentNode {
    fn from_bson(key: String, value: &Bson, next_id: &mut usize) -> Self {
        let id = *next_id;
        *next_id += 1;

        match value {
            Bson::Document(map) => {
                let children = map
                    .iter()
                    .map(|(child_key, child)| Self::from_bson(child_key.clone(), child, next_id))
                    .collect();
                Self { id, key, kind: NodeKind::Document(children) }
            }
            Bson::Array(items) => {
                let children = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Self::from_bson(format!("[{index}]"), item, next_id))
                    .collect();
                Self { id, key, kind: NodeKind::Array(children) }
            }
            other => {
                let (display, type_label) = scalar_display(other);
                Self { id, key, kind: NodeKind::Scalar { display, type_label } }
            }
        }
    }

    fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Document(_) | NodeKind::Array(_))
    }

    fn children(&self) -> Option<&[DocumentNode]> {
        match &self.kind {
            NodeKind::Document(children) | NodeKind::Array(children) => Some(children),
            NodeKind::Scalar { .. } => None,
        }
    }

    fn value_display(&self) -> String {
        match &self.kind {
            NodeKind::Document(children) => format!("Document ({} fields)", children.len()),
            NodeKind::Array(children) => format!("Array ({} items)", children.len()),
            NodeKind::Scalar { display, .. } => display.clone(),
        }
    }

    fn type_label(&self) -> &'static str {
        match &self.kind {
            NodeKind::Document(_) => "Document",
            NodeKind::Array(_) => "Array",
            NodeKind::Scalar { type_label, .. } => type_label,
        }
    }
}

fn container_exists(nodes: &[DocumentNode], node_id: usize) -> bool {
    nodes.iter().any(|node| {
        (node.id == node_id && node.is_container())
            || node.children().is_some_and(|children| container_exists(children, node_id))
    })
}

fn root_label(ordinal: usize, document: &Document) -> String {
    match document.get("_id") {
        Some(id @ (Bson::Document(_) | Bson::Array(_))) => format!("#{ordinal} {id:?}"),
        Some(id) => format!("#{ordinal} {}", scalar_display(id).0),
        None => format!("#{ordinal}"),
    }
}

fn scalar_display(value: &Bson) -> (String, &'static str) {
    match value {
        Bson::String(text) => (text.clone(), "String"),
        Bson::Boolean(flag) => (flag.to_string(), "Boolean"),
        Bson::Int32(number) => (number.to_string(), "Int32"),
        Bson::Int64(number) => (number.to_string(), "Int64"),
        Bson::Double(number) => (format!("{number}"), "Double"),
        Bson::Decimal128(decimal) => (format!("Decimal128(\"{decimal}\")"), "Decimal128"),
        Bson::ObjectId(oid) => (format!("ObjectId(\"{oid}\")"), "ObjectId"),
        Bson::DateTime(datetime) => match datetime.try_to_rfc3339_string() {
            Ok(iso) => (iso, "DateTime"),
            Err(_) => (format!("DateTime({})", datetime.timestamp_millis()), "DateTime"),
        },
        Bson::Binary(binary) => (
            format!("Binary({} bytes, subtype {:?})", binary.bytes.len(), binary.subtype),
            "Binary",
        ),
        Bson::RegularExpression(regex) => {
            if regex.options.is_empty() {
                (format!("Regex({:?})", regex.pattern), "Regex")
            } else {
                (format!("Regex({:?}, {:?})", regex.pattern, regex.options), "Regex")
            }
        }
        Bson::Timestamp(timestamp) => (
            format!("Timestamp(time={}, increment={})", timestamp.time, timestamp.increment),
            "Timestamp",
        ),
        Bson::JavaScriptCode(code) => (format!("Code({code:?})"), "JavaScriptCode"),
        Bson::JavaScriptCodeWithScope(code) => (
            format!("CodeWithScope({:?}, scope fields: {})", code.code, code.scope.len()),
            "JavaScriptCodeWithScope",
        ),
        Bson::Symbol(symbol) => (format!("Symbol({symbol:?})"), "Symbol"),
        Bson::DbPointer(pointer) => (format!("DbPointer({pointer:?})"), "DbPointer"),
        Bson::Undefined => (String::from("undefined"), "Undefined"),
        Bson::Null => (String::from("null"), "Null"),
        Bson::MinKey => (String::from("MinKey"), "MinKey"),
        Bson::MaxKey => (String::from("MaxKey"), "MaxKey"),
        Bson::Document(_) | Bson::Array(_) => unreachable!("containers handled by the node builder"),
    }
}
