//! Table-of-contents tree built from extracted headings.

use serde::Serialize;

use crate::content::{ContentBlock, Heading, headings};

/// One table-of-contents entry with nested children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub level: u8,
    pub text: String,
    pub children: Vec<TocEntry>,
}

impl From<Heading> for TocEntry {
    fn from(heading: Heading) -> Self {
        Self {
            id: heading.id,
            level: heading.level,
            text: heading.text,
            children: Vec::new(),
        }
    }
}

/// Build a nested table of contents from the content's headings.
///
/// Explicit stack-based construction: each finished entry attaches to the
/// nearest open entry with a strictly lower level, or to the root list.
/// Sequences like H2 -> H4 -> H2 nest correctly.
pub fn table_of_contents(blocks: &[ContentBlock]) -> Vec<TocEntry> {
    let mut roots: Vec<TocEntry> = Vec::new();
    let mut stack: Vec<TocEntry> = Vec::new();

    for heading in headings(blocks) {
        let entry = TocEntry::from(heading);
        while stack
            .last()
            .is_some_and(|open| open.level >= entry.level)
        {
            let finished = stack.pop().unwrap();
            attach(&mut stack, &mut roots, finished);
        }
        stack.push(entry);
    }
    while let Some(finished) = stack.pop() {
        attach(&mut stack, &mut roots, finished);
    }
    roots
}

fn attach(stack: &mut [TocEntry], roots: &mut Vec<TocEntry>, entry: TocEntry) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(entry),
        None => roots.push(entry),
    }
}
