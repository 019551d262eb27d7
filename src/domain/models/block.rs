#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// One structural unit of formatted message content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    UnorderedList(Vec<String>),
    OrderedList(Vec<String>),
    CodeBlock(Vec<String>),
}

impl Block {
    pub fn list(kind: ListKind, items: Vec<String>) -> Block {
        match kind {
            ListKind::Unordered => return Block::UnorderedList(items),
            ListKind::Ordered => return Block::OrderedList(items),
        }
    }
}

/// Classification of a single input line, outside of code block handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    CodeFence,
    ListItem { kind: ListKind, text: String },
    Blank,
    Text,
}
