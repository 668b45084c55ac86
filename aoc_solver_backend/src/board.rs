use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Dot,
    Block,
    Fill,
    SideArrowUp,
    SideArrowDown,
    SideArrowLeft,
    SideArrowRight,
    Cross,
    Line,
    Text(String),
    Num(i64),
}

impl ItemKind {
    fn name(&self) -> &'static str {
        match self {
            ItemKind::Dot => "dot",
            ItemKind::Block => "block",
            ItemKind::Fill => "fill",
            ItemKind::SideArrowUp => "sideArrowUp",
            ItemKind::SideArrowDown => "sideArrowDown",
            ItemKind::SideArrowLeft => "sideArrowLeft",
            ItemKind::SideArrowRight => "sideArrowRight",
            ItemKind::Cross => "cross",
            ItemKind::Line => "line",
            ItemKind::Text(_) | ItemKind::Num(_) => "text",
        }
    }

    /// Character standing for the item in the plain text rendering.
    pub fn to_char(&self) -> char {
        match self {
            ItemKind::Dot => '.',
            ItemKind::Block => '#',
            ItemKind::Fill => '~',
            ItemKind::SideArrowUp => '^',
            ItemKind::SideArrowDown => 'v',
            ItemKind::SideArrowLeft => '<',
            ItemKind::SideArrowRight => '>',
            ItemKind::Cross => 'X',
            ItemKind::Line => '|',
            ItemKind::Text(text) => text.chars().next().unwrap_or(' '),
            ItemKind::Num(num) => char::from_digit((num % 10).unsigned_abs() as u32, 10).unwrap_or('?'),
        }
    }
}

impl Serialize for ItemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = match self {
            ItemKind::Text(text) => text.clone(),
            ItemKind::Num(num) => num.to_string(),
            _ => return serializer.serialize_str(self.name()),
        };
        let mut s = serializer.serialize_struct("ItemKind", 2)?;
        s.serialize_field("kind", self.name())?;
        s.serialize_field("data", &data)?;
        s.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    pub y: usize,
    pub x: usize,
    pub color: &'static str,
    #[serde(rename = "item")]
    pub kind: ItemKind,
}

impl Item {
    pub fn cell(cell_y: usize, cell_x: usize, color: &'static str, kind: ItemKind) -> Item {
        Item {
            y: cell_y * 2 + 1,
            x: cell_x * 2 + 1,
            color,
            kind,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BoardKind {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "grid")]
    Grid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub kind: BoardKind,
    pub height: usize,
    pub width: usize,
    pub data: Vec<Item>,
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Board", 5)?;
        s.serialize_field("kind", "grid")?;
        s.serialize_field("height", &self.height)?;
        s.serialize_field("width", &self.width)?;
        s.serialize_field("defaultStyle", &self.kind)?;
        s.serialize_field("data", &self.data)?;
        s.end()
    }
}

impl Board {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// One character per cell; of several items on a cell the last one is shown.
    pub fn to_text(&self) -> String {
        let mut cells = vec![vec![' '; self.width]; self.height];
        for item in &self.data {
            if item.y % 2 == 0 || item.x % 2 == 0 {
                continue;
            }
            if let Some(c) = cells
                .get_mut(item.y / 2)
                .and_then(|row| row.get_mut(item.x / 2))
            {
                *c = item.kind.to_char();
            }
        }
        let mut ret = String::new();
        for row in cells {
            ret.extend(row);
            ret.push('\n');
        }
        ret
    }
}
