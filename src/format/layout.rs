//! Page layout for the printable vocabulary document.
//!
//! Layout is computed top-down in points before anything is drawn, so the
//! pagination rules can be checked without parsing PDF output.

use std::borrow::Cow;

use crate::model::{Collection, Word};

/// Height of the colored category header band.
pub const HEADER_HEIGHT: f32 = 35.0;
/// Space between a header band and the first row below it.
pub const HEADER_GAP: f32 = 12.0;
/// Height of a word row with no synonyms or examples.
pub const ROW_BASE_HEIGHT: f32 = 20.0;
/// Extra height for the synonyms line and for each example line.
pub const ROW_LINE_HEIGHT: f32 = 12.0;
/// Vertical space between rows.
pub const ROW_GAP: f32 = 6.0;

/// Fixed page geometry, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageLayout {
    /// A4 portrait with a 30pt margin.
    pub const A4: Self = Self {
        width: 595.28,
        height: 841.89,
        margin: 30.0,
    };

    /// Lowest y (from the top) that content may reach.
    pub fn bottom(&self) -> f32 {
        self.height - self.margin
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::A4
    }
}

/// Height of the row for `word`, including synonyms and example lines.
pub fn row_height(word: &Word) -> f32 {
    let mut height = ROW_BASE_HEIGHT;
    if word.has_synonyms() {
        height += ROW_LINE_HEIGHT;
    }
    height + ROW_LINE_HEIGHT * word.examples.len() as f32
}

/// Marker appended to text cut short by [`fit_text`].
pub const ELLIPSIS: char = '\u{2026}';

/// Approximate Helvetica advance width of `ch`, in thousandths of an em.
fn char_width(ch: char) -> f32 {
    match ch {
        '\'' | '|' => 191.0,
        'i' | 'j' | 'l' => 222.0,
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | 'I' | 'f' | 't' | '[' | ']' => 278.0,
        'r' | '(' | ')' | '-' => 333.0,
        'm' | 'M' => 833.0,
        'w' | 'W' | '@' => 944.0,
        c if c.is_uppercase() => 722.0,
        ELLIPSIS => 1000.0,
        _ => 556.0,
    }
}

/// Estimated width of `text` set in Helvetica at `size` points.
///
/// Bold glyphs run about six percent wider.
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let em: f32 = text.chars().map(char_width).sum();
    let scale = if bold { 1.06 } else { 1.0 };
    em * scale * size / 1000.0
}

/// Shorten `text` with a trailing ellipsis so it fits in `max_width`.
pub fn fit_text(text: &str, size: f32, bold: bool, max_width: f32) -> Cow<'_, str> {
    if text_width(text, size, bold) <= max_width {
        return Cow::Borrowed(text);
    }

    let budget = max_width - text_width(&ELLIPSIS.to_string(), size, bold);
    let mut fitted = String::new();
    let mut width = 0.0;
    for ch in text.chars() {
        let advance = text_width(ch.encode_utf8(&mut [0; 4]), size, bold);
        if width + advance > budget {
            break;
        }
        width += advance;
        fitted.push(ch);
    }
    fitted.push(ELLIPSIS);
    Cow::Owned(fitted)
}

/// Something drawn on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block<'a> {
    /// Category header band.
    Header {
        name: &'a str,
        color: &'a str,
        /// True when repeated at the top of a continuation page
        continued: bool,
    },
    /// One word row.
    Row {
        /// 1-based position inside the category
        number: usize,
        word: &'a Word,
        color: &'a str,
        height: f32,
    },
}

/// A block and the distance of its top edge from the top of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placed<'a> {
    pub top: f32,
    pub block: Block<'a>,
}

/// The blocks on one page, top to bottom.
#[derive(Debug, Default)]
pub struct Page<'a> {
    pub blocks: Vec<Placed<'a>>,
}

impl Page<'_> {
    /// Names of the headers on this page, in order.
    pub fn header_names(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|placed| match placed.block {
                Block::Header { name, .. } => Some(name),
                Block::Row { .. } => None,
            })
            .collect()
    }

    /// Number of word rows on this page.
    pub fn row_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|placed| matches!(placed.block, Block::Row { .. }))
            .count()
    }
}

struct Cursor<'a> {
    pages: Vec<Page<'a>>,
    y: f32,
    margin: f32,
}

impl<'a> Cursor<'a> {
    fn new(margin: f32) -> Self {
        Self {
            pages: vec![Page::default()],
            y: margin,
            margin,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = self.margin;
    }

    fn place(&mut self, block: Block<'a>, advance: f32) {
        let top = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.blocks.push(Placed { top, block });
        }
        self.y += advance;
    }

    fn header(&mut self, name: &'a str, color: &'a str, continued: bool) {
        self.place(
            Block::Header {
                name,
                color,
                continued,
            },
            HEADER_HEIGHT + HEADER_GAP,
        );
    }
}

/// Lay out every non-empty category of `collection` in display order.
///
/// Each category starts on a fresh page, except the first. A row that would
/// cross the bottom margin moves to a new page under a repeated header. A
/// row taller than a whole page is placed anyway and overflows.
///
/// Always returns at least one page.
pub fn paginate<'a>(collection: &'a Collection, layout: &PageLayout) -> Vec<Page<'a>> {
    let mut cursor = Cursor::new(layout.margin);
    let mut first_section = true;

    for (name, category) in collection.sorted() {
        if category.is_empty() {
            continue;
        }
        if !first_section {
            cursor.new_page();
        }
        first_section = false;

        let color = category.color.as_str();
        cursor.header(name, color, false);
        let mut rows_on_page = 0;

        for (index, word) in category.words.iter().enumerate() {
            let height = row_height(word);
            if rows_on_page > 0 && cursor.y + height > layout.bottom() {
                cursor.new_page();
                cursor.header(name, color, true);
                rows_on_page = 0;
            }
            cursor.place(
                Block::Row {
                    number: index + 1,
                    word,
                    color,
                    height,
                },
                height + ROW_GAP,
            );
            rows_on_page += 1;
        }
    }

    cursor.pages
}
