//! Printable PDF format with an embedded vocabulary snapshot.
//!
//! The visible pages are a lossy rendering: empty categories are omitted and
//! text the standard fonts cannot show is replaced. The catalog's XMP
//! metadata stream carries the complete collection, which is what `decode`
//! reads back.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::color_utils::{Rgb, grey, hex_or, parse_hex_color};
use crate::format::error::FormatError;
use crate::format::layout::{
    Block, HEADER_HEIGHT, Page, PageLayout, ROW_LINE_HEIGHT, fit_text, paginate, text_width,
};
use crate::format::traits::{ExportOptions, ExportResult, FormatWarning, VocabularyFormat};
use crate::format::xmp;
use crate::model::{Collection, DEFAULT_COLOR, Word};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");
const OBLIQUE: Name<'static> = Name(b"F3");

const PRODUCER: &str = concat!("vocab ", env!("CARGO_PKG_VERSION"));
const DEFAULT_TITLE: &str = "Vocabulary";

/// Separator between the english and spanish terms (WinAnsi 0xBB).
const SEPARATOR: &str = "  \u{bb}  ";

const WHITE: Rgb = (1.0, 1.0, 1.0);

/// Horizontal inset of text from the row or header edges.
const TEXT_INSET: f32 = 8.0;

/// PDF document format.
///
/// Supports:
/// - Colored category headers, repeated on continuation pages
/// - Numbered word rows with synonyms and example lines
/// - Lossless re-import through the embedded XMP snapshot
pub struct PdfFormat;

impl VocabularyFormat for PdfFormat {
    fn id(&self) -> &'static str {
        "pdf"
    }

    fn display_name(&self) -> &'static str {
        "Vocabulary Document (PDF)"
    }

    fn extensions(&self) -> &[&'static str] {
        &["pdf"]
    }

    fn is_printable(&self) -> bool {
        true
    }

    fn encode(
        &self,
        collection: &Collection,
        options: &ExportOptions,
    ) -> Result<(Vec<u8>, ExportResult), FormatError> {
        let layout = options.page;
        if layout.content_width() <= 0.0 || layout.height <= 2.0 * layout.margin {
            return Err(FormatError::invalid_format(format!(
                "page {}x{} is too small for a {}pt margin",
                layout.width, layout.height, layout.margin
            )));
        }

        let pages = paginate(collection, &layout);
        let packet = xmp::build_packet(collection)?;

        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let metadata_id = alloc.bump();
        let info_id = alloc.bump();
        let regular_id = alloc.bump();
        let bold_id = alloc.bump();
        let oblique_id = alloc.bump();
        let page_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();
        let content_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id)
            .pages(page_tree_id)
            .metadata(metadata_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        pdf.metadata(metadata_id, &packet);
        pdf.document_info(info_id)
            .title(TextStr(options.title.as_deref().unwrap_or(DEFAULT_TITLE)))
            .producer(TextStr(PRODUCER));

        for (id, base) in [
            (regular_id, Name(b"Helvetica")),
            (bold_id, Name(b"Helvetica-Bold")),
            (oblique_id, Name(b"Helvetica-Oblique")),
        ] {
            pdf.type1_font(id)
                .base_font(base)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let mut renderer = Renderer::new(layout);
        for ((page, &page_id), &content_id) in pages.iter().zip(&page_ids).zip(&content_ids) {
            let mut writer = pdf.page(page_id);
            writer.media_box(Rect::new(0.0, 0.0, layout.width, layout.height));
            writer.parent(page_tree_id);
            writer.contents(content_id);
            writer
                .resources()
                .fonts()
                .pair(REGULAR, regular_id)
                .pair(BOLD, bold_id)
                .pair(OBLIQUE, oblique_id);
            writer.finish();

            let content = renderer.render(page);
            pdf.stream(content_id, &content);
        }

        let mut result = ExportResult {
            categories_exported: collection.len(),
            sections_rendered: collection.iter().filter(|(_, c)| !c.is_empty()).count(),
            words_exported: collection.total_words(),
            pages: pages.len(),
            ..ExportResult::default()
        };
        for name in renderer.lossy_categories {
            result.add_warning(
                FormatWarning::new("Replaced characters the page font cannot display")
                    .with_category(name),
            );
        }

        log::info!(
            "Rendered {} categories with {} words on {} pages",
            result.sections_rendered,
            result.words_exported,
            result.pages
        );

        Ok((pdf.finish(), result))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Collection, FormatError> {
        xmp::extract_collection(bytes)
    }
}

/// Draws laid-out pages into content streams.
struct Renderer {
    layout: PageLayout,
    /// Categories whose visible text lost characters, in first-seen order
    lossy_categories: Vec<String>,
}

impl Renderer {
    fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            lossy_categories: Vec::new(),
        }
    }

    fn render(&mut self, page: &Page<'_>) -> Vec<u8> {
        let mut content = Content::new();
        let mut current = "";

        for placed in &page.blocks {
            match placed.block {
                Block::Header { name, color, .. } => {
                    current = name;
                    self.header(&mut content, placed.top, name, color);
                }
                Block::Row {
                    number,
                    word,
                    color,
                    height,
                } => {
                    let lossy = self.row(&mut content, placed.top, number, word, color, height);
                    if lossy {
                        self.mark_lossy(current);
                    }
                }
            }
        }

        content.finish().to_vec()
    }

    fn mark_lossy(&mut self, name: &str) {
        if !self.lossy_categories.iter().any(|n| n == name) {
            self.lossy_categories.push(name.to_string());
        }
    }

    /// PDF y coordinate for a distance from the top of the page.
    fn y(&self, top: f32) -> f32 {
        self.layout.height - top
    }

    fn header(&mut self, content: &mut Content, top: f32, name: &str, color: &str) {
        let (r, g, b) = category_color(color);
        content.set_fill_rgb(r, g, b);
        content.rect(
            self.layout.margin,
            self.y(top + HEADER_HEIGHT),
            self.layout.content_width(),
            HEADER_HEIGHT,
        );
        content.fill_nonzero();

        let room = self.layout.content_width() - 2.0 * TEXT_INSET;
        let (title, lossy) = win_ansi(&fit_text(name, 18.0, true, room));
        if lossy {
            self.mark_lossy(name);
        }
        content.begin_text();
        content.set_fill_rgb(WHITE.0, WHITE.1, WHITE.2);
        content.set_font(BOLD, 18.0);
        content.next_line(self.layout.margin + TEXT_INSET, self.y(top + 24.0));
        content.show(Str(&title));
        content.end_text();
    }

    /// Draw one word row. Returns true if any text was replaced.
    fn row(
        &self,
        content: &mut Content,
        top: f32,
        number: usize,
        word: &Word,
        color: &str,
        height: f32,
    ) -> bool {
        let margin = self.layout.margin;
        let (r, g, b) = category_color(color);
        let bottom = self.y(top + height);

        // Left border in the category color, then the row background.
        content.set_fill_rgb(r, g, b);
        content.rect(margin, bottom, 3.0, height);
        content.fill_nonzero();

        let (fr, fg, fb) = grey(0xfa);
        let (sr, sg, sb) = grey(0xe8);
        content.set_fill_rgb(fr, fg, fb);
        content.set_stroke_rgb(sr, sg, sb);
        content.set_line_width(0.5);
        content.rect(margin + 3.0, bottom, self.layout.content_width() - 3.0, height);
        content.fill_nonzero_and_stroke();

        // Terms share the line: english gets at most half unless spanish is short.
        let number_text = number.to_string();
        let line_room = self.layout.content_width() - 3.0 - 2.0 * TEXT_INSET;
        let fixed = text_width(&number_text, 8.0, false)
            + text_width("    ", 12.0, true)
            + text_width(SEPARATOR, 11.0, false);
        let room = (line_room - fixed).max(0.0);
        let spanish_width = text_width(&word.spanish, 12.0, false).min(room / 2.0);
        let english_fit = fit_text(&word.english, 12.0, true, room - spanish_width);
        let spanish_fit = fit_text(
            &word.spanish,
            12.0,
            false,
            room - text_width(&english_fit, 12.0, true),
        );

        let (english, lossy_en) = win_ansi(&format!("  {}  ", english_fit));
        let (spanish, lossy_es) = win_ansi(&spanish_fit);
        let (separator, _) = win_ansi(SEPARATOR);
        let mut lossy = lossy_en || lossy_es;

        let text_x = margin + TEXT_INSET;
        let mut baseline = top + 14.0;

        content.begin_text();
        let (nr, ng, nb) = grey(0xbb);
        content.set_fill_rgb(nr, ng, nb);
        content.set_font(REGULAR, 8.0);
        content.next_line(text_x, self.y(baseline));
        content.show(Str(number_text.as_bytes()));
        content.set_fill_rgb(r, g, b);
        content.set_font(BOLD, 12.0);
        content.show(Str(&english));
        content.set_font(REGULAR, 11.0);
        content.show(Str(&separator));
        let (tr, tg, tb) = grey(0x33);
        content.set_fill_rgb(tr, tg, tb);
        content.set_font(REGULAR, 12.0);
        content.show(Str(&spanish));
        content.end_text();

        if word.has_synonyms() {
            baseline += ROW_LINE_HEIGHT;
            let line = format!("Synonyms: {}", word.synonyms.join(", "));
            let (line, replaced) = win_ansi(&fit_text(&line, 9.0, false, line_room));
            lossy |= replaced;
            self.subordinate_line(content, &line, OBLIQUE, grey(0x99), text_x, baseline);
        }

        for example in &word.examples {
            baseline += ROW_LINE_HEIGHT;
            let line = format!("\u{2022} \"{}\"", example);
            let (line, replaced) = win_ansi(&fit_text(&line, 9.0, false, line_room));
            lossy |= replaced;
            self.subordinate_line(content, &line, REGULAR, grey(0x66), text_x, baseline);
        }

        lossy
    }

    fn subordinate_line(
        &self,
        content: &mut Content,
        text: &[u8],
        font: Name<'_>,
        (r, g, b): Rgb,
        x: f32,
        baseline: f32,
    ) {
        content.begin_text();
        content.set_fill_rgb(r, g, b);
        content.set_font(font, 9.0);
        content.next_line(x, self.y(baseline));
        content.show(Str(text));
        content.end_text();
    }
}

fn category_color(color: &str) -> Rgb {
    let fallback = parse_hex_color(DEFAULT_COLOR).unwrap_or(grey(0x66));
    hex_or(color, fallback)
}

/// Encode text for the standard fonts' WinAnsi encoding.
///
/// Characters outside the encoding become `?`. The flag reports whether any
/// replacement happened.
pub(crate) fn win_ansi(text: &str) -> (Vec<u8>, bool) {
    let mut lossy = false;
    let bytes = text
        .chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            '\t' => b' ',
            '\u{20ac}' => 0x80,
            '\u{201a}' => 0x82,
            '\u{201e}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => {
                lossy = true;
                b'?'
            }
        })
        .collect();
    (bytes, lossy)
}
