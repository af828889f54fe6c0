//! PDF serialization of assembled documents

use std::ops::Range;

use chrono::{DateTime, Datelike, Local, Timelike};
use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};
use sheetpress_core::{Hyperlink, HyperlinkKind};
use sheetpress_layout::document::{HEADER_FONT_SIZE, TITLE_FONT_SIZE, TITLE_PADDING};
use sheetpress_layout::{
    ContentDirection, Document, DocumentMetadata, DocumentRenderer, PlacedCell, Rgb, Script,
    SheetPage, TextAlign,
};

use crate::error::{PdfError, Result};
use crate::font::{encode_winansi, wrap_lines, BaseFont, FontSet, ASCENT, LINE_HEIGHT};
use crate::paginate::{column_range, paginate, row_range};

/// Page number footer size in points
pub const FOOTER_FONT_SIZE: f32 = 10.0;

/// Default zlib level for content streams
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Super/subscript glyphs are drawn at this fraction of the font size
const SCRIPT_SCALE: f32 = 0.66;

/// Writes documents as PDF using the standard fonts
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    compression_level: u8,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &Document) -> sheetpress_layout::Result<Vec<u8>> {
        Ok(self.write(document)?)
    }
}

/// Where content goes on the pages of one sheet
#[derive(Debug, Clone, Copy)]
struct Frame {
    width: f32,
    height: f32,
    margin: f32,
    header_height: f32,
    footer_height: f32,
    title_height: f32,
}

impl Frame {
    fn new(sheet: &SheetPage) -> Result<Self> {
        let page = sheet.page;
        let frame = Self {
            width: page.width,
            height: page.height,
            margin: page.margin,
            header_height: HEADER_FONT_SIZE * LINE_HEIGHT,
            footer_height: if sheet.include_page_numbers {
                FOOTER_FONT_SIZE * LINE_HEIGHT
            } else {
                0.0
            },
            title_height: if sheet.title.is_some() {
                TITLE_FONT_SIZE * LINE_HEIGHT + TITLE_PADDING
            } else {
                0.0
            },
        };

        if page.usable_width() <= 0.0 || frame.table_height(true) <= 0.0 {
            return Err(PdfError::PageTooSmall {
                width: page.width,
                height: page.height,
                margin: page.margin,
            });
        }
        Ok(frame)
    }

    /// Height left for the cell grid
    fn table_height(&self, first: bool) -> f32 {
        let title = if first { self.title_height } else { 0.0 };
        self.height - 2.0 * self.margin - self.header_height - self.footer_height - title
    }

    /// Top edge of the cell grid
    fn table_top(&self, first: bool) -> f32 {
        let title = if first { self.title_height } else { 0.0 };
        self.height - self.margin - self.header_height - title
    }
}

/// One output page: a band of a sheet's rows
struct PlannedPage<'a> {
    sheet: &'a SheetPage,
    frame: Frame,
    rows: Range<usize>,
    first: bool,
}

/// A clickable area and its target
struct Link {
    rect: Rect,
    uri: String,
}

/// Drawing state shared by every page of a document
struct Painter<'a> {
    content: Content,
    fonts: &'a mut FontSet,
    direction: ContentDirection,
    links: Vec<Link>,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zlib level (0-10) used when compression is enabled
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level.min(10);
        self
    }

    /// Serialize `document` to PDF bytes
    pub fn write(&self, document: &Document) -> Result<Vec<u8>> {
        let settings = &document.settings;
        if settings.pdf_a {
            log::warn!("PDF/A output was requested but is not supported; writing plain PDF");
        }
        log::debug!("image quality {:?} has no effect without images", settings.image_quality);

        let pages = plan(document)?;
        if pages.is_empty() {
            return Err(PdfError::NoPages);
        }

        let total = pages.len();
        let mut fonts = FontSet::new();
        let mut drawn = Vec::with_capacity(total);
        for (i, page) in pages.iter().enumerate() {
            let mut painter = Painter {
                content: Content::new(),
                fonts: &mut fonts,
                direction: settings.content_direction,
                links: Vec::new(),
            };
            painter.draw_page(page, i + 1, total);
            drawn.push((painter.content.finish(), painter.links));
        }

        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        if let Some(metadata) = &document.metadata {
            write_info(&mut pdf, alloc(), metadata);
        }

        let font_refs: Vec<(BaseFont, Ref)> = fonts.iter().map(|font| (font, alloc())).collect();
        for (font, id) in &font_refs {
            pdf.type1_font(*id)
                .base_font(Name(font.postscript_name()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let mut page_ids = Vec::with_capacity(total);
        for ((raw, links), planned) in drawn.into_iter().zip(&pages) {
            let page_id = alloc();
            let content_id = alloc();
            page_ids.push(page_id);

            if settings.compress {
                let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
                    raw.as_slice(),
                    self.compression_level,
                );
                pdf.stream(content_id, &compressed).filter(Filter::FlateDecode);
            } else {
                pdf.stream(content_id, &raw);
            }

            let annot_ids: Vec<Ref> = links
                .iter()
                .map(|link| {
                    let annot_id = alloc();
                    let mut annot = pdf.annotation(annot_id);
                    annot
                        .subtype(AnnotationType::Link)
                        .rect(link.rect)
                        .border(0.0, 0.0, 0.0, None);
                    annot
                        .action()
                        .action_type(ActionType::Uri)
                        .uri(Str(link.uri.as_bytes()));
                    annot_id
                })
                .collect();

            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, planned.frame.width, planned.frame.height))
                .parent(pages_id)
                .contents(content_id);
            if !annot_ids.is_empty() {
                page.annotations(annot_ids.iter().copied());
            }
            let mut resources = page.resources();
            let mut font_dict = resources.fonts();
            for (font, id) in &font_refs {
                font_dict.pair(Name(font.resource_name()), *id);
            }
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(total as i32);

        log::debug!(
            "rendered {} pages from {} sheets ({} fonts)",
            total,
            document.pages.len(),
            font_refs.len()
        );
        Ok(pdf.finish())
    }
}

/// Paginate every sheet of the document in order
fn plan(document: &Document) -> Result<Vec<PlannedPage<'_>>> {
    let mut pages = Vec::new();
    for sheet in &document.pages {
        let frame = Frame::new(sheet)?;
        let bands = paginate(
            &sheet.layout,
            frame.table_height(true),
            frame.table_height(false),
        );
        for (i, rows) in bands.into_iter().enumerate() {
            pages.push(PlannedPage {
                sheet,
                frame,
                rows,
                first: i == 0,
            });
        }
    }
    Ok(pages)
}

fn write_info(pdf: &mut Pdf, id: Ref, metadata: &DocumentMetadata) {
    pdf.document_info(id)
        .title(TextStr(&metadata.title))
        .author(TextStr(&metadata.author))
        .subject(TextStr(&metadata.subject))
        .keywords(TextStr(&metadata.keywords))
        .creator(TextStr(&metadata.creator))
        .producer(TextStr(&metadata.producer))
        .creation_date(pdf_date(&metadata.creation_date))
        .modified_date(pdf_date(&metadata.modified_date));
}

fn pdf_date(dt: &DateTime<Local>) -> Date {
    let offset = dt.offset().local_minus_utc();
    Date::new(dt.year().clamp(0, 9999) as u16)
        .month(dt.month() as u8)
        .day(dt.day() as u8)
        .hour(dt.hour() as u8)
        .minute(dt.minute() as u8)
        .second(dt.second() as u8)
        .utc_offset_hour((offset / 3600) as i8)
        .utc_offset_minute((offset.abs() % 3600 / 60) as u8)
}

/// Target of a link annotation; in-workbook references have none
fn link_target(link: &Hyperlink) -> Option<String> {
    match link.kind {
        HyperlinkKind::Url | HyperlinkKind::File => Some(link.address.clone()),
        HyperlinkKind::Email if link.address.starts_with("mailto:") => Some(link.address.clone()),
        HyperlinkKind::Email => Some(format!("mailto:{}", link.address)),
        HyperlinkKind::Document => None,
    }
}

impl Painter<'_> {
    fn draw_page(&mut self, page: &PlannedPage<'_>, number: usize, total: usize) {
        let frame = page.frame;
        let sheet = page.sheet;

        let header_baseline = frame.height - frame.margin - HEADER_FONT_SIZE * ASCENT;
        self.draw_decoration(&sheet.header, HEADER_FONT_SIZE, header_baseline, &frame);

        if page.first {
            if let Some(title) = &sheet.title {
                let baseline =
                    frame.height - frame.margin - frame.header_height - TITLE_FONT_SIZE * ASCENT;
                self.draw_decoration(title, TITLE_FONT_SIZE, baseline, &frame);
            }
        }

        if sheet.include_page_numbers {
            let text = format!("{} / {}", number, total);
            let width = BaseFont::Helvetica.text_width(&text, FOOTER_FONT_SIZE);
            let x = (frame.width - width) / 2.0;
            let baseline = frame.margin + FOOTER_FONT_SIZE * (LINE_HEIGHT - ASCENT);
            self.show_line(
                &text,
                BaseFont::Helvetica,
                FOOTER_FONT_SIZE,
                x,
                baseline,
                Rgb::BLACK,
                0.0,
            );
        }

        self.draw_table(page);
    }

    /// Bold header or title text at the reading-direction start of the line
    fn draw_decoration(&mut self, text: &str, size: f32, baseline: f32, frame: &Frame) {
        let font = BaseFont::HelveticaBold;
        let x = match self.direction {
            ContentDirection::LeftToRight => frame.margin,
            ContentDirection::RightToLeft => {
                frame.width - frame.margin - font.text_width(text, size)
            }
        };
        self.show_line(text, font, size, x, baseline, Rgb::BLACK, 0.0);
    }

    fn draw_table(&mut self, page: &PlannedPage<'_>) {
        let layout = &page.sheet.layout;
        let frame = page.frame;
        let scale = layout.scale;
        let band = page.rows.clone();

        let mut col_offsets = Vec::with_capacity(layout.columns.len() + 1);
        let mut x = 0.0f32;
        col_offsets.push(x);
        for column in &layout.columns {
            x += column.width_px * scale;
            col_offsets.push(x);
        }

        let mut row_offsets = Vec::with_capacity(band.len() + 1);
        let mut y = 0.0f32;
        row_offsets.push(y);
        for row in &layout.rows[band.clone()] {
            y += row.height_pt * scale;
            row_offsets.push(y);
        }

        let top = frame.table_top(page.first);

        for cell in &layout.cells {
            let rows = row_range(&layout.rows, cell);
            if rows.is_empty() || !band.contains(&rows.start) {
                continue;
            }
            let cols = column_range(&layout.columns, cell);
            if cols.is_empty() {
                continue;
            }

            let first = rows.start - band.start;
            let last = rows.end.min(band.end) - band.start;
            let height = row_offsets[last] - row_offsets[first];
            let bottom = top - row_offsets[last];

            let offset = col_offsets[cols.start];
            let width = col_offsets[cols.end] - offset;
            let left = match self.direction {
                ContentDirection::LeftToRight => frame.margin + offset,
                ContentDirection::RightToLeft => frame.width - frame.margin - offset - width,
            };

            self.draw_cell(cell, Rect::new(left, bottom, left + width, bottom + height), scale);
        }
    }

    fn draw_cell(&mut self, cell: &PlacedCell, area: Rect, scale: f32) {
        let style = &cell.style;
        let (x, y) = (area.x1, area.y1);
        let (w, h) = (area.x2 - area.x1, area.y2 - area.y1);

        if style.background != Rgb::WHITE {
            let (r, g, b) = style.background.to_unit();
            self.content.set_fill_rgb(r, g, b);
            self.content.rect(x, y, w, h);
            self.content.fill_nonzero();
        }

        let [top, right, bottom, left] = style.borders;
        let edges = [
            (top, (x, y + h), (x + w, y + h)),
            (right, (x + w, y), (x + w, y + h)),
            (bottom, (x, y), (x + w, y)),
            (left, (x, y), (x, y + h)),
        ];
        for (width, from, to) in edges {
            if width > 0.0 {
                self.content.set_stroke_rgb(0.0, 0.0, 0.0);
                self.content.set_line_width(width * scale);
                self.content.move_to(from.0, from.1);
                self.content.line_to(to.0, to.1);
                self.content.stroke();
            }
        }

        if !cell.text.trim().is_empty() {
            self.draw_cell_text(cell, area, scale);
        }

        if let Some(uri) = cell.hyperlink.as_ref().and_then(link_target) {
            self.links.push(Link { rect: area, uri });
        }
    }

    fn draw_cell_text(&mut self, cell: &PlacedCell, area: Rect, scale: f32) {
        let text = &cell.style.text;
        let font = BaseFont::select(&text.family, text.bold, text.italic);
        let size = text.size * scale;
        let (glyph_size, rise) = match text.script {
            Script::Normal => (size, 0.0),
            Script::Superscript => (size * SCRIPT_SCALE, size * 0.33),
            Script::Subscript => (size * SCRIPT_SCALE, -size * 0.2),
        };

        let (x, y) = (area.x1, area.y1);
        let (w, h) = (area.x2 - area.x1, area.y2 - area.y1);
        let rotation = cell.style.rotation;

        self.content.save_state();

        let (lines, first_baseline) = if cell.style.is_rotated() {
            // centred on the cell, then turned clockwise about the centre
            let (cx, cy) = (x + w / 2.0, y + h / 2.0);
            let (sin, cos) = rotation.to_radians().sin_cos();
            self.content.transform([
                cos,
                -sin,
                sin,
                cos,
                cx - (cos * cx + sin * cy),
                cy - (-sin * cx + cos * cy),
            ]);
            let lines: Vec<String> = cell.text.lines().map(str::to_string).collect();
            let block = lines.len() as f32 * size * LINE_HEIGHT;
            (lines, cy + block / 2.0 - size * ASCENT)
        } else {
            self.content.rect(x, y, w, h);
            self.content.clip_nonzero();
            self.content.end_path();
            (wrap_lines(&cell.text, font, glyph_size, w), y + h - size * ASCENT)
        };

        for (i, line) in lines.iter().enumerate() {
            let baseline = first_baseline - i as f32 * size * LINE_HEIGHT;
            let line_width = font.text_width(line, glyph_size);
            let align = if cell.style.is_rotated() {
                TextAlign::Center
            } else {
                cell.style.align
            };
            let start = match (align, self.direction) {
                (TextAlign::Center, _) => x + (w - line_width) / 2.0,
                (TextAlign::Right, _) | (TextAlign::Default, ContentDirection::RightToLeft) => {
                    x + w - line_width
                }
                _ => x,
            };

            self.show_line(line, font, glyph_size, start, baseline, text.color, rise);

            let (r, g, b) = text.color.to_unit();
            let mut rule = |offset: f32| {
                self.content.set_stroke_rgb(r, g, b);
                self.content.set_line_width(glyph_size * 0.06);
                self.content.move_to(start, baseline + rise + offset);
                self.content.line_to(start + line_width, baseline + rise + offset);
                self.content.stroke();
            };
            if text.underline {
                rule(-glyph_size * 0.12);
            }
            if text.strikethrough {
                rule(glyph_size * 0.28);
            }
        }

        self.content.restore_state();
    }

    #[allow(clippy::too_many_arguments)]
    fn show_line(
        &mut self,
        text: &str,
        font: BaseFont,
        size: f32,
        x: f32,
        baseline: f32,
        color: Rgb,
        rise: f32,
    ) {
        let name = self.fonts.use_font(font);
        let (r, g, b) = color.to_unit();
        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content.set_font(Name(name), size);
        self.content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, baseline]);
        if rise != 0.0 {
            self.content.set_rise(rise);
        }
        self.content.show(Str(&encode_winansi(text)));
        self.content.end_text();
    }
}
