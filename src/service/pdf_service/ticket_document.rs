//!
//! Fixed layout of the downloadable ticket. All coordinates are PDF points
//! measured from the bottom-left corner of a US letter page.
//!

use crate::{repository::Ticket, service::ArtifactError};
use image::DynamicImage;
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, Pt};

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

const HEADER: &str = "QR TICKETING SYSTEM";
const FOOTER: [&str; 2] = [
    "Present this ticket at the entrance",
    "Every ticket is valid for a single entry",
];

const DETAILS_X: f32 = 100.0;
const DETAILS_TOP: f32 = 700.0;
const DETAILS_LINE_HEIGHT: f32 = 20.0;

const QR_CODE_X: f32 = 100.0;
const QR_CODE_TOP: f32 = 600.0;
const QR_CODE_WIDTH: f32 = 100.0;

/// Builtin fonts carry no metrics, Helvetica averages about half an em per glyph
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

impl TextLine {
    fn new(text: String, font: Font, size: f32, x: f32, y: f32) -> Self {
        Self {
            text,
            font,
            size,
            x,
            y,
        }
    }

    fn centered(text: &str, font: Font, size: f32, y: f32) -> Self {
        let width = text.chars().count() as f32 * size * AVERAGE_GLYPH_WIDTH;
        let x = ((PAGE_WIDTH - width) / 2.0).max(0.0);

        Self::new(text.to_string(), font, size, x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrCodePlacement {
    pub x: f32,
    pub top: f32,
    pub width: f32,
}

impl QrCodePlacement {
    ///
    /// At 72 dpi one pixel is one point, so the scale maps image width onto placement width
    ///
    /// ### Returns
    /// scale and resulting height in points
    ///
    pub fn fit(&self, image_width: u32, image_height: u32) -> (f32, f32) {
        let scale = self.width / image_width as f32;
        (scale, image_height as f32 * scale)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketDocument {
    pub title: String,
    pub lines: Vec<TextLine>,
    /// `None` when there is no ticket to show
    pub qr_code: Option<QrCodePlacement>,
}

impl TicketDocument {
    pub fn new(ticket: Option<&Ticket>) -> Self {
        let mut lines = vec![TextLine::centered(
            HEADER,
            Font::Bold,
            16.0,
            PAGE_HEIGHT - 50.0,
        )];

        let title = match ticket {
            Some(ticket) => {
                let details = [
                    format!("Ticket ID: {}", ticket.ticket_id),
                    format!("Name: {} {}", ticket.first_name, ticket.last_name),
                    format!("DOB: {}", ticket.date_of_birth),
                    format!("Phone Number: {}", ticket.phone_number),
                ];
                lines.extend(details.into_iter().enumerate().map(|(idx, text)| {
                    let y = DETAILS_TOP - idx as f32 * DETAILS_LINE_HEIGHT;
                    TextLine::new(text, Font::Regular, 12.0, DETAILS_X, y)
                }));

                format!("Ticket {}", ticket.ticket_id)
            }
            None => HEADER.to_string(),
        };

        lines.push(TextLine::centered(FOOTER[0], Font::Regular, 10.0, 30.0));
        lines.push(TextLine::centered(FOOTER[1], Font::Regular, 10.0, 15.0));

        let qr_code = ticket.map(|_| QrCodePlacement {
            x: QR_CODE_X,
            top: QR_CODE_TOP,
            width: QR_CODE_WIDTH,
        });

        Self {
            title,
            lines,
            qr_code,
        }
    }

    ///
    /// QR code image is scaled to the placement width, keeping its aspect ratio
    ///
    pub fn render(&self, qr_code: Option<&DynamicImage>) -> Result<Vec<u8>, ArtifactError> {
        let (document, page, layer) = PdfDocument::new(
            self.title.as_str(),
            Mm::from(Pt(PAGE_WIDTH)),
            Mm::from(Pt(PAGE_HEIGHT)),
            "ticket",
        );
        let layer = document.get_page(page).get_layer(layer);

        let regular = document.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = document.add_builtin_font(BuiltinFont::HelveticaBold)?;

        for line in &self.lines {
            let font = match line.font {
                Font::Regular => &regular,
                Font::Bold => &bold,
            };
            layer.use_text(
                line.text.as_str(),
                line.size,
                Mm::from(Pt(line.x)),
                Mm::from(Pt(line.y)),
                font,
            );
        }

        if let (Some(placement), Some(qr_code)) = (self.qr_code, qr_code) {
            let (scale, height) = placement.fit(qr_code.width(), qr_code.height());

            Image::from_dynamic_image(qr_code).add_to_layer(
                layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm::from(Pt(placement.x))),
                    translate_y: Some(Mm::from(Pt(placement.top - height))),
                    scale_x: Some(scale),
                    scale_y: Some(scale),
                    dpi: Some(72.0),
                    ..Default::default()
                },
            );
        }

        Ok(document.save_to_bytes()?)
    }
}
