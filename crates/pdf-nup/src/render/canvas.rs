//! lopdf-backed sheet canvas
//!
//! Source pages are turned into Form XObjects on first use and drawn
//! onto sheets with a `cm` transform. Sheets are buffered until
//! [`LopdfCanvas::finish`] writes the page tree.

use crate::compose::{SheetCanvas, SourcePage};
use crate::layout::PlacementTransform;
use crate::types::{PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{create_page_xobject, page_media_box};

/// A page of the source document
#[derive(Debug, Clone, PartialEq)]
pub struct LopdfPage {
    /// Object ID of the page in the source document
    pub id: ObjectId,
    /// Resolved MediaBox `[x0, y0, x1, y1]`
    pub media_box: [f32; 4],
}

impl SourcePage for LopdfPage {
    fn size(&self) -> Result<PageSize> {
        let [x0, y0, x1, y1] = self.media_box;
        Ok(PageSize::new(x1 - x0, y1 - y0))
    }
}

/// An output sheet under construction
#[derive(Debug, Clone)]
pub struct LopdfSheet {
    size: PageSize,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

impl LopdfSheet {
    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Number of source pages drawn so far
    pub fn placed_pages(&self) -> usize {
        self.content_ops.len()
    }
}

/// Builds an n-up output document from a source document
pub struct LopdfCanvas<'a> {
    source: &'a Document,
    output: Document,
    pages_tree_id: ObjectId,
    object_cache: HashMap<ObjectId, ObjectId>,
    xobject_cache: HashMap<ObjectId, ObjectId>,
}

impl<'a> LopdfCanvas<'a> {
    pub fn new(source: &'a Document) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            source,
            output,
            pages_tree_id,
            object_cache: HashMap::new(),
            xobject_cache: HashMap::new(),
        }
    }

    /// All pages of the source document in page order
    pub fn source_pages(&self) -> Result<Vec<LopdfPage>> {
        self.source
            .get_pages()
            .into_values()
            .map(|id| {
                Ok(LopdfPage {
                    id,
                    media_box: page_media_box(self.source, id)?,
                })
            })
            .collect()
    }

    /// Write the sheets as the output's pages, in order, and return the document
    pub fn finish(mut self, sheets: Vec<LopdfSheet>) -> Result<Document> {
        let mut page_refs = Vec::with_capacity(sheets.len());

        for sheet in sheets {
            let content = sheet.content_ops.join("");
            let content_id = self
                .output
                .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

            let mut resources = Dictionary::new();
            resources.set("XObject", Object::Dictionary(sheet.xobjects));

            let page_dict = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(self.pages_tree_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(sheet.size.width),
                        Object::Real(sheet.size.height),
                    ]),
                ),
                ("Resources", Object::Dictionary(resources)),
                ("Contents", Object::Reference(content_id)),
            ]);
            page_refs.push(Object::Reference(self.output.add_object(page_dict)));
        }

        let count = page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        Ok(self.output)
    }

    fn page_xobject(&mut self, page_id: ObjectId) -> Result<ObjectId> {
        if let Some(&id) = self.xobject_cache.get(&page_id) {
            return Ok(id);
        }
        let id = create_page_xobject(
            &mut self.output,
            self.source,
            page_id,
            &mut self.object_cache,
        )?;
        self.xobject_cache.insert(page_id, id);
        Ok(id)
    }
}

impl SheetCanvas for LopdfCanvas<'_> {
    type Page = LopdfPage;
    type Sheet = LopdfSheet;

    fn new_blank_page(&mut self, size: PageSize) -> Result<LopdfSheet> {
        Ok(LopdfSheet {
            size,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        })
    }

    fn draw_transformed(
        &mut self,
        sheet: &mut LopdfSheet,
        page: &LopdfPage,
        transform: &PlacementTransform,
    ) -> Result<()> {
        let xobject_id = self.page_xobject(page.id)?;
        let xobject_name = format!("P{}", sheet.content_ops.len());
        sheet
            .xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        sheet
            .content_ops
            .push(generate_placement_command(&xobject_name, transform));
        Ok(())
    }
}

/// Generate the PDF content stream command to place a page.
fn generate_placement_command(xobject_name: &str, transform: &PlacementTransform) -> String {
    let [a, b, c, d, e, f] = transform.matrix();
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        a, b, c, d, e, f, xobject_name
    )
}
