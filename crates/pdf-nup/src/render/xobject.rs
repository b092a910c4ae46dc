//! XObject creation for n-up sheets
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto output sheets with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Attributes are looked up at most this many levels up the page tree
const MAX_INHERITANCE_DEPTH: usize = 32;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// The XObject's bounding box is the page's MediaBox. Boxes that do not
/// start at the origin get a matrix shifting their lower-left corner to
/// (0, 0), so a placement transform always positions the box itself.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Source-to-output object IDs already copied
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let media_box = page_media_box(source, page_id)?;

    let content = get_page_content(source, page_dict)?;

    let mut xobject_dict = content.encoding;
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(media_box.iter().map(|&v| Object::Real(v)).collect()),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    let [x0, y0, _, _] = media_box;
    if x0 != 0.0 || y0 != 0.0 {
        xobject_dict.set(
            "Matrix",
            Object::Array(vec![
                Object::Integer(1),
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(1),
                Object::Real(-x0),
                Object::Real(-y0),
            ]),
        );
    }

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content.data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Content of a page ready to become a form XObject body
struct PageContent {
    data: Vec<u8>,
    /// `Filter`/`DecodeParms` entries when `data` is still encoded
    encoding: Dictionary,
}

impl PageContent {
    fn decoded(data: Vec<u8>) -> Self {
        Self {
            data,
            encoding: Dictionary::new(),
        }
    }
}

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<PageContent> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(PageContent::decoded(Vec::new())), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            // Contents may point at an array of stream references
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            Object::Stream(stream) => Ok(single_stream_content(stream)),
            _ => Ok(PageContent::decoded(Vec::new())),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(PageContent::decoded(Vec::new())),
    }
}

/// A lone content stream that cannot be decoded is kept encoded, along
/// with the filter entries needed to read it.
fn single_stream_content(stream: &Stream) -> PageContent {
    match stream_content(stream) {
        Ok(data) => PageContent::decoded(data),
        Err(err) => {
            log::warn!("Keeping content stream encoded: {}", err);
            let mut encoding = Dictionary::new();
            for key in [b"Filter".as_slice(), b"DecodeParms".as_slice()] {
                if let Ok(value) = stream.dict.get(key) {
                    encoding.set(key.to_vec(), value.clone());
                }
            }
            PageContent {
                data: stream.content.clone(),
                encoding,
            }
        }
    }
}

fn stream_content(stream: &Stream) -> Result<Vec<u8>> {
    if stream.dict.get(b"Filter").is_err() {
        return Ok(stream.content.clone());
    }
    Ok(stream.decompressed_content()?)
}

/// Concatenate multiple content streams.
///
/// Pieces must all be decoded to be joined, so any stream that fails to
/// decode is an error.
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<PageContent> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream_content(stream)?);
                result.push(b'\n');
            }
        }
    }

    Ok(PageContent::decoded(result))
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Each referenced object is copied once. Its output ID is reserved before
/// recursing so reference cycles terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Look up a page attribute, following the `Parent` chain for inherited values
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut dict = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }
        match dict.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => dict = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

/// MediaBox of a page as `[x0, y0, x1, y1]`, US Letter if absent or unreadable
pub fn page_media_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4]> {
    let fallback = [0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1];

    let Some(obj) = inherited_attribute(doc, page_id, b"MediaBox")? else {
        return Ok(fallback);
    };
    let obj = match obj {
        Object::Reference(id) => doc.get_object(*id)?,
        other => other,
    };
    let Ok(values) = obj.as_array() else {
        return Ok(fallback);
    };

    let numbers: Vec<f32> = values.iter().filter_map(|v| extract_number(doc, v)).collect();
    match numbers.as_slice() {
        &[a, b, c, d] => Ok([a.min(c), b.min(d), a.max(c), b.max(d)]),
        _ => Ok(fallback),
    }
}

/// Get source page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let [x0, y0, x1, y1] = page_media_box(doc, page_id)?;
    Ok((x1 - x0, y1 - y0))
}

/// Extract numeric value from a PDF object
fn extract_number(doc: &Document, obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Integer(i) => Some(*i as f32),
            Object::Real(r) => Some(*r),
            _ => None,
        },
        _ => None,
    }
}
