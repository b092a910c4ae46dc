//! PDF rendering modules for n-up composition
//!
//! This module handles all PDF-specific operations:
//! - Creating XObjects from source pages
//! - Building output sheets with placement transforms
//! - Deep copying PDF objects

mod canvas;
mod xobject;

pub use canvas::{LopdfCanvas, LopdfPage, LopdfSheet};
pub use xobject::{copy_object_deep, create_page_xobject, get_page_dimensions, page_media_box};
