use pdf_nup::layout::{Grid, PlacementTransform};
use pdf_nup::*;

#[derive(Debug, Clone)]
struct FakePage {
    id: usize,
    width: f32,
    height: f32,
}

impl SourcePage for FakePage {
    fn size(&self) -> Result<PageSize> {
        Ok(PageSize::new(self.width, self.height))
    }
}

#[derive(Debug)]
struct FakeSheet {
    size: PageSize,
    draws: Vec<(usize, PlacementTransform)>,
}

#[derive(Default)]
struct RecordingCanvas {
    blank_pages: usize,
    fail_on_page: Option<usize>,
}

impl SheetCanvas for RecordingCanvas {
    type Page = FakePage;
    type Sheet = FakeSheet;

    fn new_blank_page(&mut self, size: PageSize) -> Result<FakeSheet> {
        self.blank_pages += 1;
        Ok(FakeSheet {
            size,
            draws: Vec::new(),
        })
    }

    fn draw_transformed(
        &mut self,
        sheet: &mut FakeSheet,
        page: &FakePage,
        transform: &PlacementTransform,
    ) -> Result<()> {
        if self.fail_on_page == Some(page.id) {
            return Err(NupError::Io(std::io::Error::other("disk full")));
        }
        sheet.draws.push((page.id, *transform));
        Ok(())
    }
}

fn letter_pages(count: usize) -> Vec<FakePage> {
    (0..count)
        .map(|id| FakePage {
            id,
            width: 612.0,
            height: 792.0,
        })
        .collect()
}

fn options(pages_per_sheet: usize, orientation: Orientation) -> NupOptions {
    NupOptions {
        pages_per_sheet,
        orientation,
        ..Default::default()
    }
}

#[test]
fn test_sheet_count_and_order() {
    for (pages, per_sheet) in [(1, 1), (4, 4), (5, 4), (10, 3), (17, 9), (3, 8)] {
        let mut canvas = RecordingCanvas::default();
        let sheets =
            compose_nup(&mut canvas, &letter_pages(pages), &options(per_sheet, Orientation::Portrait))
                .unwrap();

        assert_eq!(sheets.len(), pages.div_ceil(per_sheet), "{pages} pages / {per_sheet}");
        assert_eq!(canvas.blank_pages, sheets.len());

        let drawn: Vec<usize> = sheets
            .iter()
            .flat_map(|s| s.draws.iter().map(|(id, _)| *id))
            .collect();
        assert_eq!(drawn, (0..pages).collect::<Vec<_>>());

        for sheet in &sheets {
            assert!(sheet.draws.len() <= per_sheet);
        }
    }
}

#[test]
fn test_last_sheet_is_partial() {
    let mut canvas = RecordingCanvas::default();
    let sheets =
        compose_nup(&mut canvas, &letter_pages(6), &options(4, Orientation::Portrait)).unwrap();

    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].draws.len(), 4);
    assert_eq!(sheets[1].draws.len(), 2);
}

#[test]
fn test_sheet_size_follows_orientation() {
    let mut canvas = RecordingCanvas::default();
    let sheets =
        compose_nup(&mut canvas, &letter_pages(2), &options(2, Orientation::Landscape)).unwrap();
    assert_eq!(sheets[0].size, PageSize::new(792.0, 612.0));

    let sheets =
        compose_nup(&mut canvas, &letter_pages(2), &options(2, Orientation::Portrait)).unwrap();
    assert_eq!(sheets[0].size, PageSize::new(612.0, 792.0));
}

#[test]
fn test_four_up_positions() {
    let mut canvas = RecordingCanvas::default();
    let sheets =
        compose_nup(&mut canvas, &letter_pages(4), &options(4, Orientation::Portrait)).unwrap();

    // Letter page into a 306 x 396 cell: min(296/612, 386/792)
    let scale = (296.0f32 / 612.0).min(386.0 / 792.0);
    let scaled_w = 612.0 * scale;
    let scaled_h = 792.0 * scale;
    let dx = (306.0 - scaled_w) / 2.0;
    let dy = (396.0 - scaled_h) / 2.0;

    let expected = [
        (0.0 + dx, 396.0 + dy), // top-left
        (306.0 + dx, 396.0 + dy), // top-right
        (0.0 + dx, 0.0 + dy),   // bottom-left
        (306.0 + dx, 0.0 + dy), // bottom-right
    ];

    for ((_, transform), (x, y)) in sheets[0].draws.iter().zip(expected) {
        assert_eq!(transform.scale_x, transform.scale_y);
        assert!((transform.scale_x - scale).abs() < 1e-6);
        assert!((transform.translate_x - x).abs() < 1e-3);
        assert!((transform.translate_y - y).abs() < 1e-3);
    }
}

#[test]
fn test_one_per_sheet_keeps_sequence() {
    let mut canvas = RecordingCanvas::default();
    let pages = letter_pages(5);
    let sheets = compose_nup(&mut canvas, &pages, &options(1, Orientation::Portrait)).unwrap();

    assert_eq!(sheets.len(), 5);
    for (idx, sheet) in sheets.iter().enumerate() {
        assert_eq!(sheet.draws.len(), 1);
        assert_eq!(sheet.draws[0].0, idx);
        assert_eq!(sheet.size, PageSize::new(612.0, 792.0));
    }
}

#[test]
fn test_mixed_page_sizes_scale_independently() {
    let pages = vec![
        FakePage {
            id: 0,
            width: 612.0,
            height: 792.0,
        },
        FakePage {
            id: 1,
            width: 1224.0,
            height: 1584.0,
        },
    ];
    let mut canvas = RecordingCanvas::default();
    let sheets = compose_nup(&mut canvas, &pages, &options(2, Orientation::Portrait)).unwrap();

    let small = sheets[0].draws[0].1;
    let large = sheets[0].draws[1].1;
    assert!((small.scale_x - 2.0 * large.scale_x).abs() < 1e-6);
}

#[test]
fn test_empty_document_fails() {
    let mut canvas = RecordingCanvas::default();
    let result = compose_nup(&mut canvas, &[], &options(4, Orientation::Portrait));
    assert!(matches!(result, Err(NupError::EmptyDocument)));
    assert_eq!(canvas.blank_pages, 0);
}

#[test]
fn test_zero_pages_per_sheet_fails() {
    let mut canvas = RecordingCanvas::default();
    let result = compose_nup(&mut canvas, &letter_pages(3), &options(0, Orientation::Portrait));
    assert!(matches!(result, Err(NupError::InvalidConfiguration(_))));
}

#[test]
fn test_degenerate_page_geometry_fails() {
    let mut pages = letter_pages(3);
    pages[2].height = 0.0;

    let mut canvas = RecordingCanvas::default();
    let result = compose_nup(&mut canvas, &pages, &options(2, Orientation::Portrait));
    match result {
        Err(NupError::InvalidPageGeometry { page, .. }) => assert_eq!(page, 2),
        other => panic!("Expected InvalidPageGeometry, got {:?}", other),
    }
    // Geometry is checked before anything is drawn
    assert_eq!(canvas.blank_pages, 0);
}

#[test]
fn test_canvas_failure_aborts() {
    let mut canvas = RecordingCanvas {
        fail_on_page: Some(5),
        ..Default::default()
    };
    let result = compose_nup(&mut canvas, &letter_pages(8), &options(4, Orientation::Portrait));
    assert!(matches!(result, Err(NupError::Io(_))));
}

#[test]
fn test_plan_sheets_uses_single_grid() {
    let sizes = vec![PageSize::new(612.0, 792.0); 7];
    let plans = plan_sheets(&sizes, &options(6, Orientation::Landscape)).unwrap();

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].index, 0);
    assert_eq!(plans[1].index, 1);
    assert_eq!(plans[1].source_pages().collect::<Vec<_>>(), vec![6]);

    let grid = select_grid(6, Orientation::Landscape);
    assert_eq!(grid, Grid::new(3, 2));
    // Page 6 is first on its sheet: top-left cell
    let cell = plans[1].placements[0].cell;
    assert_eq!((cell.col, cell.row), (0, 1));
}

#[test]
fn test_cells_too_small_for_margin() {
    let sizes = vec![PageSize::new(612.0, 792.0); 2];
    let opts = NupOptions {
        pages_per_sheet: 2,
        cell_margin_pt: 700.0,
        ..Default::default()
    };
    let result = plan_sheets(&sizes, &opts);
    assert!(matches!(result, Err(NupError::InvalidConfiguration(_))));
}
