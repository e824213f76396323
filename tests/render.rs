use cairo::{Context, ImageSurface};
use waysketch::config::StatusPosition;
use waysketch::draw::{self, MarkerStyle, Point, Shape};
use waysketch::draw::color::{BLACK, RED, WHITE};
use waysketch::sketch::{ClickButton, SketchState};

fn make_sketch(position: StatusPosition) -> SketchState {
    SketchState::with_defaults(
        Some(BLACK),
        None,
        2.0,
        MarkerStyle::default(),
        None,
        "polygon",
        None,
        true,
        position,
        14.0,
    )
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn pixel_is_blank(surface: &mut ImageSurface, x: usize, y: usize) -> bool {
    let stride = surface.stride() as usize;
    surface
        .data()
        .map(|data| {
            let offset = y * stride + x * 4;
            data[offset..offset + 4].iter().all(|byte| *byte == 0)
        })
        .unwrap_or(true)
}

#[test]
fn filled_circle_covers_its_center() {
    let (mut surface, ctx) = surface_with_context(100, 100);
    draw::render_shape(
        &ctx,
        &Shape::Circle {
            center: Point::new(40, 40),
            radius: 12,
            pen: None,
            brush: Some(RED),
            width: 2.0,
        },
    );
    drop(ctx);
    surface.flush();

    assert!(!pixel_is_blank(&mut surface, 40, 40));
    assert!(pixel_is_blank(&mut surface, 90, 90));
}

#[test]
fn polygon_outline_draws_only_along_edges() {
    let (mut surface, ctx) = surface_with_context(100, 100);
    draw::render_shape(
        &ctx,
        &Shape::Polygon {
            points: vec![
                Point::new(10, 10),
                Point::new(70, 10),
                Point::new(70, 50),
                Point::new(10, 10),
            ],
            pen: Some(BLACK),
            brush: None,
            width: 2.0,
        },
    );
    drop(ctx);
    surface.flush();

    // On the top edge, but not deep inside the unfilled triangle.
    assert!(!pixel_is_blank(&mut surface, 40, 10));
    assert!(pixel_is_blank(&mut surface, 60, 45));
}

#[test]
fn background_paints_every_pixel() {
    let (mut surface, ctx) = surface_with_context(20, 20);
    draw::render_background(&ctx, WHITE);
    drop(ctx);
    surface.flush();

    assert!(!pixel_is_blank(&mut surface, 0, 0));
    assert!(!pixel_is_blank(&mut surface, 19, 19));
}

#[test]
fn committed_clicks_render_end_to_end() {
    let mut sketch = make_sketch(StatusPosition::BottomLeft);
    sketch.update_screen_dimensions(100, 100);

    sketch.on_mouse_press(ClickButton::Primary, 10, 10);
    sketch.on_mouse_press(ClickButton::Primary, 50, 10);
    sketch.on_mouse_press(ClickButton::Primary, 50, 50);
    sketch.on_mouse_press(ClickButton::Secondary, 0, 0);

    // Three click markers plus the committed polygon.
    let shapes = &sketch.canvas.frame().shapes;
    assert_eq!(shapes.len(), 4);
    match &shapes[3] {
        Shape::Polygon { points, .. } => {
            assert_eq!(
                points,
                &vec![
                    Point::new(10, 10),
                    Point::new(50, 10),
                    Point::new(50, 50),
                    Point::new(10, 10),
                ]
            );
        }
        other => panic!("expected committed polygon, got {other:?}"),
    }

    let (mut surface, ctx) = surface_with_context(100, 100);
    draw::render_shapes(&ctx, shapes);
    drop(ctx);
    surface.flush();

    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn status_bar_draws_for_all_positions() {
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let mut sketch = make_sketch(position);
        sketch.update_screen_dimensions(800, 480);

        let (mut surface, ctx) = surface_with_context(800, 480);
        waysketch::ui::render_status_bar(&ctx, &sketch, 800, 480);
        drop(ctx);
        surface.flush();

        assert!(
            surface_has_pixels(&mut surface),
            "status bar drew nothing at {position:?}"
        );
    }
}

#[test]
fn status_bar_reflects_in_progress_circle() {
    let mut sketch = SketchState::with_defaults(
        Some(BLACK),
        None,
        2.0,
        MarkerStyle::default(),
        Some("circle".to_string()),
        "polygon",
        None,
        true,
        StatusPosition::BottomLeft,
        14.0,
    );
    sketch.update_screen_dimensions(800, 480);
    assert_eq!(sketch.active_mode_name(), "circle");
    assert!(sketch.progress_label().is_none());

    sketch.on_mouse_press(ClickButton::Primary, 100, 100);
    assert!(sketch.progress_label().is_some());

    let (mut surface, ctx) = surface_with_context(800, 480);
    waysketch::ui::render_status_bar(&ctx, &sketch, 800, 480);
    drop(ctx);
    surface.flush();

    assert!(surface_has_pixels(&mut surface));
}
