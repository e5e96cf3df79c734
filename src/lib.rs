//! Scanline polygon fill built on join/meet line arithmetic
//!
//! How does this work
//!    view  = ViewState::new( cfg.view )
//!    scene = Scene::new( cfg )
//!  Each frame
//!    view.update( keys, viewport, scene.extent_y() )
//!    scene.render( model, view, target )
//!      to_screen_into()      -- model -> screen
//!      draw_lines()          -- outline
//!      fill.reset()          -- validate, join() each edge
//!      render_scanlines()
//!        rewind_scanlines()
//!        sweep_scanline()    -- meet() per edge, lambda test, pairing
//!          draw_line()       -- one per span
//!      debug_scanline()      -- crossings of view.scanline_y
//!
//! Filling a polygon directly:
//!
//!     use fillpoly::{DrawList, PolygonBuilder, ScanlineFill, render_scanlines, Rgba8};
//!
//!     let mut b = PolygonBuilder::new();
//!     b.move_to(10.0, 10.0);
//!     b.line_to(50.0, 90.0);
//!     b.line_to(90.0, 10.0);
//!     let poly = b.close_polygon().unwrap();
//!
//!     let mut fill = ScanlineFill::new();
//!     fill.reset_polygon(&poly);
//!     let mut ren = DrawList::new(100, 100);
//!     let n = render_scanlines(&mut fill, &mut ren, Rgba8::black());
//!     assert_eq!(n, 79);

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod input;
pub mod polygon;
pub mod render;
pub mod scan;
pub mod scene;
pub mod transform;
pub mod view;

pub use crate::canvas::*;
pub use crate::color::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::fill::*;
pub use crate::geometry::*;
pub use crate::input::*;
pub use crate::polygon::*;
pub use crate::render::*;
pub use crate::scan::*;
pub use crate::scene::*;
pub use crate::transform::*;
pub use crate::view::*;
