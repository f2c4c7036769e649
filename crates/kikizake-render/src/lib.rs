#![forbid(unsafe_code)]

//! Headless geometry + SVG renderer for sake flavor-profile radar charts.
//!
//! The pipeline is two independent steps: [`render`] turns a flavor vector and a
//! chart spec into a [`model::ChartDrawing`] (pure data, no backend assumptions),
//! and [`svg::render_drawing_svg`] materializes a drawing as standalone SVG.
//! Callers with their own drawing surface can stop after the first step.

pub mod geometry;
pub mod model;
pub mod svg;
pub mod target;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] kikizake_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub use geometry::render;
pub use model::{Bounds, ChartDrawing, Point, Primitive, StyleTag};
pub use svg::{ChartTheme, SvgRenderOptions, render_drawing_svg};
pub use target::TargetRegistry;
