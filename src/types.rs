// src/types.rs
// Type aliases shared by the plotting layer

use std::error::Error;

/// (x, y) points of one chart series.
pub type ScatterPoints = Vec<(f64, f64)>;

/// Plot functions propagate plotters' backend errors unchanged.
pub type PlotResult<T = ()> = Result<T, Box<dyn Error>>;

/// Pixel size of an output page (width, height).
pub type PageSize = (u32, u32);
