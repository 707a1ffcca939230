//! # millprep CAM Tools
//!
//! Planar polygon helpers used ahead of a 2D clipping library:
//!
//! - [`Polygon2D`]: closed ring with signed area and orientation queries
//! - [`ClipperPoint`] and the `*_clipper_*` functions: conversion between
//!   millimetre coordinates and the fixed-point integer grid clipping
//!   libraries operate on
//!
//! Orientation convention: positive area is counter-clockwise (outer
//! boundary), negative area is clockwise (hole).

pub mod clipper;
pub mod polygon;

pub use clipper::{
    from_clipper_coord, polygon_set_from_clipper, polygon_set_to_clipper, to_clipper_coord,
    ClipperPath, ClipperPoint,
};
pub use polygon::{Polygon2D, PolygonSet};
