//! Some common components to reuse when drawing.

pub mod bar;
