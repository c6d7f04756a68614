//! Quiver Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Quiver arrow
//! builders. It includes:
//!
//! - **Geometry**: Points, rings and in-place rotation ([`geometry`] module)
//! - **Bezier**: Circular-arc control points for curved stems ([`bezier`] module)
//! - **Style**: The option map read by the builders ([`style::StyleRecord`])

pub mod bezier;
pub mod geometry;
pub mod style;
