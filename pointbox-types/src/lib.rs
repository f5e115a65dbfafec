//! # pointbox-types
//!
//! Core data types for the pointbox spatial indexes.
//!
//! This crate provides the two types every index implementation speaks:
//!
//! - **Point**: a planar coordinate pair with a caller-assigned identifier
//! - **BoundingBox**: an axis-aligned query rectangle with inclusive bounds
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use pointbox_types::point::Point;
//! use pointbox_types::bbox::BoundingBox;
//!
//! let point = Point::new(-74.0060, 40.7128, "nyc");
//! let bbox = BoundingBox::new(-75.0, 40.0, -73.0, 41.0);
//! assert!(bbox.contains_point(&point));
//! ```

pub mod bbox;
pub mod point;
