//! Geometry core for an interactive flame-graph viewer.
//!
//! Hosts own the [`model::Viewport`] and the frame list; everything in here is
//! a pure function of its inputs. Zoom requests go through
//! [`transform::compute`], labels through [`label::LabelFitter`], and
//! [`views::flame::render_flame`] turns both into a renderer-agnostic command
//! list.

pub mod config;
pub mod error;
pub mod label;
pub mod layout;
pub mod model;
pub mod telemetry;
pub mod transform;
pub mod transition;
pub mod views;

pub use config::ViewerConfig;
pub use error::{ViewError, ViewResult};
pub use label::LabelFitter;
pub use model::{Frame, Viewport};
pub use transform::{Damping, Transform, ZoomTarget};
