//! Hand-drawn decoration engine for the living letter page.
//!
//! This crate owns everything geometric about the page: where the margin
//! doodles go, what each doodle looks like, where the marginal notes sit next
//! to their anchors and how reply windows are placed and stacked. The host
//! page is responsible only for measuring elements, handing the measurements
//! in as plain data, and drawing the returned [`path::Stroke`]s.
//!
//! Every layout pass is a pure function of the measured geometry and a set of
//! fixed seed constants, so re-rendering at the same size is idempotent.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`rng`] | Seeded random stream, string hash and Fisher–Yates shuffle |
//! | [`geom`] | Points, rectangles and the non-panicking clamp |
//! | [`region`] | Canvas region, gutters and density selection |
//! | [`plan`] | Band planning (how many marks per horizontal slice) |
//! | [`assign`] | Mark kinds, stroke classes and side assignment |
//! | [`placement`] | Collision-avoiding placement of margin marks |
//! | [`path`] | SVG path builder and the [`path::Stroke`] output type |
//! | [`shapes`] | Per-kind jittered shape primitives |
//! | [`annotate`] | Circles and underlines drawn over anchor phrases |
//! | [`layer`] | Drawable surfaces, `render_decorations` and layout triggers |
//! | [`notes`] | Marginal note catalog and gutter positioning |
//! | [`windows`] | Reply window placement and z-ordering |
//! | [`consts`] | Shared numeric constants and seeds |

pub mod annotate;
pub mod assign;
pub mod consts;
pub mod geom;
pub mod layer;
pub mod notes;
pub mod path;
pub mod placement;
pub mod plan;
pub mod region;
pub mod rng;
pub mod shapes;
pub mod windows;
