//! Parametric disc design: the editable profile, derived dimensions,
//! advisory rule checks and a session tying them together with caching and
//! undo.

pub mod cache;
pub mod config;
pub mod constraints;
pub mod dimensions;
pub mod materials;
pub mod params;
pub mod profile;
pub mod session;
pub mod standards;
pub mod undo;

pub use config::{ConfigError, EngineConfig};
pub use constraints::{validate_geometry, ConstraintRule, ConstraintViolation};
pub use dimensions::compute;
pub use materials::resolve_material;
pub use params::{KeyParameters, ParameterRange, RangeNotice};
pub use profile::{DiscProfile, Preset, PresetParameters, ProfileError};
pub use session::{DesignReport, DesignSession};
pub use standards::{check_standards, standards_reference, Dimension, Severity, StandardsReport};
