//! Printable output for disc profiles: simplified export meshes, STL
//! serialization and the flat dimension table.

pub mod error;
pub mod mesh;
pub mod simplify;
pub mod stl;
pub mod table;

pub use error::ExportError;
pub use mesh::{ExportSettings, export_mesh};
pub use simplify::simplify_profile;
pub use stl::{write_ascii_stl, write_binary_stl};
pub use table::{TableRow, dimension_table};
