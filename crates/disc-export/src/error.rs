use disc_kernel::GeometryError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("export profile needs at least {required} points, got {provided}")]
    TooFewProfilePoints { required: usize, provided: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
