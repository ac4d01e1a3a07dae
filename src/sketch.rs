/// Pure data model: grid points, strokes, drawings, raw payloads.
pub mod model;
/// Three-tier total parser from raw payload to normalized [`model::Drawing`].
pub mod parse;
