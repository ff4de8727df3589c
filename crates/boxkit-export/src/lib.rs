//! # BoxKit Export
//!
//! Serialization collaborators over the geometry produced by
//! [`boxkit_core`]: non-overlapping sheet layout, SVG preview documents,
//! and DXF interchange files. Each serializer consumes the neutral
//! [`boxkit_core::PanelPath`] data; none of them feeds anything back into
//! the geometry core.

pub mod dxf_writer;
pub mod error;
pub mod layout;
pub mod svg_writer;

pub use dxf_writer::{save_dxf, to_drawing};
pub use error::{ExportError, ExportResult};
pub use layout::{arrange, Placement, SheetLayout};
pub use svg_writer::{save_svg, to_svg};

use boxkit_core::BoxParameters;

/// Default export file name carrying the box dimensions, e.g.
/// `box_100x100x100.svg`.
pub fn export_file_name(params: &BoxParameters, extension: &str) -> String {
    format!(
        "box_{}x{}x{}.{}",
        params.width, params.height, params.depth, extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let params = BoxParameters::default();
        assert_eq!(export_file_name(&params, "svg"), "box_100x100x100.svg");
        assert_eq!(export_file_name(&params, "dxf"), "box_100x100x100.dxf");
    }
}
