pub mod generator;

pub use generator::{booth_count, generate_layout, SectionSpec, BOOTH_PITCH, BOOTH_SIZE, SECTIONS};

use crate::model::BoothPosition;
use crate::parser::floormap::{parse_floor_map_xml, SectionBands};

/// Where booth positions come from. Callers ask for positions without caring
/// which path produced them.
#[derive(Debug, Clone, Default)]
pub enum LayoutSource {
    /// The static venue table.
    #[default]
    Generated,
    /// A draw.io diagram, with the bands used to infer sections.
    Diagram { xml: String, bands: SectionBands },
}

impl LayoutSource {
    #[must_use]
    pub fn diagram(xml: impl Into<String>) -> Self {
        Self::Diagram {
            xml: xml.into(),
            bands: SectionBands::default(),
        }
    }

    /// Positions for this source. A diagram that fails to parse or holds no
    /// booths falls back to the generated layout.
    #[must_use]
    pub fn positions(&self) -> Vec<BoothPosition> {
        match self {
            Self::Generated => generate_layout(),
            Self::Diagram { xml, bands } => match parse_floor_map_xml(xml, bands) {
                Ok(booths) if !booths.is_empty() => booths,
                Ok(_) => {
                    tracing::warn!("floor map diagram has no numbered booths, using generated layout");
                    generate_layout()
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to parse floor map diagram, using generated layout");
                    generate_layout()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_diagram_falls_back_to_generated() {
        let positions = LayoutSource::diagram("<mxfile><oops></mxfile>").positions();
        assert_eq!(positions, generate_layout());
    }

    #[test]
    fn empty_diagram_falls_back_to_generated() {
        let positions = LayoutSource::diagram("<mxfile><diagram/></mxfile>").positions();
        assert_eq!(positions.len(), 406);
    }

    #[test]
    fn diagram_positions_are_used_when_present() {
        let xml = r#"<root><mxCell id="c" value="&lt;b&gt;8&lt;/b&gt;"><mxGeometry x="100" y="300" width="70" height="70"/></mxCell></root>"#;
        let positions = LayoutSource::diagram(xml).positions();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].code.to_string(), "E8");
    }
}
