//! Classification color scheme

use cellscope_analysis::Classification;
use cellscope_core::Color;

/// Fill colors applied per classification
///
/// The defaults match the conventional audit palette: yellow for inputs,
/// light blue for calculations, light green for outputs, pink for
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    pub input_hardcoded: Color,
    pub input_external_link: Color,
    pub calculation: Color,
    pub output: Color,
    pub other: Color,
    /// Fill for unclassified cells when painting the full used range
    pub default: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            input_hardcoded: Color::rgb(0xFF, 0xFF, 0x00),
            input_external_link: Color::rgb(0xFF, 0xFF, 0x00),
            calculation: Color::rgb(0xAD, 0xD8, 0xE6),
            output: Color::rgb(0x90, 0xEE, 0x90),
            other: Color::rgb(0xFF, 0xC0, 0xCB),
            default: Color::rgb(0xFF, 0xC0, 0xCB),
        }
    }
}

impl ColorScheme {
    /// The fill color for a classification
    pub fn color_for(&self, classification: Classification) -> Color {
        match classification {
            Classification::InputHardcoded => self.input_hardcoded,
            Classification::InputExternalLink => self.input_external_link,
            Classification::Calculation => self.calculation,
            Classification::Output => self.output,
            Classification::Other => self.other,
        }
    }
}
