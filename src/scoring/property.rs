use serde::Serialize;

/// A distinguishing attribute the engine can look for evidence of.
///
/// Adding a property means adding a variant, listing it in [`PropertyType::ALL`] and adding
/// a row to the trigger table; the scoring code does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Colour,
}

/// Lowercase trigger substrings, matched against attribute names and dictionary senses.
const PROPERTY_TRIGGERS: &[(PropertyType, &[&str])] =
    &[(PropertyType::Colour, &["color", "colour"])];

impl PropertyType {
    /// Every property type, in registration order.
    pub const ALL: [PropertyType; 1] = [PropertyType::Colour];

    pub fn triggers(self) -> &'static [&'static str] {
        PROPERTY_TRIGGERS
            .iter()
            .find(|(ty, _)| *ty == self)
            .map(|(_, triggers)| *triggers)
            .unwrap_or(&[])
    }

    /// Case-insensitive substring match against any trigger.
    pub fn is_triggered_by(self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.triggers().iter().any(|trigger| text.contains(trigger))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Colour => "colour",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "colour" | "color" => Ok(Self::Colour),
            _ => Err(format!("Unknown property type: {}", s)),
        }
    }
}
