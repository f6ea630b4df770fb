use mondrian_recolor::{RecolorError, Reference, Rgb, Snapshot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Partial parameter update; absent fields keep their current value.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct ParamsUpdate {
    /// Substitute for red, as hex (`#rrggbb` or `#rgb`)
    pub red: Option<String>,
    /// Substitute for yellow
    pub yellow: Option<String>,
    /// Substitute for blue
    pub blue: Option<String>,
    /// Background color for unmatched pixels
    pub background: Option<String>,
    /// Classification threshold, clamped to 0..=150
    pub threshold: Option<i64>,
    /// Source weight in the blend, clamped to 0..=255
    pub transparency: Option<i64>,
}

impl ParamsUpdate {
    /// Apply the update on top of `snapshot`.
    ///
    /// All colors are parsed before anything is applied, so a bad hex value
    /// leaves nothing half-updated.
    pub fn apply(&self, snapshot: Snapshot) -> Result<Snapshot, RecolorError> {
        let red = parse_opt(&self.red)?;
        let yellow = parse_opt(&self.yellow)?;
        let blue = parse_opt(&self.blue)?;
        let background = parse_opt(&self.background)?;

        let mut next = snapshot;
        for (reference, color) in [
            (Reference::Red, red),
            (Reference::Yellow, yellow),
            (Reference::Blue, blue),
        ] {
            if let Some(color) = color {
                next = next.substitute(reference, color);
            }
        }
        if let Some(bg) = background {
            next = next.background(bg);
        }
        if let Some(t) = self.threshold {
            next = next.threshold(t);
        }
        if let Some(t) = self.transparency {
            next = next.transparency(t);
        }
        Ok(next)
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_none()
            && self.yellow.is_none()
            && self.blue.is_none()
            && self.background.is_none()
            && self.threshold.is_none()
            && self.transparency.is_none()
    }
}

fn parse_opt(value: &Option<String>) -> Result<Option<Rgb>, RecolorError> {
    match value {
        Some(hex) => Ok(Some(hex.parse()?)),
        None => Ok(None),
    }
}

/// Current parameters as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParamsView {
    pub red: String,
    pub yellow: String,
    pub blue: String,
    pub background: String,
    pub threshold: u8,
    pub transparency: u8,
}

impl From<&Snapshot> for ParamsView {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            red: snapshot.substitutes[Reference::Red].to_string(),
            yellow: snapshot.substitutes[Reference::Yellow].to_string(),
            blue: snapshot.substitutes[Reference::Blue].to_string(),
            background: snapshot.background.to_string(),
            threshold: snapshot.threshold.get(),
            transparency: snapshot.transparency.get(),
        }
    }
}
