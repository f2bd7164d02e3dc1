use serde::{Deserialize, Serialize};

/// How an image scales itself into its declared bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum BoxFit {
    Fill,
    #[default]
    Contain,
    Cover,
    FitWidth,
    FitHeight,
    None,
    ScaleDown,
}

impl BoxFit {
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().replace(['-', '_'], "").as_str() {
            "fill" => Ok(BoxFit::Fill),
            "contain" => Ok(BoxFit::Contain),
            "cover" => Ok(BoxFit::Cover),
            "fitwidth" => Ok(BoxFit::FitWidth),
            "fitheight" => Ok(BoxFit::FitHeight),
            "none" => Ok(BoxFit::None),
            "scaledown" => Ok(BoxFit::ScaleDown),
            _ => Err(format!("invalid box fit: '{}'", s)),
        }
    }
}
