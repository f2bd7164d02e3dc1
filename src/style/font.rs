use serde::{de, Deserialize, Deserializer, Serialize};

/// A font weight restricted to the standard stepped 100-900 scale.
///
/// Named tokens map onto the scale: `normal` is 400 and `bold` is 700. Any
/// numeric input off the hundred steps is rejected by [`FontWeight::from_numeric`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum FontWeight {
    W100,
    W200,
    W300,
    #[default]
    W400,
    W500,
    W600,
    W700,
    W800,
    W900,
}

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight::W400;
    pub const BOLD: FontWeight = FontWeight::W700;

    /// Returns the numeric weight value (100-900 scale).
    pub fn numeric_value(&self) -> u16 {
        match self {
            FontWeight::W100 => 100,
            FontWeight::W200 => 200,
            FontWeight::W300 => 300,
            FontWeight::W400 => 400,
            FontWeight::W500 => 500,
            FontWeight::W600 => 600,
            FontWeight::W700 => 700,
            FontWeight::W800 => 800,
            FontWeight::W900 => 900,
        }
    }

    /// Maps a numeric weight onto the scale, rejecting anything between steps.
    pub(crate) fn from_numeric(n: u64) -> Result<Self, String> {
        match n {
            100 => Ok(FontWeight::W100),
            200 => Ok(FontWeight::W200),
            300 => Ok(FontWeight::W300),
            400 => Ok(FontWeight::W400),
            500 => Ok(FontWeight::W500),
            600 => Ok(FontWeight::W600),
            700 => Ok(FontWeight::W700),
            800 => Ok(FontWeight::W800),
            900 => Ok(FontWeight::W900),
            _ => Err(format!("invalid font weight: {}", n)),
        }
    }

    /// Parse a font weight from a string (e.g., "bold", "400").
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" | "regular" => Ok(FontWeight::NORMAL),
            "bold" => Ok(FontWeight::BOLD),
            _ => {
                let n = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| format!("invalid font weight: '{}'", s))?;
                Self::from_numeric(n)
            }
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u64),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Self::from_numeric(n).map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub(crate) fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "italic" => Ok(FontStyle::Italic),
            _ => Err(format!("invalid font style: '{}'", s)),
        }
    }
}
