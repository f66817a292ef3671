use crate::constants::PAGES_PER_SHEET;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet imposition request
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Page source: an explicit count wins over counting the input file
    pub input_file: Option<PathBuf>,
    pub page_count: Option<usize>,

    // Signature grouping
    pub signature: SignatureSpec,

    // Put the last page on the back cover
    pub cover: bool,
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_file.is_none() && self.page_count.is_none() {
            return Err(ImposeError::Config(
                "No input file or page count specified".to_string(),
            ));
        }

        if self.page_count == Some(0) {
            return Err(ImposeError::NoPages);
        }

        match self.signature {
            SignatureSpec::Exact(n) if n == 0 || n % PAGES_PER_SHEET != 0 => {
                return Err(ImposeError::InvalidSignature(n));
            }
            // Only checkable up front when the max doesn't default to the page count
            SignatureSpec::Range { max: Some(_), .. } => {
                if let Some((min, max)) = self.signature.rounded_bounds(0)? {
                    if max <= min {
                        return Err(ImposeError::InvalidRange { min, max });
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Signatures are stored in the same text form the CLI accepts
    impl Serialize for SignatureSpec {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for SignatureSpec {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, Visitor};
            use std::fmt;

            struct SignatureSpecVisitor;

            impl<'de> Visitor<'de> for SignatureSpecVisitor {
                type Value = SignatureSpec;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a signature size or a \"min-max\" range")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<SignatureSpec, E>
                where
                    E: de::Error,
                {
                    value.parse().map_err(de::Error::custom)
                }

                fn visit_u64<E>(self, value: u64) -> std::result::Result<SignatureSpec, E>
                where
                    E: de::Error,
                {
                    self.visit_str(&value.to_string())
                }

                fn visit_unit<E>(self) -> std::result::Result<SignatureSpec, E>
                where
                    E: de::Error,
                {
                    Ok(SignatureSpec::Whole)
                }
            }

            deserializer.deserialize_any(SignatureSpecVisitor)
        }
    }
}
