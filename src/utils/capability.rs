//! Startup check that the image codecs a command needs were compiled in.

use image::ImageFormat;

use crate::icon::IconError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Decode,
    Encode,
}

/// A codec a command relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub format: ImageFormat,
    pub access: Access,
}

/// Codecs the placeholder generator needs.
pub const GENERATE: &[Requirement] = &[Requirement {
    format: ImageFormat::Png,
    access: Access::Encode,
}];

/// Codecs the photo converter needs.
pub const CONVERT: &[Requirement] = &[
    Requirement {
        format: ImageFormat::Jpeg,
        access: Access::Decode,
    },
    Requirement {
        format: ImageFormat::Png,
        access: Access::Decode,
    },
    Requirement {
        format: ImageFormat::Png,
        access: Access::Encode,
    },
];

/// Outcome of checking a set of requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    Missing(Requirement),
}

impl Requirement {
    pub fn is_enabled(&self) -> bool {
        match self.access {
            Access::Decode => self.format.reading_enabled(),
            Access::Encode => self.format.writing_enabled(),
        }
    }
}

impl Capability {
    /// Check every requirement, reporting the first one this build lacks.
    pub fn check(requirements: &[Requirement]) -> Capability {
        requirements
            .iter()
            .find(|r| !r.is_enabled())
            .map_or(Capability::Available, |r| Capability::Missing(*r))
    }

    pub fn into_result(self) -> Result<(), IconError> {
        match self {
            Capability::Available => Ok(()),
            Capability::Missing(requirement) => Err(IconError::MissingCapability {
                format: format!("{:?}", requirement.format).to_uppercase(),
                operation: match requirement.access {
                    Access::Decode => "decoding".to_string(),
                    Access::Encode => "encoding".to_string(),
                },
            }),
        }
    }
}
