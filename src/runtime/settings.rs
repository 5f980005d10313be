use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest thread count accepted by [`Rntm`]
pub const MAX_THREADS: usize = 1024;

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Runtime / resource configuration.
///
/// The factorization never inspects this object.  It is forwarded unchanged
/// to the vector kernels supplied by the computation context, which may use
/// it to decide how many execution agents to employ.

#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Rntm {
    ///maximum threads for the vector kernels.
    ///choosing 0 lets the kernels choose for themselves
    #[builder(default = "0")]
    pub num_threads: usize,
}

impl Rntm {
    /// Number of threads the kernels should use, resolving the
    /// automatic setting against the available hardware parallelism.
    pub fn effective_threads(&self) -> usize {
        match self.num_threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }

    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_num_threads(self.num_threads)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for RntmBuilderError {
    fn from(e: SettingsError) -> Self {
        RntmBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl RntmBuilder {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(num_threads) = self.num_threads {
            validate_num_threads(num_threads)?;
        }
        Ok(())
    }
}

fn validate_num_threads(num_threads: usize) -> Result<(), SettingsError> {
    if num_threads > MAX_THREADS {
        Err(SettingsError::BadFieldValue("num_threads"))
    } else {
        Ok(())
    }
}

#[test]
fn test_rntm_validate() {
    assert_eq!(RntmBuilder::default().build().unwrap(), Rntm::default());

    let rntm = RntmBuilder::default().num_threads(4).build().unwrap();
    assert_eq!(rntm.effective_threads(), 4);
    assert!(Rntm::default().effective_threads() >= 1);

    // fail on too many threads
    assert!(RntmBuilder::default()
        .num_threads(MAX_THREADS + 1)
        .build()
        .is_err());

    // directly construct a bad Rntm and manually check
    let rntm = Rntm {
        num_threads: MAX_THREADS + 1,
    };
    assert!(rntm.validate().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_rntm_serde() {
    let rntm = RntmBuilder::default().num_threads(3).build().unwrap();
    let json = serde_json::to_string(&rntm).unwrap();
    assert_eq!(json, r#"{"num_threads":3}"#);

    // missing fields take their defaults
    let rntm: Rntm = serde_json::from_str("{}").unwrap();
    assert_eq!(rntm, Rntm::default());
}
