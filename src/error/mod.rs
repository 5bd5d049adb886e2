use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for rejected parameter writes, prior values are always retained
pub enum ParameterError {
    /// Temperature must stay within 6 to 40 degrees celsius
    TemperatureOutOfRange,
    /// Extracellular calcium must stay within 0.5 to 4 millimolar
    CalciumOutOfRange,
    /// Sodium block fraction must stay within 0 to 1
    SodiumBlockFractionOutOfRange,
    /// Stimulus current must be a finite value
    StimulusNotFinite,
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            ParameterError::TemperatureOutOfRange => "Temperature out of range (6 to 40 celsius)",
            ParameterError::CalciumOutOfRange => "Extracellular calcium out of range (0.5 to 4 mM)",
            ParameterError::SodiumBlockFractionOutOfRange => "Sodium block fraction out of range (0 to 1)",
            ParameterError::StimulusNotFinite => "Stimulus current must be finite",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for faults in the fixed step integration loop
pub enum IntegrationError {
    /// Timestep must be a positive finite value
    NonPositiveTimestep,
    /// Voltage escaped the sane envelope (500 mV magnitude) or became non-finite
    VoltageDiverged,
}

impl Display for IntegrationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            IntegrationError::NonPositiveTimestep => "Timestep must be positive and finite",
            IntegrationError::VoltageDiverged => "Membrane voltage diverged beyond the 500 mV envelope",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for IntegrationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum MembraneExcitabilityError {
    /// Errors related to parameter validation
    ParameterRelatedError(ParameterError),
    /// Errors related to numerical integration
    IntegrationRelatedError(IntegrationError),
}

impl Display for MembraneExcitabilityError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            MembraneExcitabilityError::ParameterRelatedError(err) => write!(f, "{}", err),
            MembraneExcitabilityError::IntegrationRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for MembraneExcitabilityError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<ParameterError> for MembraneExcitabilityError {
    fn from(err: ParameterError) -> MembraneExcitabilityError {
        MembraneExcitabilityError::ParameterRelatedError(err)
    }
}

impl From<IntegrationError> for MembraneExcitabilityError {
    fn from(err: IntegrationError) -> MembraneExcitabilityError {
        MembraneExcitabilityError::IntegrationRelatedError(err)
    }
}
