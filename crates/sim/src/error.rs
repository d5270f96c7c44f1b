/// Errors that can occur while setting up or running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("Invalid plant configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    #[error("Invalid loop parameters")]
    InvalidParameters,

    #[error("Parameter error: {0}")]
    Parameter(omni_rover_core::parameters::ParameterError),
}

impl From<omni_rover_core::parameters::ParameterError> for SimulatorError {
    fn from(err: omni_rover_core::parameters::ParameterError) -> Self {
        SimulatorError::Parameter(err)
    }
}
