use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Malformed timestamp: date '{date}', time '{time}'")]
    MalformedTimestamp { date: String, time: String },

    #[error("Malformed {field} coordinate '{value}'")]
    MalformedLocation { field: &'static str, value: String },

    #[error("Malformed observation value '{value}' at {date} {time}")]
    MalformedObservation {
        date: String,
        time: String,
        value: String,
    },

    // timeStep.multiplier must be a whole number of seconds
    #[error("Malformed time step multiplier '{0}'")]
    MalformedTimeStep(String),

    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),
}
