#[derive(Debug, Fail, PartialEq, Clone)]
pub enum WeatherError {
    #[fail(display = "{}", message)]
    InvalidLocation {
        message: String,
    },

    #[fail(display = "{}", message)]
    UpstreamFailure {
        message: String,
    },
}

impl WeatherError {
    pub fn invalid_location<M: Into<String>>(message: M) -> Self {
        WeatherError::InvalidLocation { message: message.into() }
    }

    pub fn upstream<M: Into<String>>(message: M) -> Self {
        WeatherError::UpstreamFailure { message: message.into() }
    }
}
